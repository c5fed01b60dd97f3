//! A minimal line-based command language for driving a [`RangeCollection`].
//!
//! ```text
//! # comments and blank lines are ignored
//! add 1 5
//! add 10 20
//! remove 3 12
//! print
//! clear
//! ```
//!
//! Each `print` writes the display representation of the collection on its own line.

use crate::bound::Bound;
use crate::collection::RangeCollection;
use crate::range::{Range, RangeError};
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("line {line}: unknown command \"{command}\"")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: \"{command}\" expects {expected} argument(s) but got {found}")]
    WrongArity {
        line: usize,
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {source}")]
    InvalidRange {
        line: usize,
        #[source]
        source: RangeError,
    },
    #[error("could not write output")]
    Output(#[from] std::io::Error),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Add(Range),
    Remove(Range),
    Print,
    Clear,
}

impl Command {
    /// Parses a single line. Returns `None` for blank lines and comments.
    fn parse(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
        let text = text.split('#').next().unwrap_or_default();
        let mut tokens = text.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();
        let arity = |command: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(ScriptError::WrongArity {
                    line,
                    command,
                    expected,
                    found: args.len(),
                })
            }
        };
        let range = || {
            let range = match (args[0].parse::<Bound>(), args[1].parse::<Bound>()) {
                (Ok(from), Ok(to)) => Range::new(from, to),
                _ => Err(RangeError::invalid(args[0], args[1])),
            };
            range.map_err(|source| ScriptError::InvalidRange { line, source })
        };

        let command = match keyword {
            "add" => {
                arity("add", 2)?;
                Command::Add(range()?)
            }
            "remove" => {
                arity("remove", 2)?;
                Command::Remove(range()?)
            }
            "print" => {
                arity("print", 0)?;
                Command::Print
            }
            "clear" => {
                arity("clear", 0)?;
                Command::Clear
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: other.to_string(),
                })
            }
        };
        Ok(Some(command))
    }
}

/// A fully validated sequence of commands.
#[derive(Clone, Debug, Default)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Applies all commands in order to the collection, writing the output of `print` commands to `out`.
    pub fn run(&self, collection: &mut RangeCollection, out: &mut impl Write) -> Result<(), ScriptError> {
        for command in &self.commands {
            match *command {
                Command::Add(range) => collection.add_range(range),
                Command::Remove(range) => collection.remove_range(range),
                Command::Print => writeln!(out, "{collection}")?,
                Command::Clear => collection.clear(),
            }
        }
        Ok(())
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    /// Parses and validates the whole script, failing on the first invalid line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut commands = Vec::new();
        for (index, text) in s.lines().enumerate() {
            if let Some(command) = Command::parse(index + 1, text)? {
                commands.push(command);
            }
        }
        Ok(Script { commands })
    }
}
