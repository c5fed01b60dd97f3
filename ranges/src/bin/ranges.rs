use anyhow::{Context, Result};
use clap::Parser;
use range_collection::bound::BOUND_TYPE_NAME;
use range_collection::script::Script;
use range_collection::RangeCollection;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Applies a script of range commands (`add <from> <to>`, `remove <from> <to>`, `print`, `clear`)
/// to an initially empty range collection.
#[derive(Debug, Parser)]
#[command(name = "ranges", rename_all = "kebab-case")]
struct Args {
    /// Script to execute. If absent, the script is read from the standard input.
    script: Option<PathBuf>,

    /// Print the collection after the last command.
    #[arg(long)]
    print_final: bool,

    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::from(std::time::Instant::now()))
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let text = match &args.script {
        Some(file) => {
            std::fs::read_to_string(file).with_context(|| format!("Unable to read script {}", file.display()))?
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Unable to read script from standard input")?;
            text
        }
    };
    let script: Script = text.parse()?;
    tracing::info!("running {} commands with {BOUND_TYPE_NAME} bounds", script.commands().len());

    let mut collection = RangeCollection::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    script.run(&mut collection, &mut out)?;
    if args.print_final {
        writeln!(out, "{collection}")?;
    }
    Ok(())
}
