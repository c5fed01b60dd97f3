//! Global parameters of the crate that can be set from environment variables.
//!
//! A parameter is declared as a static holding the name of an environment variable and the textual
//! representation of its default value:
//!
//! ```
//! use range_collection::params::EnvParam;
//! static VERBOSE_SPLITS: EnvParam<bool> = EnvParam::new("RANGES_VERBOSE_SPLITS", "false");
//!
//! assert!(!VERBOSE_SPLITS.get());
//! ```
//!
//! The value is read on first access and cached afterwards: changes to the environment variable
//! after the first access are silently ignored.

use once_cell::sync::OnceCell;
use std::str::FromStr;

/// If true, the full invariant of every [`RangeCollection`](crate::RangeCollection) is checked after
/// each mutation, panicking on violation. Debug builds always perform the check.
pub static CHECK_INVARIANTS: EnvParam<bool> = EnvParam::new("RANGES_CHECK_INVARIANTS", "false");

pub struct EnvParam<T> {
    value: OnceCell<T>,
    env: &'static str,
    default: &'static str,
}

impl<T> EnvParam<T> {
    /// Creates a new parameter that will be initialized from the environment variable `env`, or from
    /// `default` if the variable is not set.
    pub const fn new(env: &'static str, default: &'static str) -> EnvParam<T> {
        EnvParam {
            value: OnceCell::new(),
            env,
            default,
        }
    }

    /// Name of the environment variable backing this parameter.
    pub fn name(&self) -> &'static str {
        self.env
    }
}

impl<T: FromStr> EnvParam<T> {
    fn parse_default(&self) -> T {
        match T::from_str(self.default) {
            Ok(value) => value,
            Err(_) => panic!("[{}] invalid default value \"{}\"", self.env, self.default),
        }
    }

    fn read(&self) -> T {
        match std::env::var(self.env) {
            Ok(text) => T::from_str(&text).unwrap_or_else(|_| {
                tracing::warn!(
                    "could not parse \"{}\" for parameter {}, using default \"{}\"",
                    text,
                    self.env,
                    self.default
                );
                self.parse_default()
            }),
            Err(std::env::VarError::NotPresent) => self.parse_default(),
            Err(err) => {
                tracing::warn!("{}: {}, using default \"{}\"", self.env, err, self.default);
                self.parse_default()
            }
        }
    }

    /// Returns the value of the parameter, reading it from the environment on first access.
    ///
    /// # Panic
    /// Panics if the value must be taken from the default and the default cannot be parsed.
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        *self.get_ref()
    }

    /// Same as [`EnvParam::get`] but returns a reference to the value.
    pub fn get_ref(&self) -> &T {
        self.value.get_or_init(|| self.read())
    }

    /// Forces the value of the parameter.
    ///
    /// # Panic
    /// Panics if the parameter was already initialized, typically by a previous read.
    pub fn set(&self, value: T) {
        if self.value.set(value).is_err() {
            panic!("Parameter {} is already initialized (i.e. was previously accessed).", self.env);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_value() {
        static PARAM: EnvParam<u32> = EnvParam::new("RANGES_TEST_UNSET_PARAM", "3");
        assert_eq!(PARAM.get(), 3);
        assert_eq!(PARAM.name(), "RANGES_TEST_UNSET_PARAM");
    }

    #[test]
    fn forced_value() {
        static PARAM: EnvParam<bool> = EnvParam::new("RANGES_TEST_FORCED_PARAM", "false");
        PARAM.set(true);
        assert!(PARAM.get());
    }

    #[test]
    #[should_panic]
    fn set_after_read() {
        static PARAM: EnvParam<i64> = EnvParam::new("RANGES_TEST_READ_PARAM", "0");
        assert_eq!(PARAM.get(), 0);
        PARAM.set(1);
    }
}
