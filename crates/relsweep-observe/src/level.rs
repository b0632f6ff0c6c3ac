use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{LoggerError, LoggerResult};

/// A validated `EnvFilter` expression.
///
/// The raw string is checked once, where the value enters the program (a
/// flag or a config file); everything downstream can turn it into a filter
/// without re-validating. `"info"` is plenty for a normal run;
/// `"relsweep_core=debug,info"` additionally shows the per-stage pipeline
/// counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Validate and wrap a filter expression.
    ///
    /// # Examples
    /// ```
    /// use relsweep_observe::LoggerLevel;
    ///
    /// let level = LoggerLevel::new("relsweep_exec=trace,info").unwrap();
    /// assert_eq!(level.as_str(), "relsweep_exec=trace,info");
    ///
    /// assert!(LoggerLevel::new("relsweep_exec=shouty").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> LoggerResult<Self> {
        Self::try_from(s.into())
    }

    /// The expression exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the filter; the string was validated on construction.
    pub(crate) fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.0).expect("validated on construction")
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if let Err(e) = EnvFilter::try_new(&s) {
            return Err(LoggerError::InvalidLevel(format!("{s}: {e}")));
        }
        Ok(Self(s))
    }
}

impl From<LoggerLevel> for String {
    fn from(level: LoggerLevel) -> Self {
        level.0
    }
}
