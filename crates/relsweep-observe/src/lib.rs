//! Logging setup for the relsweep binary.
//!
//! Everything relsweep prints on stdout is product output (the dry-run
//! command, the column report, helm's own output), so log lines always go
//! to stderr; journald bypasses the streams entirely.
mod config;
pub use config::LoggerConfig;

mod error;
pub use error::{LoggerError, LoggerResult};

mod format;
pub use format::LoggerFormat;

mod init;

mod level;
pub use level::LoggerLevel;

mod timer;

/// Install the global tracing subscriber described by `cfg`.
///
/// Must be called once, before the first log line; a second call fails with
/// [`LoggerError::AlreadyInitialized`].
///
/// # Examples
/// ```rust
/// use relsweep_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger must initialize");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::text(cfg),
        LoggerFormat::Json => init::json(cfg),
        LoggerFormat::Journald => init::journald(cfg),
    }
}
