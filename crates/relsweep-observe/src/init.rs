//! Subscriber assembly and global install.
use std::io;

use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::LoggerConfig,
    error::{LoggerError, LoggerResult},
    timer::UtcTimer,
};

pub(crate) fn text(cfg: &LoggerConfig) -> LoggerResult<()> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(cfg.color_enabled())
        .with_target(cfg.show_target)
        .with_timer(UtcTimer);

    set_global(
        tracing_subscriber::registry()
            .with(cfg.level.to_env_filter())
            .with(layer),
    )
}

pub(crate) fn json(cfg: &LoggerConfig) -> LoggerResult<()> {
    let layer = fmt::layer()
        .json()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(cfg.show_target)
        .with_timer(UtcTimer);

    set_global(
        tracing_subscriber::registry()
            .with(cfg.level.to_env_filter())
            .with(layer),
    )
}

#[cfg(target_os = "linux")]
pub(crate) fn journald(cfg: &LoggerConfig) -> LoggerResult<()> {
    let layer =
        tracing_journald::layer().map_err(|e| LoggerError::JournaldInitFailed(e.to_string()))?;

    set_global(
        tracing_subscriber::registry()
            .with(cfg.level.to_env_filter())
            .with(layer),
    )
}

/// Non-Linux stub; the format parser normally refuses journald first.
#[cfg(not(target_os = "linux"))]
pub(crate) fn journald(_cfg: &LoggerConfig) -> LoggerResult<()> {
    Err(LoggerError::JournaldNotSupported)
}

fn set_global<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global default can be set once per process; one test owns it.
    #[test]
    fn second_install_fails() {
        let cfg = LoggerConfig {
            use_color: false,
            ..Default::default()
        };

        assert!(text(&cfg).is_ok());
        assert!(matches!(json(&cfg), Err(LoggerError::AlreadyInitialized)));
    }
}
