use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format {0:?} (expected text, json or journald)")]
    InvalidFormat(String),

    #[error("journald logging requires Linux")]
    JournaldNotSupported,

    #[error("journald socket unavailable: {0}")]
    JournaldInitFailed(String),

    #[error("logger is already initialized")]
    AlreadyInitialized,

    #[error("invalid log level filter: {0}")]
    InvalidLevel(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
