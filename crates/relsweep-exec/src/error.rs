use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn '{command}': {reason}")]
    Spawn { command: String, reason: String },

    #[error("'{command}' exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("'{command}' was terminated by a signal")]
    KilledBySignal { command: String },

    #[error("'{command}' did not finish within {limit:?}")]
    DeadlineExceeded { command: String, limit: Duration },

    #[error("fetch task panicked or was aborted: {0}")]
    TaskJoin(String),
}

pub type ExecResult<T> = Result<T, ExecError>;
