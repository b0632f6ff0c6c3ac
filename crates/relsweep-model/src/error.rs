use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown history format: {0} (expected: structured|table)")]
    UnknownHistoryFormat(String),

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
