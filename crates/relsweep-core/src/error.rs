use thiserror::Error;

use relsweep_model::ModelError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed inventory document: {0}")]
    MalformedInventory(String),

    #[error("malformed history document: {0}")]
    MalformedHistory(String),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

pub type CoreResult<T> = Result<T, CoreError>;
