use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, ScratchError>;

#[derive(Error, Debug)]
pub enum ScratchError {
    #[error("Card not found: {0}")]
    CardNotFound(Uuid),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Drawing surface has no area")]
    EmptySurface,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScratchError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
