use thiserror::Error;

use crate::loader::LoaderError;
use crate::resolver::ResolutionError;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error("{0}")]
    Message(String),
}

impl CoreError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
