use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChromaError>;

#[derive(Debug, Error)]
pub enum ChromaError {
    #[error("validation error: {0}")]
    Validation(String),
}
