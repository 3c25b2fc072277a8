use thiserror::Error;

/// Storage-level failure raised by repository adapters.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
