//! Error types for tone-mapping operations.

use thiserror::Error;

/// Error type for tone-mapping operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for tone-mapping operations.
pub type OpsResult<T> = Result<T, OpsError>;

impl From<tonemap_core::Error> for OpsError {
    fn from(err: tonemap_core::Error) -> Self {
        OpsError::InvalidDimensions(err.to_string())
    }
}
