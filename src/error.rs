//! Crate-wide error type.

use thiserror::Error;

use crate::validate::ValidationError;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, NamecastError>;

/// Everything that can go wrong outside the happy path.
///
/// An unknown name is NOT an error: the service reports it as a normal
/// response with a null gender, and it is carried in
/// [`Prediction`](crate::client::Prediction) as `gender: None`.
#[derive(Debug, Error)]
pub enum NamecastError {
    /// Input rejected before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport failure or unusable response from the prediction service.
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration file unreadable or malformed.
    #[error("Config error: {0}")]
    Config(String),
}
