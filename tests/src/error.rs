//! Fixture error types.

use attrix_host::HostError;
use thiserror::Error;

/// Result type for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Errors building a world or checking expectations.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Unknown definition '{0}'")]
    UnknownDefinition(String),

    #[error("Unknown document '{0}'")]
    UnknownDocument(String),

    #[error("Unknown entity '{0}'")]
    UnknownEntity(String),

    #[error("Duplicate name '{0}'")]
    DuplicateName(String),

    #[error("Host rejected fixture: {0}")]
    Host(#[from] HostError),

    #[error("Expectation failed: {0}")]
    Expectation(String),
}

impl FixtureError {
    pub fn expectation(message: impl Into<String>) -> Self {
        Self::Expectation(message.into())
    }
}
