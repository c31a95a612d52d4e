//! Coercion error types.

use attrix_core::{messages, StorageKind};
use attrix_host::HostError;
use thiserror::Error;

/// Result type for coercion operations.
pub type CoerceResult<T> = Result<T, CoerceError>;

/// Errors that can occur while converting or writing a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoerceError {
    /// No conversion exists for this (storage kind, value shape) pair.
    #[error("{}", messages::unable_to_cast(.actual, .expected.name()))]
    Mismatch {
        expected: StorageKind,
        actual: &'static str,
    },

    #[error("Value {value} is out of range for {expected}")]
    OutOfRange { expected: StorageKind, value: i64 },

    #[error("Value is not a number")]
    NotANumber,

    #[error("Parameter '{name}' is read-only")]
    ReadOnly { name: String },

    #[error("Invalid model unit scale: {0}")]
    InvalidUnitScale(f64),

    #[error("Unable to set 'Value' to parameter {name} : {source}")]
    Host {
        name: String,
        #[source]
        source: HostError,
    },
}

impl CoerceError {
    pub fn mismatch(expected: StorageKind, actual: &'static str) -> Self {
        Self::Mismatch { expected, actual }
    }

    pub fn out_of_range(expected: StorageKind, value: i64) -> Self {
        Self::OutOfRange { expected, value }
    }

    pub fn read_only(name: impl Into<String>) -> Self {
        Self::ReadOnly { name: name.into() }
    }

    pub fn host(name: impl Into<String>, source: HostError) -> Self {
        Self::Host {
            name: name.into(),
            source,
        }
    }
}
