//! Schema error types.

use attrix_core::{AttributeIdentity, RecipientId};
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised by explicit wiring and schema construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("No output port for parameter {0}")]
    PortNotFound(AttributeIdentity),

    #[error("Duplicate output port for parameter {0}")]
    DuplicatePort(AttributeIdentity),

    #[error("Recipient {recipient} is already connected to {identity}")]
    AlreadyConnected {
        identity: AttributeIdentity,
        recipient: RecipientId,
    },

    #[error("Recipient {recipient} is not connected to {identity}")]
    NotConnected {
        identity: AttributeIdentity,
        recipient: RecipientId,
    },
}

impl SchemaError {
    pub fn already_connected(identity: AttributeIdentity, recipient: RecipientId) -> Self {
        Self::AlreadyConnected {
            identity,
            recipient,
        }
    }

    pub fn not_connected(identity: AttributeIdentity, recipient: RecipientId) -> Self {
        Self::NotConnected {
            identity,
            recipient,
        }
    }
}
