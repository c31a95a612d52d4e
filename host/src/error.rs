//! Host error types.

use attrix_core::{DefinitionId, DocumentId, EntityRef, StorageKind};
use thiserror::Error;

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Errors reported by a host document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Entity not found: {0}")]
    EntityNotFound(EntityRef),

    #[error("Attribute not found: {name} on entity {entity}")]
    AttributeNotFound { entity: EntityRef, name: String },

    #[error("Attribute '{name}' is read-only")]
    ReadOnly { name: String },

    #[error("Storage kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        expected: StorageKind,
        actual: StorageKind,
    },

    #[error("Duplicate definition id: {0}")]
    DuplicateDefinition(DefinitionId),

    #[error("Unknown well-known definition id: {0}")]
    UnknownWellKnown(DefinitionId),

    #[error("Definition {0} is well-known, not document-local")]
    NotDocumentLocal(DefinitionId),

    #[error("Definition '{name}' does not belong to document {document}")]
    ForeignDefinition { name: String, document: DocumentId },
}

impl HostError {
    pub fn attribute_not_found(entity: EntityRef, name: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            entity,
            name: name.into(),
        }
    }

    pub fn read_only(name: impl Into<String>) -> Self {
        Self::ReadOnly { name: name.into() }
    }

    pub fn kind_mismatch(expected: StorageKind, actual: StorageKind) -> Self {
        Self::KindMismatch { expected, actual }
    }

    pub fn foreign_definition(name: impl Into<String>, document: DocumentId) -> Self {
        Self::ForeignDefinition {
            name: name.into(),
            document,
        }
    }
}
