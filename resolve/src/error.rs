//! Resolution error types.

use attrix_core::{messages, DefinitionId, Diagnostic, DocumentId, EntityRef, Severity};
use thiserror::Error;

/// Result type for key resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Why a key did not resolve to an attribute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// The key is valid but the entity has no such attribute.
    #[error("{}", messages::not_defined(.label))]
    NotDefined { label: String },

    /// A well-known key outside the host's enumeration.
    #[error("Unknown well-known parameter id {0}")]
    UnknownWellKnownId(DefinitionId),

    /// The key carries no evidence it denotes an attribute at all.
    #[error("{}", messages::conversion_failed(.shape))]
    Conversion { shape: &'static str },

    /// A document-scoped key used against an entity of another document.
    #[error("'ParameterKey' doesn't belong same document as '{}'", messages::ENTITY_NOUN)]
    ForeignDocument {
        key_document: DocumentId,
        entity_document: DocumentId,
    },

    /// A live attribute reference owned by a different entity.
    #[error("Parameter '{name}' doesn't belong to '{}'", messages::ENTITY_NOUN)]
    ForeignHandle { name: String, owner: EntityRef },

    /// A wrapped value of a shape no key can be built from.
    #[error("{}", messages::conversion_failed(.shape))]
    UnsupportedKey { shape: &'static str },
}

impl ResolveError {
    pub fn not_defined(label: impl Into<String>) -> Self {
        Self::NotDefined {
            label: label.into(),
        }
    }

    pub fn conversion(shape: &'static str) -> Self {
        Self::Conversion { shape }
    }

    pub fn foreign_document(key_document: DocumentId, entity_document: DocumentId) -> Self {
        Self::ForeignDocument {
            key_document,
            entity_document,
        }
    }

    pub fn foreign_handle(name: impl Into<String>, owner: EntityRef) -> Self {
        Self::ForeignHandle {
            name: name.into(),
            owner,
        }
    }

    pub fn unsupported_key(shape: &'static str) -> Self {
        Self::UnsupportedKey { shape }
    }

    /// Warnings for valid-but-unset keys, errors for everything else.
    pub fn severity(&self) -> Severity {
        match self {
            ResolveError::NotDefined { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }

    /// Host-facing message about `entity`.
    pub fn to_diagnostic(&self, entity: EntityRef) -> Diagnostic {
        Diagnostic::new(self.severity(), self.to_string()).with_entity(entity)
    }
}
