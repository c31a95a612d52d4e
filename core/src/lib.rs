//! Attrix Core Types
//!
//! This crate provides the foundational types shared by every Attrix crate:
//! - Identity types (DocumentId, EntityId, EntityRef, DefinitionId, RecipientId)
//! - Attribute types (AttributeDefinition, AttributeHandle, AttributeIdentity)
//! - Value types (the generic Value enum and the four-kind StorageValue)
//! - Diagnostics (severity-classified messages surfaced to the host)

mod attribute;
mod diagnostic;
mod id;
pub mod messages;
mod value;

pub use attribute::*;
pub use diagnostic::*;
pub use id::*;
pub use value::*;
