//! Identity types for Attrix.
//!
//! Identifiers are plain integers wrapped in newtypes so a document id can
//! never be confused with an entity id or a definition id.

use std::fmt;

/// Identifier of a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl DocumentId {
    /// Create a new DocumentId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc{}", self.0)
    }
}

/// Identifier of an entity within its document.
///
/// Signed because hosts reserve negative ids for built-in records
/// (categories, well-known definitions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub i64);

impl EntityId {
    /// Create a new EntityId from a raw value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fully qualified entity reference: which document, which entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityRef {
    pub document: DocumentId,
    pub id: EntityId,
}

impl EntityRef {
    pub fn new(document: DocumentId, id: EntityId) -> Self {
        Self { document, id }
    }

    /// Returns true if both references live in the same document.
    pub fn same_document(&self, other: &EntityRef) -> bool {
        self.document == other.document
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.document, self.id)
    }
}

/// Identifier of an attribute definition.
///
/// Either a value of the host's well-known enumeration or the id of a
/// document-local definition record. Which one it is cannot be told from the
/// number alone; the catalog decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionId(pub i64);

impl DefinitionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}

/// Group (category tag) an attribute is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeGroup(pub i32);

impl AttributeGroup {
    /// Attributes without a group sort first.
    pub const INVALID: AttributeGroup = AttributeGroup(-1);

    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for AttributeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Identifier of a host category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cat{}", self.0)
    }
}

/// A definition id that remembers the document it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefinitionKey {
    pub document: DocumentId,
    pub id: DefinitionId,
}

impl DefinitionKey {
    pub fn new(document: DocumentId, id: DefinitionId) -> Self {
        Self { document, id }
    }
}

impl fmt::Display for DefinitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.document, self.id)
    }
}

/// Opaque reference to a downstream input wired to one of a node's ports.
///
/// The core never looks inside a recipient; it only records and re-links it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipientId(pub u64);

impl RecipientId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
