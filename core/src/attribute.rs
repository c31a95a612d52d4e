//! Attribute definitions, handles, and identities.

use crate::{AttributeGroup, DefinitionId, DocumentId, EntityId, EntityRef};
use std::fmt;
use uuid::Uuid;

/// The fixed representation category of an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// 32-bit signed integer.
    Integer,
    /// Double precision real, stored in host units.
    Real,
    /// UTF-8 text.
    Text,
    /// Reference to another entity by id.
    Reference,
}

impl StorageKind {
    pub fn name(&self) -> &'static str {
        match self {
            StorageKind::Integer => "Integer",
            StorageKind::Real => "Real",
            StorageKind::Text => "Text",
            StorageKind::Reference => "Reference",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical quantity measured by a Real attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quantity {
    /// Dimensionless number.
    #[default]
    Number,
    Length,
    Area,
    Volume,
    /// Angles are stored as-is; they do not depend on the model unit.
    Angle,
}

impl Quantity {
    /// Power of the model unit this quantity scales with.
    pub fn dimension(&self) -> i32 {
        match self {
            Quantity::Length => 1,
            Quantity::Area => 2,
            Quantity::Volume => 3,
            Quantity::Number | Quantity::Angle => 0,
        }
    }
}

/// Where a definition comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionOrigin {
    /// Member of the host's well-known enumeration, valid in every document.
    WellKnown,
    /// Definition record stored in one document.
    Document(DocumentId),
}

/// Immutable description of an attribute kind on a host entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    /// Stable identifier.
    pub id: DefinitionId,
    /// Well-known or document-local.
    pub origin: DefinitionOrigin,
    /// Human-readable name.
    pub name: String,
    /// Group the attribute is listed under.
    pub group: AttributeGroup,
    /// Storage representation.
    pub storage: StorageKind,
    /// Physical quantity (drives unit scaling for Real/Integer values).
    pub quantity: Quantity,
    /// Globally unique id, for shared definitions.
    pub guid: Option<Uuid>,
}

impl AttributeDefinition {
    pub fn well_known(id: DefinitionId, name: impl Into<String>, storage: StorageKind) -> Self {
        Self {
            id,
            origin: DefinitionOrigin::WellKnown,
            name: name.into(),
            group: AttributeGroup::INVALID,
            storage,
            quantity: Quantity::Number,
            guid: None,
        }
    }

    pub fn local(
        document: DocumentId,
        id: DefinitionId,
        name: impl Into<String>,
        storage: StorageKind,
    ) -> Self {
        Self {
            id,
            origin: DefinitionOrigin::Document(document),
            name: name.into(),
            group: AttributeGroup::INVALID,
            storage,
            quantity: Quantity::Number,
            guid: None,
        }
    }

    pub fn in_group(mut self, group: AttributeGroup) -> Self {
        self.group = group;
        self
    }

    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_guid(mut self, guid: Uuid) -> Self {
        self.guid = Some(guid);
        self
    }

    pub fn is_well_known(&self) -> bool {
        matches!(self.origin, DefinitionOrigin::WellKnown)
    }

    /// Cross-entity identity of attributes built from this definition.
    pub fn identity(&self) -> AttributeIdentity {
        AttributeIdentity::new(self.group, self.id)
    }
}

/// A definition bound to one entity instance.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeHandle {
    /// Entity that owns the attribute.
    pub owner: EntityRef,
    /// Definition of the attribute.
    pub definition: AttributeDefinition,
    /// Storage kind as reported by the host for this instance.
    pub storage: StorageKind,
    /// Whether the host refuses writes to this instance.
    pub read_only: bool,
}

impl AttributeHandle {
    pub fn new(owner: EntityRef, definition: AttributeDefinition) -> Self {
        let storage = definition.storage;
        Self {
            owner,
            definition,
            storage,
            read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn identity(&self) -> AttributeIdentity {
        self.definition.identity()
    }

    /// Returns true if the handle is bound to exactly this entity.
    pub fn belongs_to(&self, entity: &EntityRef) -> bool {
        self.owner == *entity
    }
}

/// Equality key for "the same attribute" across different entities.
///
/// Excludes the owning entity. Field order gives the schema
/// ordering: group first, then definition id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeIdentity {
    pub group: AttributeGroup,
    pub definition: DefinitionId,
}

impl AttributeIdentity {
    pub fn new(group: AttributeGroup, definition: DefinitionId) -> Self {
        Self { group, definition }
    }
}

impl fmt::Display for AttributeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.definition)
    }
}

/// A value in one of the four storage representations.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    Integer(i32),
    Real(f64),
    Text(String),
    Reference(EntityId),
}

impl StorageValue {
    pub fn kind(&self) -> StorageKind {
        match self {
            StorageValue::Integer(_) => StorageKind::Integer,
            StorageValue::Real(_) => StorageKind::Real,
            StorageValue::Text(_) => StorageKind::Text,
            StorageValue::Reference(_) => StorageKind::Reference,
        }
    }
}
