//! Host traits consumed by the resolver and the coercer.

use attrix_core::{
    AttributeDefinition, AttributeHandle, AttributeIdentity, DefinitionId, DocumentId, EntityRef,
    StorageValue,
};
use uuid::Uuid;

use crate::{HostResult, WellKnownCatalog};

/// Read-only attribute lookups on a host document.
///
/// Every lookup returns `None` when the attribute is simply not present on
/// the entity; telling "unset" from "invalid" is the resolver's job.
pub trait AttributeLookup {
    /// The host's well-known definition enumeration.
    fn catalog(&self) -> &WellKnownCatalog;

    /// Look up a well-known attribute on an entity.
    fn lookup_well_known(&self, entity: &EntityRef, id: DefinitionId) -> Option<AttributeHandle>;

    /// Look up an attribute by exact name, instance attributes first, then
    /// the attributes of the entity's type.
    fn lookup_by_name(&self, entity: &EntityRef, name: &str) -> Option<AttributeHandle>;

    /// Look up an attribute by its definition's global id.
    fn lookup_by_global_id(&self, entity: &EntityRef, guid: Uuid) -> Option<AttributeHandle>;

    /// Look up a document-local definition record.
    fn lookup_definition(
        &self,
        document: DocumentId,
        id: DefinitionId,
    ) -> Option<AttributeDefinition>;

    /// Bind a definition to an entity.
    fn lookup_by_definition(
        &self,
        entity: &EntityRef,
        definition: &AttributeDefinition,
    ) -> Option<AttributeHandle>;

    /// All instance attributes of an entity, in host order.
    ///
    /// An entity the host does not know yields an empty list.
    fn attributes_of(&self, entity: &EntityRef) -> Vec<AttributeHandle>;

    /// The instance attribute of an entity with the given identity, whichever
    /// document its definition comes from.
    fn lookup_by_identity(
        &self,
        entity: &EntityRef,
        identity: AttributeIdentity,
    ) -> Option<AttributeHandle> {
        self.attributes_of(entity)
            .into_iter()
            .find(|h| h.identity() == identity)
    }
}

/// Attribute value reads and writes.
pub trait AttributeStore: AttributeLookup {
    /// Current stored value, `None` when unset.
    fn read(&self, handle: &AttributeHandle) -> Option<StorageValue>;

    /// Replace the stored value. Implementations must either apply the whole
    /// value or leave the attribute unchanged.
    fn write(&mut self, handle: &AttributeHandle, value: StorageValue) -> HostResult<()>;
}
