//! In-memory host documents.

use attrix_core::{
    AttributeDefinition, AttributeHandle, DefinitionId, DefinitionOrigin, DocumentId, EntityId,
    EntityRef, StorageValue,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{AttributeLookup, AttributeStore, HostError, HostResult, WellKnownCatalog};

/// One attribute slot on an entity.
#[derive(Debug, Clone)]
struct Slot {
    definition: AttributeDefinition,
    value: Option<StorageValue>,
    read_only: bool,
}

#[derive(Debug, Default)]
struct Entity {
    /// Type entity whose attributes are visible to name lookups.
    type_entity: Option<EntityId>,
    /// Instance attributes in attach order.
    slots: Vec<Slot>,
}

impl Entity {
    fn slot(&self, definition: &AttributeDefinition) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|s| s.definition.id == definition.id && s.definition.origin == definition.origin)
    }

    fn slot_mut(&mut self, definition: &AttributeDefinition) -> Option<&mut Slot> {
        self.slots
            .iter_mut()
            .find(|s| s.definition.id == definition.id && s.definition.origin == definition.origin)
    }
}

#[derive(Debug, Default)]
struct Document {
    /// Document-local definition records.
    definitions: HashMap<DefinitionId, AttributeDefinition>,
    entities: HashMap<EntityId, Entity>,
    next_entity_id: i64,
}

/// An in-memory host holding any number of documents.
#[derive(Debug)]
pub struct MemoryHost {
    catalog: WellKnownCatalog,
    documents: HashMap<DocumentId, Document>,
    next_document_id: u64,
}

impl MemoryHost {
    /// Create a host with no documents.
    pub fn new(catalog: WellKnownCatalog) -> Self {
        Self {
            catalog,
            documents: HashMap::new(),
            next_document_id: 1,
        }
    }

    /// Open a new, empty document.
    pub fn add_document(&mut self) -> DocumentId {
        let id = DocumentId::new(self.next_document_id);
        self.next_document_id += 1;
        self.documents.insert(
            id,
            Document {
                next_entity_id: 1,
                ..Document::default()
            },
        );
        id
    }

    /// Register a document-local definition record.
    pub fn add_definition(&mut self, definition: AttributeDefinition) -> HostResult<()> {
        let DefinitionOrigin::Document(document_id) = definition.origin else {
            return Err(HostError::NotDocumentLocal(definition.id));
        };
        let document = self
            .documents
            .get_mut(&document_id)
            .ok_or(HostError::DocumentNotFound(document_id))?;
        if document.definitions.contains_key(&definition.id) {
            return Err(HostError::DuplicateDefinition(definition.id));
        }
        document.definitions.insert(definition.id, definition);
        Ok(())
    }

    /// Create an entity in a document.
    pub fn add_entity(&mut self, document: DocumentId) -> HostResult<EntityRef> {
        let doc = self
            .documents
            .get_mut(&document)
            .ok_or(HostError::DocumentNotFound(document))?;
        let id = EntityId::new(doc.next_entity_id);
        doc.next_entity_id += 1;
        doc.entities.insert(id, Entity::default());
        Ok(EntityRef::new(document, id))
    }

    /// Make `type_entity` the type of `entity`. Both must share a document.
    pub fn set_type(&mut self, entity: EntityRef, type_entity: EntityRef) -> HostResult<()> {
        if !entity.same_document(&type_entity) || self.entity(&type_entity).is_none() {
            return Err(HostError::EntityNotFound(type_entity));
        }
        let target = self
            .entity_mut(&entity)
            .ok_or(HostError::EntityNotFound(entity))?;
        target.type_entity = Some(type_entity.id);
        Ok(())
    }

    /// Attach an attribute to an entity, optionally with an initial value.
    pub fn attach(
        &mut self,
        entity: EntityRef,
        definition: &AttributeDefinition,
        value: Option<StorageValue>,
    ) -> HostResult<()> {
        self.attach_slot(entity, definition, value, false)
    }

    /// Attach an attribute the host refuses to write.
    pub fn attach_read_only(
        &mut self,
        entity: EntityRef,
        definition: &AttributeDefinition,
        value: Option<StorageValue>,
    ) -> HostResult<()> {
        self.attach_slot(entity, definition, value, true)
    }

    fn attach_slot(
        &mut self,
        entity: EntityRef,
        definition: &AttributeDefinition,
        value: Option<StorageValue>,
        read_only: bool,
    ) -> HostResult<()> {
        match definition.origin {
            DefinitionOrigin::WellKnown => {
                if !self.catalog.contains(definition.id) {
                    return Err(HostError::UnknownWellKnown(definition.id));
                }
            }
            DefinitionOrigin::Document(document) => {
                if document != entity.document {
                    return Err(HostError::foreign_definition(
                        definition.name.clone(),
                        entity.document,
                    ));
                }
            }
        }
        if let Some(value) = &value {
            if value.kind() != definition.storage {
                return Err(HostError::kind_mismatch(definition.storage, value.kind()));
            }
        }

        let target = self
            .entity_mut(&entity)
            .ok_or(HostError::EntityNotFound(entity))?;
        let slot = Slot {
            definition: definition.clone(),
            value,
            read_only,
        };
        match target.slot_mut(definition) {
            Some(existing) => *existing = slot,
            None => target.slots.push(slot),
        }
        Ok(())
    }

    fn entity(&self, entity: &EntityRef) -> Option<&Entity> {
        self.documents
            .get(&entity.document)
            .and_then(|doc| doc.entities.get(&entity.id))
    }

    fn entity_mut(&mut self, entity: &EntityRef) -> Option<&mut Entity> {
        self.documents
            .get_mut(&entity.document)
            .and_then(|doc| doc.entities.get_mut(&entity.id))
    }

    fn find_handle(
        &self,
        entity: &EntityRef,
        predicate: impl Fn(&AttributeDefinition) -> bool,
    ) -> Option<AttributeHandle> {
        let target = self.entity(entity)?;
        target
            .slots
            .iter()
            .find(|s| predicate(&s.definition))
            .map(|s| Self::handle(*entity, s))
    }

    fn handle(owner: EntityRef, slot: &Slot) -> AttributeHandle {
        let handle = AttributeHandle::new(owner, slot.definition.clone());
        if slot.read_only {
            handle.read_only()
        } else {
            handle
        }
    }
}

impl AttributeLookup for MemoryHost {
    fn catalog(&self) -> &WellKnownCatalog {
        &self.catalog
    }

    fn lookup_well_known(&self, entity: &EntityRef, id: DefinitionId) -> Option<AttributeHandle> {
        self.find_handle(entity, |d| d.is_well_known() && d.id == id)
    }

    fn lookup_by_name(&self, entity: &EntityRef, name: &str) -> Option<AttributeHandle> {
        if let Some(handle) = self.find_handle(entity, |d| d.name == name) {
            return Some(handle);
        }
        let type_id = self.entity(entity)?.type_entity?;
        let type_ref = EntityRef::new(entity.document, type_id);
        self.find_handle(&type_ref, |d| d.name == name)
    }

    fn lookup_by_global_id(&self, entity: &EntityRef, guid: Uuid) -> Option<AttributeHandle> {
        self.find_handle(entity, |d| d.guid == Some(guid))
    }

    fn lookup_definition(
        &self,
        document: DocumentId,
        id: DefinitionId,
    ) -> Option<AttributeDefinition> {
        self.documents
            .get(&document)
            .and_then(|doc| doc.definitions.get(&id))
            .cloned()
    }

    fn lookup_by_definition(
        &self,
        entity: &EntityRef,
        definition: &AttributeDefinition,
    ) -> Option<AttributeHandle> {
        let target = self.entity(entity)?;
        target.slot(definition).map(|s| Self::handle(*entity, s))
    }

    fn attributes_of(&self, entity: &EntityRef) -> Vec<AttributeHandle> {
        self.entity(entity)
            .map(|target| {
                target
                    .slots
                    .iter()
                    .map(|s| Self::handle(*entity, s))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl AttributeStore for MemoryHost {
    fn read(&self, handle: &AttributeHandle) -> Option<StorageValue> {
        self.entity(&handle.owner)?
            .slot(&handle.definition)?
            .value
            .clone()
    }

    fn write(&mut self, handle: &AttributeHandle, value: StorageValue) -> HostResult<()> {
        let owner = handle.owner;
        let target = self
            .entity_mut(&owner)
            .ok_or(HostError::EntityNotFound(owner))?;
        let slot = target
            .slot_mut(&handle.definition)
            .ok_or_else(|| HostError::attribute_not_found(owner, handle.name()))?;

        if slot.read_only {
            return Err(HostError::read_only(slot.definition.name.clone()));
        }
        if value.kind() != slot.definition.storage {
            return Err(HostError::kind_mismatch(slot.definition.storage, value.kind()));
        }
        slot.value = Some(value);
        Ok(())
    }
}
