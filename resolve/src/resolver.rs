//! Key resolution.

use attrix_core::{AttributeHandle, DefinitionId, DefinitionKey, EntityRef};
use attrix_host::AttributeLookup;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ResolveError, ResolveResult};
use crate::key::AttributeKey;

/// Resolves keys against entities of a host.
pub struct Resolver<'h, L: AttributeLookup + ?Sized> {
    lookup: &'h L,
}

impl<'h, L: AttributeLookup + ?Sized> Resolver<'h, L> {
    pub fn new(lookup: &'h L) -> Self {
        Self { lookup }
    }

    /// Resolve `key` to the one attribute it denotes on `entity`.
    pub fn resolve(
        &self,
        entity: &EntityRef,
        key: &AttributeKey,
    ) -> ResolveResult<AttributeHandle> {
        let result = match key {
            AttributeKey::GenericWrapped(value) => AttributeKey::unwrap_value(value)
                .and_then(|inner| self.dispatch(entity, &inner)),
            other => self.dispatch(entity, other),
        };

        if let Err(e) = &result {
            debug!(
                entity = %entity,
                key = key.shape_name(),
                severity = %e.severity(),
                error = %e,
                "key did not resolve"
            );
        }
        result
    }

    fn dispatch(&self, entity: &EntityRef, key: &AttributeKey) -> ResolveResult<AttributeHandle> {
        match key {
            AttributeKey::WellKnownId(id) => self.resolve_well_known(entity, *id),
            AttributeKey::Name(name) => self.resolve_name(entity, name),
            AttributeKey::GlobalId(guid) => self.resolve_global_id(entity, *guid),
            AttributeKey::NumericId(id) => self.resolve_numeric(entity, *id, "Int"),
            AttributeKey::DocumentScoped(key) => self.resolve_scoped(entity, key),
            AttributeKey::LiveReference(handle) => self.resolve_live(entity, handle),
            // unwrap_value never yields another wrapper
            AttributeKey::GenericWrapped(value) => {
                Err(ResolveError::unsupported_key(value.type_name()))
            }
        }
    }

    fn resolve_well_known(
        &self,
        entity: &EntityRef,
        id: DefinitionId,
    ) -> ResolveResult<AttributeHandle> {
        let catalog = self.lookup.catalog();
        let Some(label) = catalog.label(id) else {
            return Err(ResolveError::UnknownWellKnownId(id));
        };
        self.lookup
            .lookup_well_known(entity, id)
            .ok_or_else(|| ResolveError::not_defined(label))
    }

    fn resolve_name(&self, entity: &EntityRef, name: &str) -> ResolveResult<AttributeHandle> {
        self.lookup
            .lookup_by_name(entity, name)
            .ok_or_else(|| ResolveError::not_defined(name))
    }

    fn resolve_global_id(&self, entity: &EntityRef, guid: Uuid) -> ResolveResult<AttributeHandle> {
        self.lookup
            .lookup_by_global_id(entity, guid)
            .ok_or_else(|| ResolveError::not_defined(guid.to_string()))
    }

    /// Well-known first, then a definition record of the entity's own
    /// document. An id that collides with both always means the well-known one.
    fn resolve_numeric(
        &self,
        entity: &EntityRef,
        id: DefinitionId,
        shape: &'static str,
    ) -> ResolveResult<AttributeHandle> {
        if self.lookup.catalog().contains(id) {
            return self.resolve_well_known(entity, id);
        }
        let definition = self
            .lookup
            .lookup_definition(entity.document, id)
            .ok_or_else(|| ResolveError::conversion(shape))?;
        self.lookup
            .lookup_by_definition(entity, &definition)
            .ok_or_else(|| ResolveError::not_defined(definition.name.clone()))
    }

    fn resolve_scoped(
        &self,
        entity: &EntityRef,
        key: &DefinitionKey,
    ) -> ResolveResult<AttributeHandle> {
        if key.document != entity.document {
            return Err(ResolveError::foreign_document(key.document, entity.document));
        }
        self.resolve_numeric(entity, key.id, "Key")
    }

    fn resolve_live(
        &self,
        entity: &EntityRef,
        handle: &AttributeHandle,
    ) -> ResolveResult<AttributeHandle> {
        if handle.belongs_to(entity) {
            Ok(handle.clone())
        } else {
            Err(ResolveError::foreign_handle(handle.name(), handle.owner))
        }
    }
}
