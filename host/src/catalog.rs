//! The well-known definition catalog.

use attrix_core::{AttributeDefinition, DefinitionId};
use std::collections::HashMap;

use crate::{HostError, HostResult};

/// The host's enumeration of well-known attribute definitions.
/// It is immutable after construction via `CatalogBuilder`.
#[derive(Debug, Default)]
pub struct WellKnownCatalog {
    /// Definitions by id.
    definitions: HashMap<DefinitionId, AttributeDefinition>,
}

impl WellKnownCatalog {
    /// Returns true if `id` is a member of the enumeration.
    pub fn contains(&self, id: DefinitionId) -> bool {
        self.definitions.contains_key(&id)
    }

    /// Get a definition by id.
    pub fn get(&self, id: DefinitionId) -> Option<&AttributeDefinition> {
        self.definitions.get(&id)
    }

    /// Human-readable label for an id, used in diagnostics.
    pub fn label(&self, id: DefinitionId) -> Option<&str> {
        self.get(id).map(|d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Builder for constructing an immutable `WellKnownCatalog`.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    definitions: HashMap<DefinitionId, AttributeDefinition>,
    /// First error seen; reported by `build`.
    error: Option<HostError>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a well-known definition.
    pub fn define(mut self, definition: AttributeDefinition) -> Self {
        if self.error.is_some() {
            return self;
        }
        if !definition.is_well_known() {
            self.error = Some(HostError::UnknownWellKnown(definition.id));
        } else if self.definitions.contains_key(&definition.id) {
            self.error = Some(HostError::DuplicateDefinition(definition.id));
        } else {
            self.definitions.insert(definition.id, definition);
        }
        self
    }

    /// Build the immutable catalog.
    pub fn build(self) -> HostResult<WellKnownCatalog> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(WellKnownCatalog {
            definitions: self.definitions,
        })
    }
}
