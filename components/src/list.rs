//! Attribute listing.

use attrix_core::{AttributeGroup, AttributeHandle, EntityRef};
use attrix_host::AttributeLookup;
use tracing::trace;

/// Optional constraints on listed attributes. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeFilter {
    /// Exact attribute name.
    pub name: Option<String>,
    pub group: Option<AttributeGroup>,
    pub read_only: Option<bool>,
}

impl AttributeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn in_group(mut self, group: AttributeGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    pub fn matches(&self, handle: &AttributeHandle) -> bool {
        if let Some(name) = &self.name {
            if handle.name() != name {
                return false;
            }
        }
        if let Some(group) = self.group {
            if handle.definition.group != group {
                return false;
            }
        }
        if let Some(read_only) = self.read_only {
            if handle.read_only != read_only {
                return false;
            }
        }
        true
    }
}

/// All attributes of `entity` passing `filter`, ordered by group then definition id.
pub fn list_attributes<L: AttributeLookup + ?Sized>(
    lookup: &L,
    entity: &EntityRef,
    filter: &AttributeFilter,
) -> Vec<AttributeHandle> {
    let mut handles: Vec<AttributeHandle> = lookup
        .attributes_of(entity)
        .into_iter()
        .filter(|h| filter.matches(h))
        .collect();
    handles.sort_by_key(|h| h.identity());
    trace!(entity = %entity, count = handles.len(), "listed attributes");
    handles
}
