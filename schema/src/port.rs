//! Output ports and schemas.

use attrix_core::{AttributeDefinition, AttributeIdentity, RecipientId, StorageKind};

use crate::error::{SchemaError, SchemaResult};

/// One output slot of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub identity: AttributeIdentity,
    /// Display metadata, taken from the first entity the identity was seen on.
    pub definition: AttributeDefinition,
    pub storage: StorageKind,
    /// Downstream recipients in wiring order.
    pub recipients: Vec<RecipientId>,
}

impl Port {
    /// An unwired port for `definition`.
    pub fn new(definition: AttributeDefinition) -> Self {
        Self {
            identity: definition.identity(),
            storage: definition.storage,
            definition,
            recipients: Vec::new(),
        }
    }

    pub fn with_recipients(mut self, recipients: Vec<RecipientId>) -> Self {
        self.recipients = recipients;
        self
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn is_wired(&self) -> bool {
        !self.recipients.is_empty()
    }
}

/// Ports ordered by (group, definition id), unique by identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    ports: Vec<Port>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from ports in any order.
    pub fn from_ports(mut ports: Vec<Port>) -> SchemaResult<Self> {
        ports.sort_by_key(|p| p.identity);
        if let Some(pair) = ports.windows(2).find(|w| w[0].identity == w[1].identity) {
            return Err(SchemaError::DuplicatePort(pair[0].identity));
        }
        Ok(Self { ports })
    }

    /// Ports already known to be sorted and unique.
    pub(crate) fn from_sorted(ports: Vec<Port>) -> Self {
        debug_assert!(ports.windows(2).all(|w| w[0].identity < w[1].identity));
        Self { ports }
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn identities(&self) -> impl Iterator<Item = AttributeIdentity> + '_ {
        self.ports.iter().map(|p| p.identity)
    }

    /// Index of the port with `identity`.
    pub fn position(&self, identity: AttributeIdentity) -> Option<usize> {
        self.ports
            .binary_search_by_key(&identity, |p| p.identity)
            .ok()
    }

    pub fn get(&self, identity: AttributeIdentity) -> Option<&Port> {
        self.position(identity).map(|i| &self.ports[i])
    }

    pub(crate) fn get_mut(&mut self, identity: AttributeIdentity) -> Option<&mut Port> {
        self.position(identity).map(move |i| &mut self.ports[i])
    }

    pub fn contains(&self, identity: AttributeIdentity) -> bool {
        self.position(identity).is_some()
    }

    /// Total number of wired recipients across all ports.
    pub fn link_count(&self) -> usize {
        self.ports.iter().map(|p| p.recipients.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Port;
    type IntoIter = std::slice::Iter<'a, Port>;

    fn into_iter(self) -> Self::IntoIter {
        self.ports.iter()
    }
}
