//! The decompose node: an entity exploded into one output port per attribute.

use attrix_coerce::Coercer;
use attrix_core::{messages, AttributeIdentity, EntityRef, RecipientId, Value};
use attrix_host::{AttributeLookup, AttributeStore};
use tracing::{debug, trace};

use crate::error::{SchemaError, SchemaResult};
use crate::port::Schema;
use crate::sync::{self, AggregationMode, ReattachPlan};

/// Structural change notifications for the graph host.
#[derive(Debug, Clone, PartialEq)]
pub enum PortEvent {
    /// A port appeared at `index` of the new schema.
    Added {
        index: usize,
        identity: AttributeIdentity,
        name: String,
    },
    /// A port was dropped.
    Removed {
        identity: AttributeIdentity,
        name: String,
    },
    /// A recipient lost its source port.
    LinkBroken {
        identity: AttributeIdentity,
        name: String,
        recipient: RecipientId,
    },
}

/// The graph host a node reports structural changes to.
pub trait SchemaHost {
    /// Open one undoable unit covering the changes that follow.
    fn checkpoint(&mut self, label: &str);

    fn port_event(&mut self, event: PortEvent);
}

/// A `SchemaHost` that records everything it receives.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub checkpoints: Vec<String>,
    pub events: Vec<PortEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken_links(&self) -> impl Iterator<Item = &PortEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, PortEvent::LinkBroken { .. }))
    }
}

impl SchemaHost for RecordingHost {
    fn checkpoint(&mut self, label: &str) {
        self.checkpoints.push(label.to_string());
    }

    fn port_event(&mut self, event: PortEvent) {
        self.events.push(event);
    }
}

/// A node whose output ports mirror the attributes of its input entities.
///
/// Structural changes replace the whole schema at once. Each one is wrapped
/// in a single host checkpoint, and none is issued when nothing changes.
#[derive(Debug, Default)]
pub struct DecomposeNode {
    schema: Schema,
}

impl DecomposeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a node with a previously saved schema.
    pub fn with_schema(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    // ========== Structural Operations ==========

    /// Expose the attributes shared by every present input.
    pub fn populate_common<L, H>(
        &mut self,
        lookup: &L,
        host: &mut H,
        inputs: &[Option<EntityRef>],
    ) -> ReattachPlan
    where
        L: AttributeLookup + ?Sized,
        H: SchemaHost + ?Sized,
    {
        self.populate(lookup, host, inputs, AggregationMode::Common)
    }

    /// Expose every attribute found on any present input.
    pub fn populate_all<L, H>(
        &mut self,
        lookup: &L,
        host: &mut H,
        inputs: &[Option<EntityRef>],
    ) -> ReattachPlan
    where
        L: AttributeLookup + ?Sized,
        H: SchemaHost + ?Sized,
    {
        self.populate(lookup, host, inputs, AggregationMode::All)
    }

    fn populate<L, H>(
        &mut self,
        lookup: &L,
        host: &mut H,
        inputs: &[Option<EntityRef>],
        mode: AggregationMode,
    ) -> ReattachPlan
    where
        L: AttributeLookup + ?Sized,
        H: SchemaHost + ?Sized,
    {
        let (schema, plan) = sync::recompute(lookup, &self.schema, inputs, mode);
        if plan.is_unchanged() {
            trace!(mode = ?mode, "schema unchanged, no checkpoint");
            self.schema = schema;
            return plan;
        }

        host.checkpoint(match mode {
            AggregationMode::Common => messages::LABEL_GET_COMMON,
            AggregationMode::All => messages::LABEL_GET_ALL,
        });

        // A replaced port is reported as removed under its old name and
        // added back under its new one.
        for port in self.schema.ports() {
            if plan.removed.contains(&port.identity) || plan.replaced.contains(&port.identity) {
                host.port_event(PortEvent::Removed {
                    identity: port.identity,
                    name: port.name().to_string(),
                });
            }
        }
        for link in &plan.broken {
            host.port_event(PortEvent::LinkBroken {
                identity: link.identity,
                name: link.name.clone(),
                recipient: link.recipient,
            });
        }
        for (index, port) in schema.ports().iter().enumerate() {
            if plan.added.contains(&port.identity) || plan.replaced.contains(&port.identity) {
                host.port_event(PortEvent::Added {
                    index,
                    identity: port.identity,
                    name: port.name().to_string(),
                });
            }
        }

        self.schema = schema;
        plan
    }

    /// Drop every output port with no recipients.
    ///
    /// Returns the identities removed, in former schema order.
    pub fn remove_unconnected<H: SchemaHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Vec<AttributeIdentity> {
        let pruned = sync::prune_unwired(&self.schema);
        if pruned.len() == self.schema.len() {
            return Vec::new();
        }

        host.checkpoint(messages::LABEL_REMOVE_UNCONNECTED);
        let mut removed = Vec::new();
        for port in self.schema.ports().iter().filter(|p| !p.is_wired()) {
            host.port_event(PortEvent::Removed {
                identity: port.identity,
                name: port.name().to_string(),
            });
            removed.push(port.identity);
        }

        self.schema = pruned;
        removed
    }

    // ========== Wiring ==========
    //
    // Wiring mirrors links the graph host has already made or dropped. It
    // edits recipient lists in place and issues no checkpoint. The port set
    // only changes through whole-schema replacement above.

    /// Wire `recipient` to the port with `identity`.
    pub fn connect(
        &mut self,
        identity: AttributeIdentity,
        recipient: RecipientId,
    ) -> SchemaResult<()> {
        let port = self
            .schema
            .get_mut(identity)
            .ok_or(SchemaError::PortNotFound(identity))?;
        if port.recipients.contains(&recipient) {
            return Err(SchemaError::already_connected(identity, recipient));
        }
        port.recipients.push(recipient);
        Ok(())
    }

    /// Unwire `recipient` from the port with `identity`.
    pub fn disconnect(
        &mut self,
        identity: AttributeIdentity,
        recipient: RecipientId,
    ) -> SchemaResult<()> {
        let port = self
            .schema
            .get_mut(identity)
            .ok_or(SchemaError::PortNotFound(identity))?;
        let index = port
            .recipients
            .iter()
            .position(|r| *r == recipient)
            .ok_or_else(|| SchemaError::not_connected(identity, recipient))?;
        port.recipients.remove(index);
        Ok(())
    }

    // ========== Solve ==========

    /// Read every port's value off `entity`, in schema order.
    ///
    /// Ports are matched by identity, so an entity from another document
    /// reads a port whose definition it declares separately. Ports the entity
    /// has no attribute for yield `Value::Null`, as do all ports when there is
    /// no entity.
    pub fn solve<S: AttributeStore + ?Sized>(
        &self,
        store: &S,
        coercer: &Coercer,
        entity: Option<&EntityRef>,
    ) -> Vec<Value> {
        let Some(entity) = entity else {
            return vec![Value::Null; self.schema.len()];
        };

        self.schema
            .ports()
            .iter()
            .map(|port| match store.lookup_by_identity(entity, port.identity) {
                Some(handle) => coercer.from_storage(store, &handle),
                None => {
                    debug!(entity = %entity, port = port.name(), "entity lacks port attribute");
                    Value::Null
                }
            })
            .collect()
    }
}
