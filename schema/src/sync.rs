//! Schema recomputation.
//!
//! Both operations here are pure: they read the current schema and return
//! a new one together with a description of what changed. Applying the
//! result to a host is `DecomposeNode`'s job.

use attrix_core::{
    AttributeDefinition, AttributeHandle, AttributeIdentity, EntityRef, RecipientId,
};
use attrix_host::AttributeLookup;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, trace};

use crate::port::{Port, Schema};

/// How several input entities collapse into one schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMode {
    /// Attributes present on every input entity.
    Common,
    /// Attributes present on any input entity.
    All,
}

/// A recipient carried over to a regenerated port.
#[derive(Debug, Clone, PartialEq)]
pub struct Reattachment {
    pub identity: AttributeIdentity,
    pub recipient: RecipientId,
}

/// A recipient whose port did not survive a recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct BrokenLink {
    pub identity: AttributeIdentity,
    /// Name of the port the recipient was wired to.
    pub name: String,
    pub recipient: RecipientId,
}

/// Difference between a schema and the one that replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReattachPlan {
    /// Identities new to the schema, in schema order.
    pub added: Vec<AttributeIdentity>,
    /// Identities that were dropped, in old schema order.
    pub removed: Vec<AttributeIdentity>,
    /// Identities kept whose port name or storage kind changed, in schema order.
    /// Their recipients are carried over like any other kept port.
    pub replaced: Vec<AttributeIdentity>,
    pub reattached: Vec<Reattachment>,
    pub broken: Vec<BrokenLink>,
}

impl ReattachPlan {
    /// True when the new schema has exactly the old ports.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.replaced.is_empty()
    }
}

/// Aggregate the attribute definitions of `inputs` by identity.
///
/// Absent inputs are skipped. With no present input the result is empty in
/// either mode.
pub fn aggregate<L: AttributeLookup + ?Sized>(
    lookup: &L,
    inputs: &[Option<EntityRef>],
    mode: AggregationMode,
) -> BTreeMap<AttributeIdentity, AttributeDefinition> {
    let mut result: Option<BTreeMap<AttributeIdentity, AttributeDefinition>> = None;

    for entity in inputs.iter().flatten() {
        let attributes = lookup.attributes_of(entity);
        trace!(entity = %entity, count = attributes.len(), "aggregating attributes");

        let Some(acc) = result.as_mut() else {
            result = Some(by_identity(attributes));
            continue;
        };
        match mode {
            AggregationMode::Common => {
                let present: HashSet<AttributeIdentity> =
                    attributes.iter().map(|h| h.identity()).collect();
                acc.retain(|identity, _| present.contains(identity));
            }
            AggregationMode::All => {
                for handle in attributes {
                    acc.entry(handle.identity()).or_insert(handle.definition);
                }
            }
        }
    }

    result.unwrap_or_default()
}

fn by_identity(
    attributes: Vec<AttributeHandle>,
) -> BTreeMap<AttributeIdentity, AttributeDefinition> {
    let mut map = BTreeMap::new();
    for handle in attributes {
        map.entry(handle.identity()).or_insert(handle.definition);
    }
    map
}

/// Compute the schema for `inputs` and carry wiring over from `current`.
pub fn recompute<L: AttributeLookup + ?Sized>(
    lookup: &L,
    current: &Schema,
    inputs: &[Option<EntityRef>],
    mode: AggregationMode,
) -> (Schema, ReattachPlan) {
    let aggregated = aggregate(lookup, inputs, mode);
    let (schema, plan) = reattach(current, aggregated);
    debug!(
        mode = ?mode,
        ports = schema.len(),
        added = plan.added.len(),
        removed = plan.removed.len(),
        replaced = plan.replaced.len(),
        broken = plan.broken.len(),
        "schema recomputed"
    );
    (schema, plan)
}

/// Build ports for `definitions` and move recipients of matching old ports onto them.
fn reattach(
    current: &Schema,
    definitions: BTreeMap<AttributeIdentity, AttributeDefinition>,
) -> (Schema, ReattachPlan) {
    let mut wired: HashMap<AttributeIdentity, &Port> = current
        .ports()
        .iter()
        .filter(|p| p.is_wired())
        .map(|p| (p.identity, p))
        .collect();

    let mut plan = ReattachPlan::default();
    let mut ports = Vec::with_capacity(definitions.len());

    for (identity, definition) in definitions {
        let mut port = Port::new(definition);
        if let Some(old) = wired.remove(&identity) {
            plan.reattached
                .extend(old.recipients.iter().map(|&recipient| Reattachment {
                    identity,
                    recipient,
                }));
            port.recipients = old.recipients.clone();
        }
        match current.get(identity) {
            None => plan.added.push(identity),
            Some(old) if old.name() != port.name() || old.storage != port.storage => {
                plan.replaced.push(identity);
            }
            Some(_) => {}
        }
        ports.push(port);
    }

    let schema = Schema::from_sorted(ports);

    for old in current.ports() {
        if schema.contains(old.identity) {
            continue;
        }
        plan.removed.push(old.identity);
        if wired.remove(&old.identity).is_some() {
            plan.broken.extend(old.recipients.iter().map(|&recipient| BrokenLink {
                identity: old.identity,
                name: old.name().to_string(),
                recipient,
            }));
        }
    }

    (schema, plan)
}

/// Drop every port with no recipients. Wired ports keep their relative order.
pub fn prune_unwired(schema: &Schema) -> Schema {
    let kept: Vec<Port> = schema
        .ports()
        .iter()
        .filter(|p| p.is_wired())
        .cloned()
        .collect();
    debug!(
        before = schema.len(),
        after = kept.len(),
        "pruned unwired ports"
    );
    Schema::from_sorted(kept)
}
