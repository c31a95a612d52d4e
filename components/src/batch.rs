//! Batch attribute writes.

use attrix_coerce::Coercer;
use attrix_core::{messages, Diagnostics, EntityRef, Value};
use attrix_host::AttributeStore;
use attrix_resolve::AttributeKey;
use tracing::debug;

use crate::access::set_attribute;

/// One write in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRequest {
    /// Target entity; `None` skips the item.
    pub entity: Option<EntityRef>,
    pub key: AttributeKey,
    pub value: Value,
}

impl SetRequest {
    pub fn new(entity: EntityRef, key: impl Into<AttributeKey>, value: impl Into<Value>) -> Self {
        Self {
            entity: Some(entity),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Counts for a batch write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub updated: usize,
    pub failed: usize,
    /// Items with no target entity.
    pub skipped: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.updated + self.failed + self.skipped
    }
}

/// Apply every request in order.
///
/// A failing item records its own diagnostic and does not affect the
/// others. A Remark with the counts is recorded last.
pub fn set_attributes<S: AttributeStore + ?Sized>(
    store: &mut S,
    coercer: &Coercer,
    requests: &[SetRequest],
    diagnostics: &mut Diagnostics,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for request in requests {
        let Some(entity) = &request.entity else {
            summary.skipped += 1;
            continue;
        };
        match set_attribute(store, coercer, entity, &request.key, &request.value, diagnostics) {
            Some(_) => summary.updated += 1,
            None => summary.failed += 1,
        }
    }

    debug!(
        updated = summary.updated,
        failed = summary.failed,
        skipped = summary.skipped,
        "batch write finished"
    );
    diagnostics.remark(messages::batch_summary(
        summary.updated,
        summary.failed,
        summary.skipped,
    ));
    summary
}
