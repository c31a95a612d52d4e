//! Get and set one attribute by key.

use attrix_coerce::Coercer;
use attrix_core::{AttributeHandle, Diagnostic, Diagnostics, EntityRef, Value};
use attrix_host::{AttributeLookup, AttributeStore};
use attrix_resolve::{AttributeKey, Resolver};
use tracing::debug;

/// Resolve `key` on `entity`.
///
/// A failed resolution records a Warning (attribute unset) or an Error
/// (invalid key) and yields `None`.
pub fn get_attribute<L: AttributeLookup + ?Sized>(
    lookup: &L,
    entity: &EntityRef,
    key: &AttributeKey,
    diagnostics: &mut Diagnostics,
) -> Option<AttributeHandle> {
    match Resolver::new(lookup).resolve(entity, key) {
        Ok(handle) => Some(handle),
        Err(e) => {
            diagnostics.push(e.to_diagnostic(*entity));
            None
        }
    }
}

/// Resolve `key` on `entity` and read its value. Anything unresolved reads as `Null`.
pub fn get_attribute_value<S: AttributeStore + ?Sized>(
    store: &S,
    coercer: &Coercer,
    entity: &EntityRef,
    key: &AttributeKey,
    diagnostics: &mut Diagnostics,
) -> Value {
    get_attribute(store, entity, key, diagnostics)
        .map(|handle| coercer.from_storage(store, &handle))
        .unwrap_or(Value::Null)
}

/// Resolve `key` on `entity` and write `value` to it.
///
/// Returns the updated entity. On failure the attribute keeps its previous
/// value and an Error is recorded.
pub fn set_attribute<S: AttributeStore + ?Sized>(
    store: &mut S,
    coercer: &Coercer,
    entity: &EntityRef,
    key: &AttributeKey,
    value: &Value,
    diagnostics: &mut Diagnostics,
) -> Option<EntityRef> {
    let handle = get_attribute(&*store, entity, key, diagnostics)?;
    match coercer.write(store, &handle, value) {
        Ok(()) => Some(*entity),
        Err(e) => {
            debug!(entity = %entity, attribute = handle.name(), error = %e, "set failed");
            diagnostics.push(Diagnostic::error(e.to_string()).with_entity(*entity));
            None
        }
    }
}
