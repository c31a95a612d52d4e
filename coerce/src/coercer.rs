//! The value coercer.

use attrix_core::{
    AttributeDefinition, AttributeHandle, EntityId, EntityRef, StorageKind, StorageValue, Value,
};
use attrix_host::AttributeStore;
use tracing::{debug, trace};

use crate::config::UnitConfig;
use crate::error::{CoerceError, CoerceResult};

/// Converts generic values to storage values and back.
///
/// The unit configuration is fixed at construction; a host that changes its
/// model units builds a new coercer.
#[derive(Debug, Clone, Copy)]
pub struct Coercer {
    units: UnitConfig,
}

impl Coercer {
    /// Create a coercer, rejecting non-positive or non-finite unit scales.
    pub fn new(units: UnitConfig) -> CoerceResult<Self> {
        if !units.is_valid() {
            return Err(CoerceError::InvalidUnitScale(units.model_unit_scale));
        }
        Ok(Self { units })
    }

    /// Convert an external value into the storage kind of `definition`.
    pub fn to_storage(
        &self,
        value: &Value,
        definition: &AttributeDefinition,
    ) -> CoerceResult<StorageValue> {
        let expected = definition.storage;
        let dimension = definition.quantity.dimension();

        let stored = match (expected, value) {
            (StorageKind::Integer, Value::Bool(b)) => StorageValue::Integer(i32::from(*b)),
            (StorageKind::Integer, Value::Int(i)) => StorageValue::Integer(
                i32::try_from(*i).map_err(|_| CoerceError::out_of_range(expected, *i))?,
            ),
            (StorageKind::Integer, Value::Real(r)) => {
                StorageValue::Integer(round_to_i32(self.to_host(*r, dimension))?)
            }
            (StorageKind::Integer, Value::Color(c)) => StorageValue::Integer(c.packed()),

            (StorageKind::Real, Value::Int(i)) => StorageValue::Real(*i as f64),
            (StorageKind::Real, Value::Real(r)) => {
                if r.is_nan() {
                    return Err(CoerceError::NotANumber);
                }
                StorageValue::Real(self.to_host(*r, dimension))
            }

            (StorageKind::Text, Value::Text(s)) => StorageValue::Text(s.clone()),

            (StorageKind::Reference, Value::Entity(e)) => StorageValue::Reference(e.id),
            (StorageKind::Reference, Value::Category(c)) => {
                StorageValue::Reference(EntityId::new(c.raw()))
            }
            (StorageKind::Reference, Value::Int(i)) => StorageValue::Reference(EntityId::new(*i)),

            (_, other) => {
                trace!(
                    expected = expected.name(),
                    actual = other.type_name(),
                    "no conversion"
                );
                return Err(CoerceError::mismatch(expected, other.type_name()));
            }
        };
        Ok(stored)
    }

    /// Convert a stored value back into an external value.
    ///
    /// References resolve in the document of `owner`.
    pub fn storage_to_value(
        &self,
        stored: &StorageValue,
        definition: &AttributeDefinition,
        owner: &EntityRef,
    ) -> Value {
        let dimension = definition.quantity.dimension();
        match stored {
            StorageValue::Integer(i) => Value::Int(i64::from(*i)),
            StorageValue::Real(r) => Value::Real(self.from_host(*r, dimension)),
            StorageValue::Text(s) => Value::Text(s.clone()),
            StorageValue::Reference(id) => Value::Entity(EntityRef::new(owner.document, *id)),
        }
    }

    /// Read an attribute's current value. Unset attributes read as `Null`.
    pub fn from_storage<S: AttributeStore + ?Sized>(
        &self,
        store: &S,
        handle: &AttributeHandle,
    ) -> Value {
        match store.read(handle) {
            Some(stored) => self.storage_to_value(&stored, &handle.definition, &handle.owner),
            None => Value::Null,
        }
    }

    /// Coerce `value` and write it to the attribute.
    ///
    /// Nothing is written unless coercion succeeds; on any error the
    /// attribute keeps its previous value.
    pub fn write<S: AttributeStore + ?Sized>(
        &self,
        store: &mut S,
        handle: &AttributeHandle,
        value: &Value,
    ) -> CoerceResult<()> {
        if handle.read_only {
            return Err(CoerceError::read_only(handle.name()));
        }
        let stored = match self.to_storage(value, &handle.definition) {
            Ok(stored) => stored,
            Err(e) => {
                debug!(
                    attribute = handle.name(),
                    owner = %handle.owner,
                    error = %e,
                    "coercion failed"
                );
                return Err(e);
            }
        };
        store
            .write(handle, stored)
            .map_err(|e| CoerceError::host(handle.name(), e))
    }

    fn to_host(&self, value: f64, dimension: i32) -> f64 {
        if dimension == 0 {
            value
        } else {
            value / self.units.factor(dimension)
        }
    }

    fn from_host(&self, value: f64, dimension: i32) -> f64 {
        if dimension == 0 {
            value
        } else {
            value * self.units.factor(dimension)
        }
    }
}

impl Default for Coercer {
    fn default() -> Self {
        Self {
            units: UnitConfig::default(),
        }
    }
}

/// Round half away from zero, then clamp to the i32 range.
fn round_to_i32(value: f64) -> CoerceResult<i32> {
    if value.is_nan() {
        return Err(CoerceError::NotANumber);
    }
    let rounded = value.round();
    Ok(rounded.clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}
