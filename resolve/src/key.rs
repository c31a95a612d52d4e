//! Attribute keys.

use attrix_core::{AttributeHandle, DefinitionId, DefinitionKey, Value};
use uuid::Uuid;

use crate::error::{ResolveError, ResolveResult};

/// A polymorphic identifier naming one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKey {
    /// A member of the host's well-known enumeration.
    WellKnownId(DefinitionId),
    /// Exact attribute name.
    Name(String),
    /// Global id of a shared definition.
    GlobalId(Uuid),
    /// A bare number: well-known id or document-local definition id.
    NumericId(DefinitionId),
    /// A definition id together with the document it came from.
    DocumentScoped(DefinitionKey),
    /// An attribute already bound to an entity.
    LiveReference(AttributeHandle),
    /// A generic value to unwrap and classify by shape.
    GenericWrapped(Value),
}

impl AttributeKey {
    /// Shape name used in diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            AttributeKey::WellKnownId(_) => "WellKnownId",
            AttributeKey::Name(_) => "Text",
            AttributeKey::GlobalId(_) => "Guid",
            AttributeKey::NumericId(_) => "Int",
            AttributeKey::DocumentScoped(_) => "Key",
            AttributeKey::LiveReference(_) => "Attribute",
            AttributeKey::GenericWrapped(v) => v.type_name(),
        }
    }

    /// Unwrap a generic value one level into a concrete key.
    ///
    /// The result is never `GenericWrapped`.
    pub fn unwrap_value(value: &Value) -> ResolveResult<AttributeKey> {
        match value {
            Value::Int(i) => Ok(AttributeKey::NumericId(DefinitionId::new(*i))),
            Value::Text(s) => Ok(AttributeKey::Name(s.clone())),
            Value::Guid(g) => Ok(AttributeKey::GlobalId(*g)),
            Value::Key(k) => Ok(AttributeKey::DocumentScoped(*k)),
            Value::Attribute(h) => Ok(AttributeKey::LiveReference((**h).clone())),
            other => Err(ResolveError::unsupported_key(other.type_name())),
        }
    }
}

impl From<Value> for AttributeKey {
    fn from(value: Value) -> Self {
        AttributeKey::GenericWrapped(value)
    }
}

impl From<&str> for AttributeKey {
    fn from(name: &str) -> Self {
        AttributeKey::Name(name.to_string())
    }
}

impl From<Uuid> for AttributeKey {
    fn from(guid: Uuid) -> Self {
        AttributeKey::GlobalId(guid)
    }
}

impl From<AttributeHandle> for AttributeKey {
    fn from(handle: AttributeHandle) -> Self {
        AttributeKey::LiveReference(handle)
    }
}

impl From<DefinitionKey> for AttributeKey {
    fn from(key: DefinitionKey) -> Self {
        AttributeKey::DocumentScoped(key)
    }
}
