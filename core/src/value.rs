//! Generic values exchanged with the node graph.
//!
//! A `Value` is whatever an upstream node hands us: a number, some text, a
//! reference to an entity, a key naming an attribute. The coercer turns it
//! into a `StorageValue` and back; the resolver unwraps it into a key.

use crate::{AttributeHandle, CategoryId, DefinitionKey, EntityRef};
use std::fmt;
use uuid::Uuid;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as `R | G << 8 | B << 16`.
    pub fn packed(&self) -> i32 {
        (self.r as i32) | ((self.g as i32) << 8) | ((self.b as i32) << 16)
    }

    /// Inverse of [`Color::packed`]; the high byte is ignored.
    pub fn from_packed(packed: i32) -> Self {
        Self {
            r: (packed & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: ((packed >> 16) & 0xFF) as u8,
        }
    }
}

/// A generic, dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point, in external (model) units.
    Real(f64),
    /// UTF-8 text.
    Text(String),
    /// RGB color.
    Color(Color),
    /// Reference to an entity.
    Entity(EntityRef),
    /// Reference to a category.
    Category(CategoryId),
    /// Globally unique id.
    Guid(Uuid),
    /// Document-scoped definition key.
    Key(DefinitionKey),
    /// A resolved attribute.
    Attribute(Box<AttributeHandle>),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as real if this is a Real value.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the shape name of this value, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Real(_) => "Real",
            Value::Text(_) => "Text",
            Value::Color(_) => "Color",
            Value::Entity(_) => "Entity",
            Value::Category(_) => "Category",
            Value::Guid(_) => "Guid",
            Value::Key(_) => "Key",
            Value::Attribute(_) => "Attribute",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::Color(c) => write!(f, "rgb({}, {}, {})", c.r, c.g, c.b),
            Value::Entity(e) => write!(f, "{}", e),
            Value::Category(c) => write!(f, "{}", c),
            Value::Guid(g) => write!(f, "{}", g),
            Value::Key(k) => write!(f, "key:{}", k),
            Value::Attribute(h) => write!(f, "{}.{}", h.owner, h.name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Real(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Value::Color(c)
    }
}

impl From<EntityRef> for Value {
    fn from(e: EntityRef) -> Self {
        Value::Entity(e)
    }
}

impl From<CategoryId> for Value {
    fn from(c: CategoryId) -> Self {
        Value::Category(c)
    }
}

impl From<Uuid> for Value {
    fn from(g: Uuid) -> Self {
        Value::Guid(g)
    }
}

impl From<DefinitionKey> for Value {
    fn from(k: DefinitionKey) -> Self {
        Value::Key(k)
    }
}

impl From<AttributeHandle> for Value {
    fn from(h: AttributeHandle) -> Self {
        Value::Attribute(Box::new(h))
    }
}
