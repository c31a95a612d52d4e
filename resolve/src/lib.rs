//! Attrix Resolve
//!
//! Map a loosely typed key to exactly one attribute on a target entity.
//!
//! Responsibilities:
//! - Model the accepted key shapes as one sum type
//! - Resolve each shape along exactly one path, no fallback across shapes
//! - Classify failures as warnings (valid but unset) or errors (misuse)
//!
//! # Module Structure
//!
//! - `key` - The `AttributeKey` variants and one-level unwrapping
//! - `resolver` - The `Resolver` that dispatches per variant
//! - `error` - Error types and their severities

mod error;
mod key;
mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use key::AttributeKey;
pub use resolver::Resolver;
