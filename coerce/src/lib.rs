//! Attrix Coerce
//!
//! Convert generic values into the four storage kinds and back.
//!
//! Responsibilities:
//! - Dispatch on (target storage kind, runtime value shape)
//! - Scale Length/Area/Volume values by the model unit
//! - Write coerced values without partial updates
//!
//! # Module Structure
//!
//! - `config` - Unit configuration supplied by the host
//! - `coercer` - The `Coercer` itself
//! - `error` - Error types for coercion failures

mod coercer;
mod config;
mod error;

pub use coercer::Coercer;
pub use config::UnitConfig;
pub use error::{CoerceError, CoerceResult};
