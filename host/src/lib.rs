//! Attrix Host
//!
//! The boundary between Attrix and the host document model.
//!
//! Responsibilities:
//! - Define the lookups the resolver consumes (`AttributeLookup`)
//! - Define value reads and writes the coercer consumes (`AttributeStore`)
//! - Hold the host's well-known definition enumeration (`WellKnownCatalog`)
//! - Provide an in-memory multi-document host (`MemoryHost`)
//!
//! # Module Structure
//!
//! - `lookup` - The host traits
//! - `catalog` - Well-known catalog and its builder
//! - `memory` - In-memory host implementation
//! - `error` - Error types for host failures

mod catalog;
mod error;
mod lookup;
mod memory;

pub use catalog::{CatalogBuilder, WellKnownCatalog};
pub use error::{HostError, HostResult};
pub use lookup::{AttributeLookup, AttributeStore};
pub use memory::MemoryHost;
