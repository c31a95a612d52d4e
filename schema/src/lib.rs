//! Attrix Schema
//!
//! Output-port schemas derived from the attributes of input entities.
//!
//! Responsibilities:
//! - Aggregate attribute identities by intersection or union
//! - Order ports by group, then definition id
//! - Carry downstream wiring over onto regenerated ports
//! - Drop ports nothing is wired to
//!
//! # Module Structure
//!
//! - `port` - `Port` and the ordered `Schema`
//! - `sync` - Pure recompute and prune functions
//! - `node` - `DecomposeNode`, which applies them against a `SchemaHost`
//! - `error` - Error types for wiring operations

mod error;
mod node;
mod port;
mod sync;

pub use error::{SchemaError, SchemaResult};
pub use node::{DecomposeNode, PortEvent, RecordingHost, SchemaHost};
pub use port::{Port, Schema};
pub use sync::{
    aggregate, prune_unwired, recompute, AggregationMode, BrokenLink, ReattachPlan, Reattachment,
};
