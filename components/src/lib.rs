//! Attrix Components
//!
//! Entity attribute operations as a node graph exposes them. Failures never
//! escape as errors here; they are recorded in a `Diagnostics` collection
//! and the item yields nothing.
//!
//! # Module Structure
//!
//! - `list` - Filtered, ordered attribute listing
//! - `access` - Single get and set by key
//! - `batch` - Set many attributes with a summary

mod access;
mod batch;
mod list;

pub use access::{get_attribute, get_attribute_value, set_attribute};
pub use batch::{set_attributes, BatchSummary, SetRequest};
pub use list::{list_attributes, AttributeFilter};
