//! Common message texts used across Attrix components.
//!
//! These constants keep host-facing wording identical between the resolver,
//! the coercer and the node operations.

/// Checkpoint label: populate outputs with the attributes shared by every input.
pub const LABEL_GET_COMMON: &str = "Get Common Parameters";

/// Checkpoint label: populate outputs with every attribute seen on any input.
pub const LABEL_GET_ALL: &str = "Get All Parameters";

/// Checkpoint label: drop outputs nothing is wired to.
pub const LABEL_REMOVE_UNCONNECTED: &str = "Remove Unconnected Outputs";

/// Name used for the target entity in resolution messages.
pub const ENTITY_NOUN: &str = "Element";

/// Warning: an attribute is valid but unset on the target entity.
pub fn not_defined(label: &str) -> String {
    format!("Parameter '{}' not defined in '{}'", label, ENTITY_NOUN)
}

/// Error: a key of some shape cannot denote an attribute.
pub fn conversion_failed(shape: &str) -> String {
    format!("Data conversion failed from {} to Parameter", shape)
}

/// Error: a value cannot be stored in an attribute's storage kind.
pub fn unable_to_cast(actual: &str, expected: &str) -> String {
    format!("Unable to cast 'Value' from {} to {}.", actual, expected)
}

/// Remark: outcome of a batch write.
pub fn batch_summary(updated: usize, failed: usize, skipped: usize) -> String {
    format!(
        "{} parameters updated, {} failed, {} skipped",
        updated, failed, skipped
    )
}
