//! Unit configuration.

use serde::{Deserialize, Serialize};

/// Unit system the host stores physical quantities in, relative to the
/// model units external values are expressed in.
///
/// A Length of `v` model units is stored as `v / model_unit_scale`; Area and
/// Volume use the square and cube of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitConfig {
    /// Host units per model unit.
    pub model_unit_scale: f64,
}

impl UnitConfig {
    pub fn new(model_unit_scale: f64) -> Self {
        Self { model_unit_scale }
    }

    /// Returns true if the scale is finite and positive.
    pub fn is_valid(&self) -> bool {
        self.model_unit_scale.is_finite() && self.model_unit_scale > 0.0
    }

    /// Factor between model and host units for a quantity of `dimension`.
    pub fn factor(&self, dimension: i32) -> f64 {
        self.model_unit_scale.powi(dimension)
    }
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            model_unit_scale: 1.0,
        }
    }
}
