//! Feature Vector - Core data structure for classifier input
//!
//! Versioned feature vector with layout validation. Values are `f64` so the
//! domain-hash feature range `[0, 1e8)` is represented exactly.

use serde::{Deserialize, Serialize};

use super::layout::{
    layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT, FEATURE_VERSION,
};

/// Versioned feature vector with layout metadata.
///
/// All classifier input goes through this struct; never a raw `Vec<f64>`,
/// so a vector built against a stale layout is detectable before inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u32,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in the order defined by FEATURE_LAYOUT
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a new zeroed feature vector tagged with the current layout.
    pub fn new() -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Create from raw values tagged with the current layout.
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Get values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Get feature by index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get feature by name.
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Validate that this vector is compatible with the current layout.
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    /// Check if this vector is compatible with the current layout.
    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    /// True iff every value is finite (no NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}
