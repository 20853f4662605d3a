//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! ## Why versioning matters:
//! - Classifier artifacts are trained against one exact layout
//! - A silent train/serve divergence corrupts every prediction
//! - Artifacts carrying a stale layout must be rejected at load time

use crc32fast::Hasher;
use thiserror::Error;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version.
/// MUST be incremented when the layout changes.
pub const FEATURE_VERSION: u32 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order they appear in the vector.
/// This is the SINGLE SOURCE OF TRUTH for the feature layout, consumed
/// identically by the offline artifact producer and the serving path.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Domain (0-1) ===
    "root_domain_hash",       // 0: MD5 of the registered domain, mod 1e8
    "has_subdomain",          // 1: host has labels left of the registered domain

    // === Raw URL text (2-9) ===
    "count_dots",             // 2: '.' occurrences
    "count_dashes",           // 3: '-' occurrences
    "count_underscores",      // 4: '_' occurrences
    "count_slashes",          // 5: '/' occurrences
    "count_question_marks",   // 6: '?' occurrences
    "count_non_alphanumeric", // 7: chars that are neither letter nor digit
    "count_digits",           // 8: digit chars
    "count_letters",          // 9: alphabetic chars

    // === Query (10) ===
    "count_params",           // 10: '&'-delimited query tokens (absent query counts as 1)

    // === Substring flags (11-13) ===
    "has_php",                // 11: "php" occurs anywhere in the raw URL
    "has_html",               // 12: "html" occurs anywhere in the raw URL
    "has_at_symbol",          // 13: '@' occurs in the raw URL

    // === Scheme / host (14-16) ===
    "has_http",               // 14: scheme is exactly "http"
    "has_ip_literal",         // 15: host is a literal IPv4/IPv6 address
    "has_https",              // 16: scheme is exactly "https"
];

/// Total number of features.
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 17;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute the CRC32 hash of the feature layout.
/// Used to detect layout mismatches at runtime.
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&FEATURE_VERSION.to_le_bytes());

    // Hash all feature names in order
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get the layout hash (inputs are const, so this is stable for the build).
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a feature layout doesn't match the expected one.
#[derive(Debug, Clone, Error)]
#[error(
    "feature layout mismatch: expected v{expected_version} (hash {expected_hash:08x}), \
     got v{actual_version} (hash {actual_hash:08x})"
)]
pub struct LayoutMismatchError {
    pub expected_version: u32,
    pub expected_hash: u32,
    pub actual_version: u32,
    pub actual_hash: u32,
}

/// Validate that incoming data matches the current layout.
pub fn validate_layout(incoming_version: u32, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few).
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index.
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================
