//! Features Module - deterministic URL feature computation
//!
//! One versioned schema (`layout`), one resolver (`domain`), one extractor
//! (`extract`). The offline artifact producer and the serving path consume
//! the same definitions; nothing else in the crate computes features.

pub mod domain;
pub mod extract;
pub mod layout;
pub mod vector;

pub use domain::{resolve, DomainInfo};
pub use extract::extract;
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::FeatureVector;
