//! Model Module - classifier artifact loading and inference

pub mod artifact;
pub mod inference;

pub use artifact::{ArtifactError, ClassifierArtifact};
pub use inference::{predict, InferenceError, Verdict};
