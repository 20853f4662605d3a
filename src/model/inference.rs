//! Inference - pure verdict computation
//!
//! `predict` is a pure function of (artifact, feature vector): no state, no
//! I/O, identical inputs always produce identical verdicts. Anything
//! unexpected comes back as an `InferenceError` for the service layer to
//! surface as an opaque 5xx.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::layout::LayoutMismatchError;
use crate::features::FeatureVector;

use super::artifact::ClassifierArtifact;

/// Classification outcome for one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub malicious: bool,
    /// Confidence score in [0, 1]; `malicious == (score >= threshold)`.
    pub score: f64,
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("feature vector incompatible with loaded artifact: {0}")]
    IncompatibleVector(#[from] LayoutMismatchError),

    #[error("classifier produced a non-finite score")]
    NonFiniteScore,
}

/// Score a feature vector against the loaded artifact.
pub fn predict(
    artifact: &ClassifierArtifact,
    features: &FeatureVector,
) -> Result<Verdict, InferenceError> {
    features.validate()?;

    let logit: f64 = features
        .as_slice()
        .iter()
        .zip(&artifact.weights)
        .map(|(value, weight)| value * weight)
        .sum::<f64>()
        + artifact.bias;

    let score = sigmoid(logit);
    if !score.is_finite() {
        return Err(InferenceError::NonFiniteScore);
    }

    Ok(Verdict {
        malicious: score >= artifact.threshold,
        score,
    })
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
