//! Classifier Artifact - versioned container for trained parameters
//!
//! The artifact is produced offline and loaded exactly once at startup.
//! It carries its own schema binding (`schema_version` + ordered
//! `feature_names`) and is rejected at load time if that binding does not
//! match the serving feature layout. A mismatch must never degrade into
//! silently misaligned predictions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};

/// Trained classifier parameters plus the schema they were fitted against.
///
/// Immutable once loaded; shared by reference across all requests. The
/// parameters are an opaque sealed container to the rest of the crate —
/// only `model::inference` interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Feature layout version the artifact was trained against.
    pub schema_version: u32,
    /// Ordered feature names the trained parameters expect.
    pub feature_names: Vec<String>,
    /// Per-feature weights, same order as `feature_names`.
    pub weights: Vec<f64>,
    /// Intercept term.
    pub bias: f64,
    /// Decision threshold on the score, in [0, 1].
    pub threshold: f64,
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot read classifier artifact {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("classifier artifact is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("artifact schema version {found} does not match serving feature layout version {expected}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("artifact feature schema does not match serving layout: {0}")]
    SchemaMismatch(String),

    #[error("artifact parameters are invalid: {0}")]
    InvalidParameters(String),
}

impl ClassifierArtifact {
    /// Load and validate an artifact file. Any error here is fatal to
    /// startup; the service must not come up with a rejected artifact.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        let artifact: Self = serde_json::from_str(&raw)?;
        artifact.validate_schema()?;
        Ok(artifact)
    }

    /// Check the artifact's schema binding against the serving layout.
    pub fn validate_schema(&self) -> Result<(), ArtifactError> {
        if self.schema_version != FEATURE_VERSION {
            return Err(ArtifactError::VersionMismatch {
                expected: FEATURE_VERSION,
                found: self.schema_version,
            });
        }

        if self.feature_names.len() != FEATURE_COUNT {
            return Err(ArtifactError::SchemaMismatch(format!(
                "expected {} feature names, found {}",
                FEATURE_COUNT,
                self.feature_names.len()
            )));
        }

        for (index, (expected, found)) in
            FEATURE_LAYOUT.iter().zip(&self.feature_names).enumerate()
        {
            if expected != found {
                return Err(ArtifactError::SchemaMismatch(format!(
                    "feature {index}: expected {expected:?}, found {found:?}"
                )));
            }
        }

        if self.weights.len() != FEATURE_COUNT {
            return Err(ArtifactError::InvalidParameters(format!(
                "expected {} weights, found {}",
                FEATURE_COUNT,
                self.weights.len()
            )));
        }

        if !self.weights.iter().all(|w| w.is_finite()) {
            return Err(ArtifactError::InvalidParameters(
                "non-finite weight".to_string(),
            ));
        }

        if !self.bias.is_finite() || !self.threshold.is_finite() {
            return Err(ArtifactError::InvalidParameters(
                "non-finite bias or threshold".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn valid_artifact() -> ClassifierArtifact {
        ClassifierArtifact {
            schema_version: FEATURE_VERSION,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            weights: vec![0.1; FEATURE_COUNT],
            bias: -1.0,
            threshold: 0.5,
        }
    }

    fn write_artifact(artifact: &ClassifierArtifact) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(artifact).unwrap().as_bytes())
            .unwrap();
        file
    }

    #[test]
    fn test_load_valid_artifact() {
        let file = write_artifact(&valid_artifact());
        let loaded = ClassifierArtifact::load(file.path()).unwrap();
        assert_eq!(loaded.schema_version, FEATURE_VERSION);
        assert_eq!(loaded.feature_names.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClassifierArtifact::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Unreadable { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let err = ClassifierArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed(_)));
    }

    #[test]
    fn test_rejects_wrong_version() {
        let mut artifact = valid_artifact();
        artifact.schema_version = FEATURE_VERSION + 1;
        let file = write_artifact(&artifact);
        let err = ClassifierArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::VersionMismatch { .. }));
    }

    #[test]
    fn test_rejects_reordered_features() {
        let mut artifact = valid_artifact();
        artifact.feature_names.swap(0, 1);
        let file = write_artifact(&artifact);
        let err = ClassifierArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::SchemaMismatch(_)));
    }

    #[test]
    fn test_rejects_missing_feature() {
        let mut artifact = valid_artifact();
        artifact.feature_names.pop();
        let file = write_artifact(&artifact);
        let err = ClassifierArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::SchemaMismatch(_)));
    }

    #[test]
    fn test_rejects_wrong_weight_count() {
        let mut artifact = valid_artifact();
        artifact.weights.pop();
        let file = write_artifact(&artifact);
        let err = ClassifierArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::InvalidParameters(_)));
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        // JSON cannot carry NaN/Inf (serde_json writes null, which fails to
        // parse as f64), so exercise the check on the in-memory container.
        let mut artifact = valid_artifact();
        artifact.weights[3] = f64::NAN;
        assert!(matches!(
            artifact.validate_schema().unwrap_err(),
            ArtifactError::InvalidParameters(_)
        ));

        let mut artifact = valid_artifact();
        artifact.bias = f64::INFINITY;
        assert!(matches!(
            artifact.validate_schema().unwrap_err(),
            ArtifactError::InvalidParameters(_)
        ));
    }
}
