use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::MyllaError;
use crate::inference::Classifier;
use crate::model::ModelRole;

/// Serialized form of a logistic classifier artifact.
///
/// `features` may list the role's feature names in any order (trained models
/// differ in column order); the loader resolves the permutation so callers
/// always pass canonical order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactDef {
    pub role: ModelRole,
    pub features: Vec<String>,
    pub weights: Vec<f64>,
    pub bias: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// A logistic-regression binary classifier: sigmoid(w . x + b) >= threshold.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    role: ModelRole,
    /// Weights reordered to the role's canonical feature order at load.
    weights: Vec<f64>,
    bias: f64,
    threshold: f64,
}

impl LinearClassifier {
    /// Build a classifier from a parsed artifact, validating feature arity
    /// and resolving the declared feature order against the canonical one.
    pub fn from_def(def: ArtifactDef) -> Result<Self, MyllaError> {
        let canonical = def.role.feature_names();

        if def.features.len() != def.weights.len() {
            return Err(MyllaError::ArtifactInvalid(format!(
                "{} features but {} weights",
                def.features.len(),
                def.weights.len()
            )));
        }
        if def.features.len() != canonical.len() {
            return Err(MyllaError::ArtifactInvalid(format!(
                "{} model declares {} features, expected {}",
                def.role,
                def.features.len(),
                canonical.len()
            )));
        }

        let mut weights = Vec::with_capacity(canonical.len());
        for name in canonical {
            let idx = def
                .features
                .iter()
                .position(|f| f == name)
                .ok_or_else(|| {
                    MyllaError::ArtifactInvalid(format!(
                        "{} model is missing feature '{}'",
                        def.role, name
                    ))
                })?;
            weights.push(def.weights[idx]);
        }

        Ok(Self {
            role: def.role,
            weights,
            bias: def.bias,
            threshold: def.threshold,
        })
    }

    /// Load an artifact from a JSON file. Any failure here is fatal to
    /// startup; there is no per-request fallback.
    pub fn load(path: &Path) -> Result<Self, MyllaError> {
        let content = std::fs::read_to_string(path).map_err(|e| MyllaError::ArtifactLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let def: ArtifactDef =
            serde_json::from_str(&content).map_err(|e| MyllaError::ArtifactLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Self::from_def(def)
    }
}

impl Classifier for LinearClassifier {
    fn role(&self) -> ModelRole {
        self.role
    }

    fn predict(&self, features: &[Decimal]) -> Result<bool, MyllaError> {
        if features.len() != self.weights.len() {
            return Err(MyllaError::FeatureMismatch {
                expected: self.weights.len(),
                got: features.len(),
            });
        }

        let score: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x.to_f64().unwrap_or(0.0))
            .sum::<f64>()
            + self.bias;

        let probability = 1.0 / (1.0 + (-score).exp());
        Ok(probability >= self.threshold)
    }
}

/// Load an artifact and check it serves the expected role.
pub fn load_artifact(path: &Path, role: ModelRole) -> Result<LinearClassifier, MyllaError> {
    let classifier = LinearClassifier::load(path)?;
    if classifier.role() != role {
        return Err(MyllaError::RoleMismatch {
            expected: role,
            got: classifier.role(),
        });
    }
    Ok(classifier)
}
