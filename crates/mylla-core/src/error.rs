use std::path::PathBuf;

use crate::model::ModelRole;

#[derive(Debug, thiserror::Error)]
pub enum MyllaError {
    #[error("failed to load ruleset from {path}: {reason}")]
    RulesetLoad { path: PathBuf, reason: String },

    #[error("invalid ruleset: {0}")]
    RulesetInvalid(String),

    #[error("failed to load model artifact from {path}: {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },

    #[error("invalid model artifact: {0}")]
    ArtifactInvalid(String),

    #[error("classifier expected {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("expected a {expected} model, got a {got} model")]
    RoleMismatch { expected: ModelRole, got: ModelRole },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
