pub mod linear;

pub use linear::{load_artifact, ArtifactDef, LinearClassifier};

use rust_decimal::Decimal;

use crate::error::MyllaError;
use crate::model::ModelRole;

/// A pre-trained binary classifier.
///
/// Features are passed in the canonical order for the model's role (see
/// [`ModelRole::feature_names`]). Implementations are immutable after
/// construction and safe for concurrent read-only use; tests substitute
/// fakes through this trait.
pub trait Classifier: Send + Sync {
    fn role(&self) -> ModelRole;

    /// Produce the verdict for one feature vector. Feature values are passed
    /// to the model unchanged; no range validation happens here.
    fn predict(&self, features: &[Decimal]) -> Result<bool, MyllaError>;
}
