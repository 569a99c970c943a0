//! End-to-end tests for the advise_* entry points.
//!
//! Uses a MockClassifier with a fixed verdict so no model artifact is read
//! from disk; the rule-engine outputs are what these tests pin down.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use mylla_core::error::MyllaError;
use mylla_core::inference::Classifier;
use mylla_core::model::{
    IrrigationReading, ModelRole, MoistureBand, Nutrient, NutrientReading, NutrientStatus,
};
use mylla_core::rules::builtin::default_ruleset;
use mylla_core::{advise_fertilizer, advise_irrigation};

struct MockClassifier {
    role: ModelRole,
    verdict: bool,
}

impl Classifier for MockClassifier {
    fn role(&self) -> ModelRole {
        self.role
    }

    fn predict(&self, _features: &[Decimal]) -> Result<bool, MyllaError> {
        Ok(self.verdict)
    }
}

// ---------------------------------------------------------------------------
// Irrigation: dry reading gets the high-water suggestion
// ---------------------------------------------------------------------------
#[test]
fn irrigation_dry_reading_high_water_suggestion() {
    let rules = default_ruleset().unwrap();
    let model = MockClassifier {
        role: ModelRole::Irrigation,
        verdict: true,
    };
    let reading = IrrigationReading {
        moisture: dec!(25),
        temperature: dec!(30),
        humidity: dec!(40),
    };

    let advice = advise_irrigation(&reading, &model, &rules).unwrap();

    assert!(advice.irrigation_required);
    assert_eq!(advice.water.band, MoistureBand::High);
    assert_eq!(
        advice.water.suggestion,
        "High water requirement: 1-2 liters per plant"
    );
}

// ---------------------------------------------------------------------------
// Irrigation: the verdict is the model's alone, independent of banding
// ---------------------------------------------------------------------------
#[test]
fn irrigation_verdict_comes_from_model() {
    let rules = default_ruleset().unwrap();
    let model = MockClassifier {
        role: ModelRole::Irrigation,
        verdict: false,
    };
    let reading = IrrigationReading {
        moisture: dec!(25),
        temperature: dec!(30),
        humidity: dec!(40),
    };

    let advice = advise_irrigation(&reading, &model, &rules).unwrap();

    // Dry soil, but a model that says no is passed through untouched.
    assert!(!advice.irrigation_required);
    assert_eq!(advice.water.band, MoistureBand::High);
}

// ---------------------------------------------------------------------------
// Fertilizer: all-deficient reading with matching actions
// ---------------------------------------------------------------------------
#[test]
fn fertilizer_all_deficient_with_actions() {
    let rules = default_ruleset().unwrap();
    let model = MockClassifier {
        role: ModelRole::Fertilizer,
        verdict: true,
    };
    let reading = NutrientReading {
        nitrogen: dec!(30),
        phosphorus: dec!(10),
        potassium: dec!(100),
    };

    let advice = advise_fertilizer(&reading, &model, &rules).unwrap();

    assert!(advice.fertilizer_required);
    for nutrient in Nutrient::ALL {
        let a = advice.assessment(nutrient).unwrap();
        assert_eq!(a.status, NutrientStatus::Deficient);
    }
    assert!(advice
        .assessment(Nutrient::Phosphorus)
        .unwrap()
        .action
        .contains("bone meal"));
    assert!(advice
        .assessment(Nutrient::Potassium)
        .unwrap()
        .action
        .contains("banana peels"));
}

// ---------------------------------------------------------------------------
// Idempotence: identical readings yield identical categorical outputs
// ---------------------------------------------------------------------------
#[test]
fn identical_readings_identical_outputs() {
    let rules = default_ruleset().unwrap();
    let model = MockClassifier {
        role: ModelRole::Fertilizer,
        verdict: true,
    };
    let reading = NutrientReading {
        nitrogen: dec!(120),
        phosphorus: dec!(40),
        potassium: dec!(180),
    };

    let first = advise_fertilizer(&reading, &model, &rules).unwrap();
    let second = advise_fertilizer(&reading, &model, &rules).unwrap();

    assert_eq!(first.fertilizer_required, second.fertilizer_required);
    for (a, b) in first.assessments.iter().zip(&second.assessments) {
        assert_eq!(a.status, b.status);
        assert_eq!(a.action, b.action);
    }
}

// ---------------------------------------------------------------------------
// Artifact loading checks the declared role against the expected one
// ---------------------------------------------------------------------------
#[test]
fn load_artifact_checks_role() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(
        &path,
        r#"{
            "role": "irrigation",
            "features": ["moisture", "temperature", "humidity"],
            "weights": [-0.18, 0.06, -0.02],
            "bias": 4.0
        }"#,
    )
    .unwrap();

    let err = mylla_core::inference::load_artifact(&path, ModelRole::Fertilizer).unwrap_err();
    assert!(matches!(err, MyllaError::RoleMismatch { .. }));
    assert!(mylla_core::inference::load_artifact(&path, ModelRole::Irrigation).is_ok());
}

// ---------------------------------------------------------------------------
// Wiring a model of the wrong role is an error, not a silent misprediction
// ---------------------------------------------------------------------------
#[test]
fn wrong_model_role_rejected() {
    let rules = default_ruleset().unwrap();
    let model = MockClassifier {
        role: ModelRole::Fertilizer,
        verdict: true,
    };
    let reading = IrrigationReading {
        moisture: dec!(25),
        temperature: dec!(30),
        humidity: dec!(40),
    };

    let err = advise_irrigation(&reading, &model, &rules).unwrap_err();
    assert!(matches!(err, MyllaError::RoleMismatch { .. }));
}
