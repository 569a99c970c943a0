pub mod classify;
pub mod error;
pub mod inference;
pub mod model;
pub mod rules;

use classify::outcome::{FertilizerAdvice, IrrigationAdvice};
use error::MyllaError;
use inference::Classifier;
use model::{IrrigationReading, ModelRole, NutrientReading};
use rules::schema::RuleSetDef;

/// Main API entry point for irrigation: classifier verdict plus the water
/// requirement band for the reading's moisture.
pub fn advise_irrigation(
    reading: &IrrigationReading,
    model: &dyn Classifier,
    ruleset: &RuleSetDef,
) -> Result<IrrigationAdvice, MyllaError> {
    expect_role(model, ModelRole::Irrigation)?;

    let irrigation_required = model.predict(&reading.features())?;
    let water = classify::water_requirement(reading.moisture, ruleset)?;

    Ok(IrrigationAdvice {
        irrigation_required,
        water,
    })
}

/// Main API entry point for fertilization: classifier verdict plus
/// per-nutrient band assessments and advisory actions.
pub fn advise_fertilizer(
    reading: &NutrientReading,
    model: &dyn Classifier,
    ruleset: &RuleSetDef,
) -> Result<FertilizerAdvice, MyllaError> {
    expect_role(model, ModelRole::Fertilizer)?;

    let fertilizer_required = model.predict(&reading.features())?;
    let assessments = classify::assess_nutrients(reading, ruleset)?;

    Ok(FertilizerAdvice {
        fertilizer_required,
        assessments,
    })
}

fn expect_role(model: &dyn Classifier, expected: ModelRole) -> Result<(), MyllaError> {
    if model.role() != expected {
        return Err(MyllaError::RoleMismatch {
            expected,
            got: model.role(),
        });
    }
    Ok(())
}
