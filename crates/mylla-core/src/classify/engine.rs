use rust_decimal::Decimal;

use crate::classify::outcome::{NutrientAssessment, WaterAdvice};
use crate::error::MyllaError;
use crate::model::{MoistureBand, Nutrient, NutrientReading, NutrientStatus};
use crate::rules::schema::{NutrientBandDef, RuleSetDef};

/// Band a single value. Total: every value maps to exactly one status,
/// boundaries inclusive on the Healthy side.
pub fn status_of(value: Decimal, band: &NutrientBandDef) -> NutrientStatus {
    if value < band.deficient_below {
        NutrientStatus::Deficient
    } else if value <= band.excess_above {
        NutrientStatus::Healthy
    } else {
        NutrientStatus::Excess
    }
}

/// Assess all three nutrients of a reading against the ruleset, in N, P, K
/// order. Each assessment carries the status, a reason string and the
/// advisory action from the ruleset's table.
pub fn assess_nutrients(
    reading: &NutrientReading,
    ruleset: &RuleSetDef,
) -> Result<Vec<NutrientAssessment>, MyllaError> {
    Nutrient::ALL
        .into_iter()
        .map(|nutrient| assess_one(nutrient, reading.value(nutrient), ruleset))
        .collect()
}

fn assess_one(
    nutrient: Nutrient,
    value: Decimal,
    ruleset: &RuleSetDef,
) -> Result<NutrientAssessment, MyllaError> {
    let band = ruleset.nutrients.get(&nutrient).ok_or_else(|| {
        MyllaError::RulesetInvalid(format!("missing band for nutrient '{nutrient}'"))
    })?;

    let status = status_of(value, band);

    let reason = match status {
        NutrientStatus::Deficient => format!(
            "{}: {} < {} -> Deficient",
            nutrient, value, band.deficient_below
        ),
        NutrientStatus::Healthy => format!(
            "{}: {} within {}..={} -> Healthy",
            nutrient, value, band.deficient_below, band.excess_above
        ),
        NutrientStatus::Excess => {
            format!("{}: {} > {} -> Excess", nutrient, value, band.excess_above)
        }
    };

    let action = ruleset
        .actions
        .get(&status)
        .and_then(|row| row.get(&nutrient))
        .cloned()
        .ok_or_else(|| {
            MyllaError::RulesetInvalid(format!(
                "missing '{status}' action for nutrient '{nutrient}'"
            ))
        })?;

    Ok(NutrientAssessment {
        nutrient,
        value,
        status,
        reason,
        action,
    })
}

/// Derive the water requirement band and suggestion from soil moisture.
/// Total ordering, no gaps: High below `high_below`, Low from `low_from`,
/// Medium in between.
pub fn water_requirement(
    moisture: Decimal,
    ruleset: &RuleSetDef,
) -> Result<WaterAdvice, MyllaError> {
    let band = if moisture < ruleset.moisture.high_below {
        MoistureBand::High
    } else if moisture < ruleset.moisture.low_from {
        MoistureBand::Medium
    } else {
        MoistureBand::Low
    };

    let suggestion = ruleset
        .water_advice
        .get(&band)
        .cloned()
        .ok_or_else(|| MyllaError::RulesetInvalid(format!("missing water advice for '{band}'")))?;

    Ok(WaterAdvice { band, suggestion })
}
