pub mod builtin;
pub mod schema;

use crate::error::MyllaError;
use crate::model::{MoistureBand, Nutrient, NutrientStatus};
use schema::RuleSetDef;
use std::path::Path;

const ALL_STATUSES: [NutrientStatus; 3] = [
    NutrientStatus::Deficient,
    NutrientStatus::Healthy,
    NutrientStatus::Excess,
];

const ALL_BANDS: [MoistureBand; 3] = [MoistureBand::High, MoistureBand::Medium, MoistureBand::Low];

/// Load a ruleset from a JSON file.
pub fn load_ruleset(path: &Path) -> Result<RuleSetDef, MyllaError> {
    let content = std::fs::read_to_string(path).map_err(|e| MyllaError::RulesetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let ruleset: RuleSetDef =
        serde_json::from_str(&content).map_err(|e| MyllaError::RulesetLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Parse a ruleset from a JSON string.
pub fn parse_ruleset_str(json: &str) -> Result<RuleSetDef, MyllaError> {
    let ruleset: RuleSetDef = serde_json::from_str(json).map_err(MyllaError::Json)?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Validate that a ruleset is well-formed and total: every nutrient has a
/// band, every (status, nutrient) pair has an action, every moisture band
/// has advice, and no band is inverted.
pub fn validate_ruleset(ruleset: &RuleSetDef) -> Result<(), MyllaError> {
    if ruleset.name.is_empty() {
        return Err(MyllaError::RulesetInvalid("name must not be empty".into()));
    }

    for nutrient in Nutrient::ALL {
        let band = ruleset.nutrients.get(&nutrient).ok_or_else(|| {
            MyllaError::RulesetInvalid(format!("missing band for nutrient '{nutrient}'"))
        })?;
        if band.deficient_below > band.excess_above {
            return Err(MyllaError::RulesetInvalid(format!(
                "nutrient '{}' has inverted band: deficient_below {} > excess_above {}",
                nutrient, band.deficient_below, band.excess_above
            )));
        }
    }

    if ruleset.moisture.high_below > ruleset.moisture.low_from {
        return Err(MyllaError::RulesetInvalid(format!(
            "inverted moisture bands: high_below {} > low_from {}",
            ruleset.moisture.high_below, ruleset.moisture.low_from
        )));
    }

    for band in ALL_BANDS {
        if !ruleset.water_advice.contains_key(&band) {
            return Err(MyllaError::RulesetInvalid(format!(
                "missing water advice for '{band}' band"
            )));
        }
    }

    for status in ALL_STATUSES {
        let row = ruleset.actions.get(&status).ok_or_else(|| {
            MyllaError::RulesetInvalid(format!("missing actions for status '{status}'"))
        })?;
        for nutrient in Nutrient::ALL {
            if !row.contains_key(&nutrient) {
                return Err(MyllaError::RulesetInvalid(format!(
                    "missing '{status}' action for nutrient '{nutrient}'"
                )));
            }
        }
    }

    Ok(())
}
