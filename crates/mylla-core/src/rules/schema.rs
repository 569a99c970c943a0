use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{MoistureBand, Nutrient, NutrientStatus};

/// A ruleset defining nutrient bands, moisture bands and advisory text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Per-nutrient band boundaries (values as strings for exact decimals).
    pub nutrients: BTreeMap<Nutrient, NutrientBandDef>,
    pub moisture: MoistureBandsDef,
    /// Water suggestion text per moisture band.
    pub water_advice: BTreeMap<MoistureBand, String>,
    /// Advisory action per (status, nutrient).
    pub actions: BTreeMap<NutrientStatus, BTreeMap<Nutrient, String>>,
}

/// Band boundaries for a single nutrient.
///
/// Deficient below `deficient_below`, Excess above `excess_above`,
/// Healthy in the closed range between them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutrientBandDef {
    pub deficient_below: Decimal,
    pub excess_above: Decimal,
}

/// Moisture band boundaries: High below `high_below`, Low from `low_from`,
/// Medium in the half-open range between them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoistureBandsDef {
    pub high_below: Decimal,
    pub low_from: Decimal,
}
