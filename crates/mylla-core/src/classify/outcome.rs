use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{MoistureBand, Nutrient, NutrientStatus};

/// Assessment of a single nutrient against its band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientAssessment {
    pub nutrient: Nutrient,
    /// The reading that was assessed.
    pub value: Decimal,
    pub status: NutrientStatus,
    /// Human-readable explanation of the banding decision.
    pub reason: String,
    /// Advisory action text for this (status, nutrient) pair.
    pub action: String,
}

/// Water requirement derived from soil moisture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterAdvice {
    pub band: MoistureBand,
    pub suggestion: String,
}

/// Combined irrigation verdict: classifier output plus water banding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationAdvice {
    pub irrigation_required: bool,
    pub water: WaterAdvice,
}

/// Combined fertilization verdict: classifier output plus per-nutrient
/// assessments (N, P, K order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerAdvice {
    pub fertilizer_required: bool,
    pub assessments: Vec<NutrientAssessment>,
}

impl FertilizerAdvice {
    pub fn assessment(&self, nutrient: Nutrient) -> Option<&NutrientAssessment> {
        self.assessments.iter().find(|a| a.nutrient == nutrient)
    }
}
