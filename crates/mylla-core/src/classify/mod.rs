pub mod engine;
pub mod outcome;

pub use engine::{assess_nutrients, status_of, water_requirement};
pub use outcome::{FertilizerAdvice, IrrigationAdvice, NutrientAssessment, WaterAdvice};
