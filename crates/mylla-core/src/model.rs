use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three tracked macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// Fixed assessment order: N, P, K.
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nutrient::Nitrogen => write!(f, "Nitrogen (N)"),
            Nutrient::Phosphorus => write!(f, "Phosphorus (P)"),
            Nutrient::Potassium => write!(f, "Potassium (K)"),
        }
    }
}

/// Nutrient level relative to the configured bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Deficient,
    Healthy,
    Excess,
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientStatus::Deficient => write!(f, "Deficient"),
            NutrientStatus::Healthy => write!(f, "Healthy"),
            NutrientStatus::Excess => write!(f, "Excess"),
        }
    }
}

/// Water requirement band derived from soil moisture percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoistureBand {
    High,
    Medium,
    Low,
}

impl fmt::Display for MoistureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoistureBand::High => write!(f, "High"),
            MoistureBand::Medium => write!(f, "Medium"),
            MoistureBand::Low => write!(f, "Low"),
        }
    }
}

/// Which prediction a classifier artifact serves, and therefore which
/// feature set it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    Irrigation,
    Fertilizer,
}

impl ModelRole {
    /// Canonical feature names for this role, in the order callers pass them.
    pub fn feature_names(&self) -> &'static [&'static str] {
        match self {
            ModelRole::Irrigation => &["moisture", "temperature", "humidity"],
            ModelRole::Fertilizer => &["nitrogen", "phosphorus", "potassium"],
        }
    }
}

impl fmt::Display for ModelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelRole::Irrigation => write!(f, "irrigation"),
            ModelRole::Fertilizer => write!(f, "fertilizer"),
        }
    }
}

/// Sensor readings for an irrigation decision. Built per request, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationReading {
    pub moisture: Decimal,
    pub temperature: Decimal,
    pub humidity: Decimal,
}

impl IrrigationReading {
    /// Feature vector in canonical order (moisture, temperature, humidity).
    pub fn features(&self) -> [Decimal; 3] {
        [self.moisture, self.temperature, self.humidity]
    }
}

/// Lab readings for a fertilization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientReading {
    pub nitrogen: Decimal,
    pub phosphorus: Decimal,
    pub potassium: Decimal,
}

impl NutrientReading {
    /// Feature vector in canonical order (nitrogen, phosphorus, potassium).
    pub fn features(&self) -> [Decimal; 3] {
        [self.nitrogen, self.phosphorus, self.potassium]
    }

    pub fn value(&self, nutrient: Nutrient) -> Decimal {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn nutrient_display_labels() {
        assert_eq!(Nutrient::Nitrogen.to_string(), "Nitrogen (N)");
        assert_eq!(Nutrient::Phosphorus.to_string(), "Phosphorus (P)");
        assert_eq!(Nutrient::Potassium.to_string(), "Potassium (K)");
    }

    #[test]
    fn status_display_matches_api_strings() {
        assert_eq!(NutrientStatus::Deficient.to_string(), "Deficient");
        assert_eq!(NutrientStatus::Healthy.to_string(), "Healthy");
        assert_eq!(NutrientStatus::Excess.to_string(), "Excess");
    }

    #[test]
    fn reading_features_in_canonical_order() {
        let r = NutrientReading {
            nitrogen: dec!(30),
            phosphorus: dec!(10),
            potassium: dec!(100),
        };
        assert_eq!(r.features(), [dec!(30), dec!(10), dec!(100)]);
        assert_eq!(r.value(Nutrient::Phosphorus), dec!(10));
    }

    #[test]
    fn role_feature_names() {
        assert_eq!(
            ModelRole::Irrigation.feature_names(),
            &["moisture", "temperature", "humidity"]
        );
        assert_eq!(
            ModelRole::Fertilizer.feature_names(),
            &["nitrogen", "phosphorus", "potassium"]
        );
    }
}
