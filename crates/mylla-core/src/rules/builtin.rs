use crate::error::MyllaError;
use crate::rules::schema::RuleSetDef;

pub const NPK_DEFAULT_JSON: &str = include_str!("../../../../rules/npk-default.json");

/// Load the built-in default ruleset.
pub fn default_ruleset() -> Result<RuleSetDef, MyllaError> {
    crate::rules::parse_ruleset_str(NPK_DEFAULT_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MoistureBand, Nutrient, NutrientStatus};
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_ruleset_loads() {
        let rs = default_ruleset().unwrap();
        assert_eq!(rs.version, "1.0");
        let n = &rs.nutrients[&Nutrient::Nitrogen];
        assert_eq!(n.deficient_below, dec!(50));
        assert_eq!(n.excess_above, dec!(200));
        let k = &rs.nutrients[&Nutrient::Potassium];
        assert_eq!(k.deficient_below, dec!(120));
        assert_eq!(k.excess_above, dec!(250));
    }

    #[test]
    fn test_default_water_advice_strings() {
        let rs = default_ruleset().unwrap();
        assert_eq!(
            rs.water_advice[&MoistureBand::High],
            "High water requirement: 1-2 liters per plant"
        );
        assert_eq!(
            rs.water_advice[&MoistureBand::Low],
            "Low water requirement: 0-0.5 liters per plant"
        );
    }

    #[test]
    fn test_default_actions_mention_biochar() {
        let rs = default_ruleset().unwrap();
        let action = &rs.actions[&NutrientStatus::Deficient][&Nutrient::Nitrogen];
        assert!(action.contains("biochar"));
    }
}
