//! Soil scoring tests
//!
//! Covers the deterministic soil pipeline: per-nutrient normalisation,
//! the once-rounded overall score, and the condition buckets.

use proptest::prelude::*;
use shared::{
    classify_soil_score, nutrient_score, nutrient_score_raw, score_soil, Nutrient, SoilCondition,
    SoilInput,
};

// ============================================================================
// Worked examples
// ============================================================================

mod examples {
    use super::*;

    #[test]
    fn all_readings_at_reference_max_is_excellent() {
        let result = score_soil(&SoilInput::new(60.0, 60.0, 50.0, 50.0));
        assert_eq!(result.overall_score, 100);
        assert_eq!(result.condition, SoilCondition::Excellent);
        for nutrient in Nutrient::ALL {
            assert_eq!(result.nutrient_scores.get(nutrient), 100);
        }
    }

    #[test]
    fn all_readings_zero_is_poor() {
        let result = score_soil(&SoilInput::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.condition, SoilCondition::Poor);
    }

    #[test]
    fn half_of_reference_is_moderate() {
        let result = score_soil(&SoilInput::new(30.0, 30.0, 25.0, 25.0));
        assert_eq!(result.overall_score, 50);
        assert_eq!(result.condition, SoilCondition::Moderate);
        assert_eq!(result.nutrient_scores.moisture_score, 50);
        assert_eq!(result.nutrient_scores.potassium_score, 50);
    }

    #[test]
    fn saturated_readings_do_not_lift_overall_past_cap() {
        // Moisture 90 caps at 100, the rest contribute 0
        let result = score_soil(&SoilInput::new(90.0, 0.0, 0.0, 0.0));
        assert_eq!(result.nutrient_scores.moisture_score, 100);
        assert_eq!(result.overall_score, 25);
        assert_eq!(result.condition, SoilCondition::Poor);
    }

    #[test]
    fn mixed_readings() {
        // 40/60 = 66.67, 50/60 = 83.33, 20/50 = 40, 35/50 = 70 -> mean 65
        let result = score_soil(&SoilInput::new(40.0, 50.0, 20.0, 35.0));
        assert_eq!(result.nutrient_scores.moisture_score, 67);
        assert_eq!(result.nutrient_scores.nitrogen_score, 83);
        assert_eq!(result.nutrient_scores.phosphorus_score, 40);
        assert_eq!(result.nutrient_scores.potassium_score, 70);
        assert_eq!(result.overall_score, 65);
        assert_eq!(result.condition, SoilCondition::Good);
    }
}

// ============================================================================
// Condition buckets
// ============================================================================

mod buckets {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(classify_soil_score(100), SoilCondition::Excellent);
        assert_eq!(classify_soil_score(80), SoilCondition::Excellent);
        assert_eq!(classify_soil_score(79), SoilCondition::Good);
        assert_eq!(classify_soil_score(60), SoilCondition::Good);
        assert_eq!(classify_soil_score(59), SoilCondition::Moderate);
        assert_eq!(classify_soil_score(40), SoilCondition::Moderate);
        assert_eq!(classify_soil_score(39), SoilCondition::Poor);
        assert_eq!(classify_soil_score(0), SoilCondition::Poor);
    }

    #[test]
    fn css_classes_follow_condition() {
        assert_eq!(SoilCondition::Excellent.css_class(), "excellent");
        assert_eq!(SoilCondition::Moderate.to_string(), "Moderate");
    }
}

// ============================================================================
// Properties
// ============================================================================

fn nutrient_strategy() -> impl Strategy<Value = Nutrient> {
    prop_oneof![
        Just(Nutrient::Moisture),
        Just(Nutrient::Nitrogen),
        Just(Nutrient::Phosphorus),
        Just(Nutrient::Potassium),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Raising a reading never lowers its score
    #[test]
    fn nutrient_score_is_monotonic(
        nutrient in nutrient_strategy(),
        a in 0.0f64..120.0,
        b in 0.0f64..120.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(nutrient_score(nutrient, low) <= nutrient_score(nutrient, high));
    }

    /// Any reading at or above the reference maximum scores exactly 100
    #[test]
    fn nutrient_score_saturates(nutrient in nutrient_strategy(), excess in 0.0f64..500.0) {
        let reading = nutrient.reference_max() + excess;
        prop_assert_eq!(nutrient_score(nutrient, reading), 100);
    }

    /// The overall score is the once-rounded mean of the unrounded scores
    #[test]
    fn overall_is_rounded_mean_of_raw_scores(
        moisture in 0.0f64..100.0,
        nitrogen in 0.0f64..100.0,
        phosphorus in 0.0f64..100.0,
        potassium in 0.0f64..100.0,
    ) {
        let input = SoilInput::new(moisture, nitrogen, phosphorus, potassium);
        let raw_sum: f64 = input
            .readings()
            .map(|(n, r)| nutrient_score_raw(n, r))
            .sum();
        let expected = (raw_sum / 4.0).round() as u8;

        let result = score_soil(&input);
        prop_assert_eq!(result.overall_score, expected);
        prop_assert!(result.overall_score <= 100);
        prop_assert_eq!(result.condition, classify_soil_score(result.overall_score));
    }

    /// Scoring has no hidden state
    #[test]
    fn scoring_is_idempotent(
        moisture in 0.0f64..100.0,
        nitrogen in 0.0f64..100.0,
        phosphorus in 0.0f64..100.0,
        potassium in 0.0f64..100.0,
    ) {
        let input = SoilInput::new(moisture, nitrogen, phosphorus, potassium);
        prop_assert_eq!(score_soil(&input), score_soil(&input));
    }
}
