//! Soil condition models and scoring
//!
//! Scoring is deterministic and must stay bit-for-bit stable: each reading is
//! normalised against a reference maximum, capped at 100, and the overall score
//! is the mean of the *unrounded* nutrient scores, rounded once.

use serde::{Deserialize, Serialize};

/// The four soil readings taken from the sliders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Moisture,
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// Display and summation order
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Moisture,
        Nutrient::Nitrogen,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
    ];

    /// Reading at which the nutrient scores 100
    pub fn reference_max(&self) -> f64 {
        match self {
            Nutrient::Moisture => 60.0,
            Nutrient::Nitrogen => 60.0,
            Nutrient::Phosphorus => 50.0,
            Nutrient::Potassium => 50.0,
        }
    }

    /// Element id prefix (`moisture`, `moisture-value`, `moisture-progress`, ...)
    pub fn id(&self) -> &'static str {
        match self {
            Nutrient::Moisture => "moisture",
            Nutrient::Nitrogen => "nitrogen",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Potassium => "potassium",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Raw slider readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoilInput {
    pub moisture: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl SoilInput {
    pub fn new(moisture: f64, nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        Self {
            moisture,
            nitrogen,
            phosphorus,
            potassium,
        }
    }

    pub fn reading(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Moisture => self.moisture,
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }

    pub fn readings(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(move |n| (n, self.reading(n)))
    }
}

/// Soil condition bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SoilCondition {
    /// 0-39
    Poor,
    /// 40-59
    Moderate,
    /// 60-79
    Good,
    /// 80-100
    Excellent,
}

impl SoilCondition {
    pub fn css_class(&self) -> &'static str {
        match self {
            SoilCondition::Poor => "poor",
            SoilCondition::Moderate => "moderate",
            SoilCondition::Good => "good",
            SoilCondition::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for SoilCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilCondition::Poor => write!(f, "Poor"),
            SoilCondition::Moderate => write!(f, "Moderate"),
            SoilCondition::Good => write!(f, "Good"),
            SoilCondition::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Per-nutrient scores, 0-100
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutrientScores {
    pub moisture_score: u8,
    pub nitrogen_score: u8,
    pub phosphorus_score: u8,
    pub potassium_score: u8,
}

impl NutrientScores {
    pub fn get(&self, nutrient: Nutrient) -> u8 {
        match nutrient {
            Nutrient::Moisture => self.moisture_score,
            Nutrient::Nitrogen => self.nitrogen_score,
            Nutrient::Phosphorus => self.phosphorus_score,
            Nutrient::Potassium => self.potassium_score,
        }
    }
}

/// Soil condition result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilResult {
    #[serde(rename = "soil_condition")]
    pub condition: SoilCondition,
    pub overall_score: u8,
    #[serde(rename = "details")]
    pub nutrient_scores: NutrientScores,
}

impl SoilResult {
    /// Sweep of the overall score circle, in degrees
    pub fn score_angle_degrees(&self) -> f64 {
        f64::from(self.overall_score) / 100.0 * 360.0
    }
}

/// Unrounded score for one reading, in `[0, 100]`
pub fn nutrient_score_raw(nutrient: Nutrient, reading: f64) -> f64 {
    if reading.is_nan() {
        return 0.0;
    }
    (reading / nutrient.reference_max() * 100.0).min(100.0).max(0.0)
}

/// Displayed score for one reading
pub fn nutrient_score(nutrient: Nutrient, reading: f64) -> u8 {
    round_score(nutrient_score_raw(nutrient, reading))
}

/// Bucket an overall score
pub fn classify_soil_score(overall_score: u8) -> SoilCondition {
    match overall_score {
        80..=u8::MAX => SoilCondition::Excellent,
        60..=79 => SoilCondition::Good,
        40..=59 => SoilCondition::Moderate,
        _ => SoilCondition::Poor,
    }
}

/// Score a set of readings
pub fn score_soil(input: &SoilInput) -> SoilResult {
    let moisture = nutrient_score_raw(Nutrient::Moisture, input.moisture);
    let nitrogen = nutrient_score_raw(Nutrient::Nitrogen, input.nitrogen);
    let phosphorus = nutrient_score_raw(Nutrient::Phosphorus, input.phosphorus);
    let potassium = nutrient_score_raw(Nutrient::Potassium, input.potassium);

    let overall_score = round_score((moisture + nitrogen + phosphorus + potassium) / 4.0);

    SoilResult {
        condition: classify_soil_score(overall_score),
        overall_score,
        nutrient_scores: NutrientScores {
            moisture_score: round_score(moisture),
            nitrogen_score: round_score(nitrogen),
            phosphorus_score: round_score(phosphorus),
            potassium_score: round_score(potassium),
        },
    }
}

// Inputs are already in [0, 100], where `round` is half-up.
fn round_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturates_above_reference() {
        assert_eq!(nutrient_score(Nutrient::Moisture, 60.0), 100);
        assert_eq!(nutrient_score(Nutrient::Moisture, 95.0), 100);
        assert_eq!(nutrient_score(Nutrient::Potassium, 51.0), 100);
    }

    #[test]
    fn test_negative_and_nan_readings_clamp_to_zero() {
        assert_eq!(nutrient_score(Nutrient::Nitrogen, -10.0), 0);
        assert_eq!(nutrient_score_raw(Nutrient::Nitrogen, f64::NAN), 0.0);
    }

    #[test]
    fn test_overall_rounds_once() {
        // 45/60 -> 75, 45/60 -> 75, 1/50 -> 2, 1/50 -> 2: mean 38.5 -> 39
        let result = score_soil(&SoilInput::new(45.0, 45.0, 1.0, 1.0));
        assert_eq!(result.overall_score, 39);
        assert_eq!(result.condition, SoilCondition::Poor);

        // 0.4, 0.4, 0.4, 0.9: rounding first would average to 0.25 -> 0
        let result = score_soil(&SoilInput::new(0.24, 0.24, 0.2, 0.45));
        assert_eq!(result.nutrient_scores.moisture_score, 0);
        assert_eq!(result.nutrient_scores.potassium_score, 1);
        assert_eq!(result.overall_score, 1);
    }

    #[test]
    fn test_score_angle() {
        let result = score_soil(&SoilInput::new(30.0, 30.0, 25.0, 25.0));
        assert_eq!(result.score_angle_degrees(), 180.0);
    }

    #[test]
    fn test_wire_format() {
        let result = score_soil(&SoilInput::new(60.0, 60.0, 50.0, 50.0));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["soil_condition"], "Excellent");
        assert_eq!(json["overall_score"], 100);
        assert_eq!(json["details"]["phosphorus_score"], 100);
    }
}
