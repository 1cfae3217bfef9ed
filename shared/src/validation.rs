//! Validation utilities for analysis inputs

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{Nutrient, SoilInput};

/// Range a slider accepts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
}

impl SliderBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

/// Bounds of the four soil sliders
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SoilBounds {
    pub moisture: SliderBounds,
    pub nitrogen: SliderBounds,
    pub phosphorus: SliderBounds,
    pub potassium: SliderBounds,
}

impl SoilBounds {
    pub fn get(&self, nutrient: Nutrient) -> SliderBounds {
        match nutrient {
            Nutrient::Moisture => self.moisture,
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, bounds: SliderBounds) {
        match nutrient {
            Nutrient::Moisture => self.moisture = bounds,
            Nutrient::Nitrogen => self.nitrogen = bounds,
            Nutrient::Phosphorus => self.phosphorus = bounds,
            Nutrient::Potassium => self.potassium = bounds,
        }
    }
}

fn check_finite(nutrient: Nutrient, value: f64) -> AnalysisResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalysisError::InvalidReading { nutrient, value })
    }
}

/// Validate a single reading against its slider
pub fn validate_reading(nutrient: Nutrient, value: f64, bounds: SliderBounds) -> AnalysisResult<()> {
    check_finite(nutrient, value)?;
    if !bounds.contains(value) {
        return Err(AnalysisError::OutOfBounds {
            nutrient,
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(())
}

/// Validate all four readings, reporting the first failure in display order
pub fn validate_soil_input(input: &SoilInput, bounds: &SoilBounds) -> AnalysisResult<()> {
    input
        .readings()
        .try_for_each(|(nutrient, value)| validate_reading(nutrient, value, bounds.get(nutrient)))
}

/// Reject NaN and infinite readings only; anything finite is scored with saturation
pub fn validate_finite_readings(input: &SoilInput) -> AnalysisResult<()> {
    input
        .readings()
        .try_for_each(|(nutrient, value)| check_finite(nutrient, value))
}

/// Slider track fill, `value / max * 100`, kept within `[0, 100]`
pub fn slider_fill_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() || !max.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_out_of_bounds() {
        let err = validate_reading(Nutrient::Nitrogen, 120.0, SliderBounds::default()).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::OutOfBounds {
                nutrient: Nutrient::Nitrogen,
                value: 120.0,
                min: 0.0,
                max: 100.0
            }
        );
    }

    #[test]
    fn test_first_invalid_reading_is_reported() {
        let input = SoilInput::new(10.0, f64::NAN, -1.0, 10.0);
        let err = validate_soil_input(&input, &SoilBounds::default()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidReading {
                nutrient: Nutrient::Nitrogen,
                ..
            }
        ));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let input = SoilInput::new(0.0, 100.0, 0.0, 100.0);
        assert!(validate_soil_input(&input, &SoilBounds::default()).is_ok());
    }

    #[test]
    fn test_finite_readings_ignore_bounds() {
        let input = SoilInput::new(250.0, -3.0, 50.0, 1e9);
        assert!(validate_finite_readings(&input).is_ok());

        let input = SoilInput::new(10.0, 10.0, f64::INFINITY, f64::NAN);
        assert_eq!(
            validate_finite_readings(&input).unwrap_err(),
            AnalysisError::InvalidReading {
                nutrient: Nutrient::Phosphorus,
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn test_slider_fill_percent() {
        assert_eq!(slider_fill_percent(25.0, 100.0), 25.0);
        assert_eq!(slider_fill_percent(30.0, 60.0), 50.0);
        assert_eq!(slider_fill_percent(10.0, 0.0), 0.0);
        assert_eq!(slider_fill_percent(150.0, 100.0), 100.0);
    }
}
