//! Pest detection models

use serde::{Deserialize, Serialize};

use crate::types::{clamp_unit, confidence_percent};

/// Icon used when a detection carries none
pub const DEFAULT_PEST_ICON: &str = "fas fa-bug";

/// A pest the mock detector knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PestSpecies {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Species the mock detector draws from
pub const PEST_CATALOG: [PestSpecies; 4] = [
    PestSpecies {
        name: "Aphids",
        icon: "fas fa-bug",
    },
    PestSpecies {
        name: "Spider Mites",
        icon: "fas fa-spider",
    },
    PestSpecies {
        name: "Whiteflies",
        icon: "fas fa-bug",
    },
    PestSpecies {
        name: "Thrips",
        icon: "fas fa-bug",
    },
];

/// A single detected pest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PestDetection {
    #[serde(rename = "class")]
    pub species: String,
    pub confidence: f64,
    #[serde(rename = "icon", default, skip_serializing_if = "String::is_empty")]
    pub icon_ref: String,
}

impl PestDetection {
    pub fn new(species: impl Into<String>, confidence: f64, icon_ref: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            confidence: clamp_unit(confidence),
            icon_ref: icon_ref.into(),
        }
    }

    pub fn from_species(species: &PestSpecies, confidence: f64) -> Self {
        Self::new(species.name, confidence, species.icon)
    }

    pub fn icon(&self) -> &str {
        if self.icon_ref.is_empty() {
            DEFAULT_PEST_ICON
        } else {
            &self.icon_ref
        }
    }

    pub fn confidence_percent(&self) -> u32 {
        confidence_percent(self.confidence)
    }
}

/// Pest detection result, in detector order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PestResult {
    #[serde(default)]
    pub detections: Vec<PestDetection>,
}

impl PestResult {
    pub fn new(detections: Vec<PestDetection>) -> Self {
        Self { detections }
    }

    pub fn is_clear(&self) -> bool {
        self.detections.is_empty()
    }

    /// Count label, e.g. "2 detected"
    pub fn count_label(&self) -> String {
        format!("{} detected", self.detections.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_icon_falls_back() {
        let detection: PestDetection =
            serde_json::from_str(r#"{"class":"Detected Pest","confidence":0.41}"#).unwrap();
        assert_eq!(detection.icon(), DEFAULT_PEST_ICON);
        assert_eq!(detection.confidence_percent(), 41);
    }

    #[test]
    fn test_count_label() {
        let result = PestResult::new(vec![
            PestDetection::from_species(&PEST_CATALOG[0], 0.7),
            PestDetection::from_species(&PEST_CATALOG[1], 0.9),
        ]);
        assert_eq!(result.count_label(), "2 detected");
        assert!(!result.is_clear());
        assert!(PestResult::default().is_clear());
    }
}
