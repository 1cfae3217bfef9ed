//! Crop health classification models

use serde::{Deserialize, Serialize};

use crate::types::{clamp_unit, confidence_percent};

/// Note attached to mock classifications
pub const DEFAULT_CROP_NOTE: &str = "Analysis based on leaf structure and coloration patterns.";

/// Shown in place of an empty note
pub const MISSING_CROP_NOTE: &str = "No additional details available.";

/// Crop health class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CropLabel {
    Healthy,
    Diseased,
}

impl CropLabel {
    /// Style class applied to the status pill and result card
    pub fn css_class(&self) -> &'static str {
        match self {
            CropLabel::Healthy => "healthy",
            CropLabel::Diseased => "diseased",
        }
    }
}

impl std::fmt::Display for CropLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropLabel::Healthy => write!(f, "Healthy"),
            CropLabel::Diseased => write!(f, "Diseased"),
        }
    }
}

/// Crop health classification result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropResult {
    #[serde(rename = "class_label")]
    pub label: CropLabel,
    pub confidence: f64,
    pub note: String,
}

impl CropResult {
    /// Build a result, clamping the confidence into `[0, 1]`
    pub fn new(label: CropLabel, confidence: f64, note: impl Into<String>) -> Self {
        Self {
            label,
            confidence: clamp_unit(confidence),
            note: note.into(),
        }
    }

    pub fn confidence_percent(&self) -> u32 {
        confidence_percent(self.confidence)
    }

    /// Note text to display, falling back when the classifier gave none
    pub fn display_note(&self) -> &str {
        if self.note.trim().is_empty() {
            MISSING_CROP_NOTE
        } else {
            &self.note
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        let result = CropResult::new(CropLabel::Healthy, 1.4, DEFAULT_CROP_NOTE);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.confidence_percent(), 100);
    }

    #[test]
    fn test_display_note_fallback() {
        let result = CropResult::new(CropLabel::Diseased, 0.9, "  ");
        assert_eq!(result.display_note(), MISSING_CROP_NOTE);
        assert_eq!(result.label.css_class(), "diseased");
    }

    #[test]
    fn test_wire_format() {
        let result = CropResult::new(CropLabel::Healthy, 0.5, "ok");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["class_label"], "Healthy");
        assert_eq!(json["confidence"], 0.5);
    }
}
