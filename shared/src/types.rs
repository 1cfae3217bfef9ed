//! Common types used across the assistant

use serde::{Deserialize, Serialize};

/// The three analysis pipelines offered on the page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PipelineKind {
    Crop,
    Pest,
    Soil,
}

impl PipelineKind {
    /// Identifier used as the element id prefix (`crop-loading`, `pest-results`, ...)
    pub fn id(&self) -> &'static str {
        match self {
            PipelineKind::Crop => "crop",
            PipelineKind::Pest => "pest",
            PipelineKind::Soil => "soil",
        }
    }

    /// Element id of this pipeline's busy indicator
    pub fn loading_id(&self) -> String {
        format!("{}-loading", self.id())
    }

    /// Generic notice shown when a run of this pipeline fails
    pub fn failure_notice(&self) -> &'static str {
        match self {
            PipelineKind::Crop => "Failed to analyze crop health. Please try again.",
            PipelineKind::Pest => "Failed to detect pests. Please try again.",
            PipelineKind::Soil => "Failed to analyze soil condition. Please try again.",
        }
    }
}

impl std::fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Metadata of a user-selected image. The content is never examined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, size_bytes: u64, mime_type: Option<String>) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
            mime_type: mime_type.filter(|m| !m.is_empty()),
        }
    }
}

/// Clamp a probability-like value into `[0, 1]`. NaN becomes 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Round a confidence in `[0, 1]` to a whole percentage
pub fn confidence_percent(confidence: f64) -> u32 {
    // Half-up rounding; identical to `f64::round` once the value is non-negative
    (clamp_unit(confidence) * 100.0).round() as u32
}
