//! Configuration for the assistant page
//!
//! Layered the same way everywhere:
//! 1. Default values in code
//! 2. An optional JSON document (the page embeds it in `#agri-config`)

use std::time::Duration;

use config::{File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::error::AnalysisResult;
use crate::types::PipelineKind;

/// Main configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AssistantConfig {
    /// Artificial compute delay per pipeline
    pub delays: PipelineDelays,

    /// Presentation timings and thresholds
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Validate)]
pub struct PipelineDelays {
    #[validate(range(max = 60000))]
    pub crop_ms: u32,

    #[validate(range(max = 60000))]
    pub pest_ms: u32,

    #[validate(range(max = 60000))]
    pub soil_ms: u32,
}

impl PipelineDelays {
    pub fn for_pipeline(&self, kind: PipelineKind) -> Duration {
        let ms = match kind {
            PipelineKind::Crop => self.crop_ms,
            PipelineKind::Pest => self.pest_ms,
            PipelineKind::Soil => self.soil_ms,
        };
        Duration::from_millis(u64::from(ms))
    }

    /// No artificial delay at all
    pub fn none() -> Self {
        Self {
            crop_ms: 0,
            pest_ms: 0,
            soil_ms: 0,
        }
    }
}

impl Default for PipelineDelays {
    fn default() -> Self {
        Self {
            crop_ms: 2000,
            pest_ms: 2500,
            soil_ms: 1500,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Validate)]
pub struct UiConfig {
    /// How long an animation class stays on a revealed element
    #[validate(range(max = 10000))]
    pub animation_ms: u32,

    /// Delay before the soil progress bars fill
    #[validate(range(max = 10000))]
    pub progress_fill_ms: u32,

    /// Scroll offset after which the navbar switches to its solid style
    pub navbar_threshold_px: f64,

    /// Visible fraction at which a card fades in
    #[validate(range(min = 0.0, max = 1.0))]
    pub reveal_threshold: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_ms: 500,
            progress_fill_ms: 300,
            navbar_threshold_px: 100.0,
            reveal_threshold: 0.1,
        }
    }
}

impl AssistantConfig {
    /// Load configuration from defaults and an optional JSON override
    pub fn load(overrides: Option<&str>) -> AnalysisResult<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("delays.crop_ms", defaults.delays.crop_ms)?
            .set_default("delays.pest_ms", defaults.delays.pest_ms)?
            .set_default("delays.soil_ms", defaults.delays.soil_ms)?
            .set_default("ui.animation_ms", defaults.ui.animation_ms)?
            .set_default("ui.progress_fill_ms", defaults.ui.progress_fill_ms)?
            .set_default("ui.navbar_threshold_px", defaults.ui.navbar_threshold_px)?
            .set_default("ui.reveal_threshold", defaults.ui.reveal_threshold)?;

        if let Some(json) = overrides.filter(|s| !s.trim().is_empty()) {
            builder = builder.add_source(File::from_str(json, FileFormat::Json));
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.delays.validate()?;
        config.ui.validate()?;

        tracing::debug!(?config, "Loaded assistant configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_defaults_without_overrides() {
        let config = AssistantConfig::load(None).unwrap();
        assert_eq!(config, AssistantConfig::default());
        assert_eq!(
            config.delays.for_pipeline(PipelineKind::Pest),
            Duration::from_millis(2500)
        );
    }

    #[test]
    fn test_partial_override() {
        let config = AssistantConfig::load(Some(r#"{"delays": {"crop_ms": 10}}"#)).unwrap();
        assert_eq!(config.delays.crop_ms, 10);
        assert_eq!(config.delays.soil_ms, 1500);
        assert_eq!(config.ui.animation_ms, 500);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = AssistantConfig::load(Some(r#"{"ui": {"reveal_threshold": 2.5}}"#)).unwrap_err();
        assert!(matches!(err, AnalysisError::Configuration(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(AssistantConfig::load(Some("{not json")).is_err());
    }
}
