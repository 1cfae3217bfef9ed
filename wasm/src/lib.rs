//! WebAssembly module for the AgriAI assistant page
//!
//! Provides client-side computation for:
//! - Crop health classification
//! - Pest detection
//! - Soil condition scoring
//! - Page effects (slider fill, smooth scrolling, navbar, sidebar)

use wasm_bindgen::prelude::*;

mod app;
mod dom;
mod effects;
mod error;
mod logging;
mod timer;
mod upload;
mod view;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

pub use error::{UiError, UiResult};

/// Initialize the WASM module
// Browser unit tests run without the assistant markup, so startup is not wired into them
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn init() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init_logging(logging::DEFAULT_LOG_FILTER);
    app::start_when_ready()?;
    Ok(())
}

/// Score soil readings, returning the result as JSON.
///
/// Readings above a nutrient's reference maximum saturate at 100; only NaN and
/// infinite readings are rejected.
#[wasm_bindgen(js_name = calculateSoilCondition)]
pub fn calculate_soil_condition(
    moisture: f64,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
) -> Result<String, JsValue> {
    let input = SoilInput::new(moisture, nitrogen, phosphorus, potassium);
    validate_finite_readings(&input).map_err(UiError::from)?;

    serde_json::to_string(&score_soil(&input))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize soil result: {}", e)))
}

/// Classify an overall soil score (0-100)
#[wasm_bindgen(js_name = classifySoilScore)]
pub fn classify_soil_score_js(score: f64) -> String {
    let score = if score.is_nan() { 0.0 } else { score.round().clamp(0.0, 100.0) };
    classify_soil_score(score as u8).to_string()
}

/// Confidence in 0..1 as a whole percentage
#[wasm_bindgen(js_name = confidencePercent)]
pub fn confidence_percent_js(confidence: f64) -> u32 {
    confidence_percent(confidence)
}

/// Fill percentage for a slider track
#[wasm_bindgen(js_name = sliderFill)]
pub fn slider_fill(value: f64, max: f64) -> f64 {
    slider_fill_percent(value, max)
}

/// Smoothly scroll to the section with the given id
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) -> Result<(), JsValue> {
    let document = app::document()?;
    effects::scroll_to_section(&document, section_id);
    Ok(())
}

/// Latest crop, pest and soil results as JSON, or `null` before startup
#[wasm_bindgen(js_name = latestAnalysis)]
pub fn latest_analysis() -> Result<Option<String>, JsValue> {
    app::latest_analysis()
        .map(|state| serde_json::to_string(&state))
        .transpose()
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize analysis: {}", e)))
}
