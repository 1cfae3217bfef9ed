//! Error handling for the browser front-end

use shared::AnalysisError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Front-end error types
#[derive(Error, Debug)]
pub enum UiError {
    #[error("Missing required control `{selector}`")]
    MissingElement { selector: String },

    #[error("Control `{selector}` is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    #[error("No browser window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result type alias for DOM operations
pub type UiResult<T> = Result<T, UiError>;
