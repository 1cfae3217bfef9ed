//! Shared types and logic for the agriculture assistant
//!
//! This crate holds everything that does not touch the browser: the analysis
//! models, soil scoring, validation, configuration, the provider seam and the
//! pipeline runner. The `wasm` crate renders it into the page.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod provider;
pub mod types;
pub mod validation;

pub use self::config::*;
pub use error::*;
pub use models::*;
pub use pipeline::*;
pub use provider::*;
pub use types::*;
pub use validation::*;
