//! Browser console logging
//!
//! Installs a `tracing` registry whose events are written to the developer
//! console, one line per event, at the matching console level.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use wasm_bindgen::JsValue;

/// Filter used unless the page supplies its own
pub const DEFAULT_LOG_FILTER: &str = "shared=debug,agri_assistant_wasm=debug";

/// Install the console subscriber. A second call is a no-op.
pub fn init_logging(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer)
        .try_init()
        .is_err()
    {
        web_sys::console::warn_1(&JsValue::from_str("tracing subscriber already installed"));
    }
}

/// Forwards events to `console.*`
struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = ConsoleVisitor::default();
        event.record(&mut visitor);

        let line = format_line(
            metadata.level(),
            metadata.target(),
            &visitor.message,
            &visitor.fields,
        );
        let line = JsValue::from_str(&line);

        match *metadata.level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

#[derive(Default)]
struct ConsoleVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for ConsoleVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

/// `LEVEL target: message key=value ...`
fn format_line(level: &Level, target: &str, message: &str, fields: &[String]) -> String {
    let mut line = format!("{} {}: {}", level, target, message);
    for field in fields {
        line.push(' ');
        line.push_str(field);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(
            &Level::ERROR,
            "shared::pipeline",
            "Analysis failed",
            &["pipeline=soil".to_string(), "error=offline".to_string()],
        );
        assert_eq!(
            line,
            "ERROR shared::pipeline: Analysis failed pipeline=soil error=offline"
        );
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
