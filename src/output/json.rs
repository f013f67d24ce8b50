//! JSON output renderer.
//!
//! Serializes the report exactly as the HTTP API would return it.

use crate::models::Report;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}
