//! Output renderers for the CLI: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::Report;

/// Trait for rendering a review report to a string.
pub trait OutputRenderer {
    fn render(&self, report: &Report) -> String;
}
