//! Unified diff handling for hosting-API `patch` payloads.

pub mod parser;

pub use parser::parse_patch;
