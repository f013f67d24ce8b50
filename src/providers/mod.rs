//! Summarizer trait and LLM integration.
//!
//! Provides an abstraction layer over rig-core to decouple the
//! codebase from the specific LLM library. The pipeline never depends
//! on a summarizer being present; the templated summary is always the
//! fallback.

pub mod rig;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Issue;

/// Errors from the summarizer.
#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("LLM API error: {0}")]
    Api(String),

    #[error("summarizer not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM-backed summary paraphrasing.
///
/// Implementations receive the deterministic templated summary plus the
/// issue list and return a conversational rendition.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Paraphrase a templated summary in plain English.
    ///
    /// `query` is the caller's free-text question, when one was given.
    async fn paraphrase(
        &self,
        summary: &str,
        issues: &[Issue],
        query: Option<&str>,
    ) -> Result<String, SummarizerError>;
}
