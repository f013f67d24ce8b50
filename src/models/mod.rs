//! Shared types used across all modules.
//!
//! This module defines the core data structures for changed files,
//! issues, reports, and requests. Other modules import from here
//! rather than reaching into each other's internals.

pub mod diff;
pub mod file;
pub mod issue;
pub mod report;
pub mod request;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use file::ChangedFile;
pub use issue::{Issue, IssueKind, Severity};
pub use report::{InlineComment, Report};
pub use request::ReviewRequest;

/// Supported LLM provider backends for the optional summary paraphrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderName {
    #[default]
    Anthropic,
    #[serde(rename = "openai")]
    OpenAI,
    Gemini,
    /// Any OpenAI-compatible API (e.g. Ollama, Together, local servers).
    #[serde(rename = "openai-compatible")]
    OpenAICompatible,
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderName::Anthropic => write!(f, "anthropic"),
            ProviderName::OpenAI => write!(f, "openai"),
            ProviderName::Gemini => write!(f, "gemini"),
            ProviderName::OpenAICompatible => write!(f, "openai-compatible"),
        }
    }
}

impl std::str::FromStr for ProviderName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(ProviderName::Anthropic),
            "openai" => Ok(ProviderName::OpenAI),
            "gemini" => Ok(ProviderName::Gemini),
            "openai-compatible" => Ok(ProviderName::OpenAICompatible),
            other => Err(format!(
                "unsupported provider: '{other}'. Supported: anthropic, openai, gemini, \
                 openai-compatible"
            )),
        }
    }
}

impl ProviderName {
    /// Returns the provider-specific environment variable name for the API key.
    ///
    /// These match the env var names used by rig-core's `from_env()` implementations.
    pub fn api_key_env_var(self) -> &'static str {
        match self {
            ProviderName::Anthropic => "ANTHROPIC_API_KEY",
            ProviderName::OpenAI | ProviderName::OpenAICompatible => "OPENAI_API_KEY",
            ProviderName::Gemini => "GEMINI_API_KEY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_name_display() {
        assert_eq!(ProviderName::Anthropic.to_string(), "anthropic");
        assert_eq!(ProviderName::OpenAI.to_string(), "openai");
        assert_eq!(ProviderName::Gemini.to_string(), "gemini");
        assert_eq!(
            ProviderName::OpenAICompatible.to_string(),
            "openai-compatible"
        );
    }

    #[test]
    fn provider_name_from_str_case_insensitive() {
        assert_eq!(
            "ANTHROPIC".parse::<ProviderName>().unwrap(),
            ProviderName::Anthropic
        );
        assert_eq!(
            "OpenAI".parse::<ProviderName>().unwrap(),
            ProviderName::OpenAI
        );
    }

    #[test]
    fn provider_name_from_str_invalid() {
        let err = "mistral".parse::<ProviderName>().unwrap_err();
        assert!(err.contains("unsupported provider"));
    }

    #[test]
    fn provider_name_api_key_env_var() {
        assert_eq!(
            ProviderName::Anthropic.api_key_env_var(),
            "ANTHROPIC_API_KEY"
        );
        assert_eq!(
            ProviderName::OpenAICompatible.api_key_env_var(),
            "OPENAI_API_KEY"
        );
    }

    #[test]
    fn provider_name_serde_roundtrip() {
        let json = serde_json::to_string(&ProviderName::OpenAICompatible).unwrap();
        assert_eq!(json, "\"openai-compatible\"");
        let back: ProviderName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProviderName::OpenAICompatible);
    }
}
