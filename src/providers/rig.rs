//! rig-core integration for LLM-backed summary paraphrasing.
//!
//! Uses rig-core's provider clients and Agent abstraction for
//! multi-provider support: Anthropic, OpenAI, Gemini, and any
//! OpenAI-compatible API.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers;

use crate::config::SummaryConfig;
use crate::models::{Issue, ProviderName};

use super::{Summarizer, SummarizerError};

/// Maximum tokens per paraphrase response. Summaries are a few
/// sentences; this is headroom, not a target.
const MAX_TOKENS: u64 = 1024;

const SYSTEM_PROMPT: &str = "You are a code review assistant. Rewrite the given review \
summary as two to four plain-English sentences for the PR author. Mention every issue \
category from the summary, keep the numeric score, and do not invent issues that are \
not listed.";

/// Build an agent from a rig-core client and prompt it.
///
/// Always sets `max_tokens`: all rig-core providers support it and
/// without it some (e.g. Gemini) default to a low limit that truncates
/// responses.
macro_rules! prompt_simple {
    ($client:expr, $model:expr, $user:expr, $label:expr) => {{
        let agent = $client
            .agent($model)
            .preamble(SYSTEM_PROMPT)
            .temperature(0.0)
            .max_tokens(MAX_TOKENS)
            .build();
        agent
            .prompt($user)
            .await
            .map_err(|e| SummarizerError::Api(format!("{} API error: {e}", $label)))
    }};
}

/// Create a rig-core client using the `Client::new(api_key)` convention.
macro_rules! new_client {
    ($provider_mod:path, $api_key:expr, $label:expr) => {{
        <$provider_mod>::new($api_key).map_err(|e| {
            SummarizerError::Api(format!("failed to create {} client: {e}", $label))
        })
    }};
}

/// rig-core based summarizer. The provider name in config selects
/// which rig-core client to use.
#[derive(Debug)]
pub struct RigSummarizer {
    config: SummaryConfig,
}

impl RigSummarizer {
    /// Create a new summarizer with the given configuration.
    pub fn new(config: SummaryConfig) -> Result<Self, SummarizerError> {
        if config.api_key.is_none() {
            return Err(SummarizerError::NotConfigured(format!(
                "no API key found for provider '{}'. Set {} or the provider-specific env var.",
                config.provider,
                crate::constants::ENV_SUMMARY_API_KEY,
            )));
        }
        Ok(Self { config })
    }

    fn api_key(&self) -> Result<&str, SummarizerError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| SummarizerError::NotConfigured("missing API key".to_string()))
    }

    /// Require `base_url` for OpenAI-compatible providers.
    fn require_base_url(&self) -> Result<&str, SummarizerError> {
        self.config.base_url.as_deref().ok_or_else(|| {
            SummarizerError::NotConfigured(
                "openai-compatible provider requires base_url to be set".to_string(),
            )
        })
    }

    async fn call_rig(&self, user_prompt: &str) -> Result<String, SummarizerError> {
        let api_key = self.api_key()?;
        let model = self.config.model.as_str();

        match self.config.provider {
            ProviderName::Anthropic => {
                let client: providers::anthropic::Client = providers::anthropic::Client::builder()
                    .api_key(api_key)
                    .build()
                    .map_err(|e| {
                        SummarizerError::Api(format!("failed to create Anthropic client: {e}"))
                    })?;
                prompt_simple!(client, model, user_prompt, "Anthropic")
            }
            ProviderName::OpenAI => {
                let mut builder = providers::openai::CompletionsClient::builder().api_key(api_key);
                if let Some(ref base_url) = self.config.base_url {
                    builder = builder.base_url(base_url);
                }
                let client: providers::openai::CompletionsClient =
                    builder.build().map_err(|e| {
                        SummarizerError::Api(format!("failed to create OpenAI client: {e}"))
                    })?;
                prompt_simple!(client, model, user_prompt, "OpenAI")
            }
            ProviderName::Gemini => {
                let client = new_client!(providers::gemini::Client, api_key, "Gemini")?;
                prompt_simple!(client, model, user_prompt, "Gemini")
            }
            ProviderName::OpenAICompatible => {
                let base_url = self.require_base_url()?;
                let client: providers::openai::CompletionsClient =
                    providers::openai::CompletionsClient::builder()
                        .api_key(api_key)
                        .base_url(base_url)
                        .build()
                        .map_err(|e| {
                            SummarizerError::Api(format!(
                                "failed to create OpenAI-compatible client: {e}"
                            ))
                        })?;
                prompt_simple!(client, model, user_prompt, "OpenAI-compatible")
            }
        }
    }
}

/// Build the user prompt from the templated summary, the issue list,
/// and the caller's optional question.
fn build_prompt(summary: &str, issues: &[Issue], query: Option<&str>) -> String {
    let issues_json = serde_json::to_string_pretty(issues).unwrap_or_else(|_| "[]".to_string());

    let mut prompt = format!(
        "## Review Summary\n\n{summary}\n\n## Issues\n\n```json\n{issues_json}\n```\n"
    );

    if let Some(query) = query {
        if !query.trim().is_empty() {
            prompt.push_str(&format!("\n## Caller Question\n\n{query}\n"));
        }
    }

    prompt
}

#[async_trait]
impl Summarizer for RigSummarizer {
    async fn paraphrase(
        &self,
        summary: &str,
        issues: &[Issue],
        query: Option<&str>,
    ) -> Result<String, SummarizerError> {
        let prompt = build_prompt(summary, issues, query);
        let response = self.call_rig(&prompt).await?;
        Ok(response.trim().to_string())
    }
}
