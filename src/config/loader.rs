//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.prlens.toml` in the working directory
//! 4. `~/.config/prlens/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::models::ProviderName;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub github: GithubConfig,
    pub rules: RulesConfig,
    pub summary: SummaryConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address for `prlens serve`.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: constants::DEFAULT_BIND.to_string(),
        }
    }
}

/// GitHub API client configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Personal access token. Unauthenticated requests work for public
    /// repositories but hit a much lower rate limit.
    pub token: Option<String>,
    /// API root, overridable for GitHub Enterprise installs.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: constants::GITHUB_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Tunable heuristic constants.
///
/// These adjust rule sensitivity without changing the algorithm's shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Branch-keyword count above which a hunk is flagged as complex.
    pub complexity_threshold: usize,
    /// Maximum line length before a style violation is raised.
    pub max_line_length: usize,
    /// How many added lines after a definition may hold its docstring.
    pub docstring_lookahead: usize,
    /// Additional secret regexes merged with the built-in patterns.
    pub extra_secret_patterns: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: 10,
            max_line_length: 120,
            docstring_lookahead: 3,
            extra_secret_patterns: Vec::new(),
        }
    }
}

/// LLM summarizer configuration. Disabled by default; the templated
/// summary is always available as fallback.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub enabled: bool,
    pub provider: ProviderName,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl std::fmt::Debug for SummaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryConfig")
            .field("enabled", &self.enabled)
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: ProviderName::Anthropic,
            model: "claude-sonnet-4-20250514".to_string(),
            api_key: None,
            base_url: None,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, local config, then applies environment
    /// variable overrides.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = local_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// non-default values).
    fn merge(&mut self, other: Config) {
        // Server settings
        if other.server.bind != ServerConfig::default().bind {
            self.server.bind = other.server.bind;
        }

        // GitHub settings
        let default_github = GithubConfig::default();
        if other.github.token.is_some() {
            self.github.token = other.github.token;
        }
        if other.github.api_url != default_github.api_url {
            self.github.api_url = other.github.api_url;
        }
        if other.github.timeout_secs != default_github.timeout_secs {
            self.github.timeout_secs = other.github.timeout_secs;
        }

        // Rule tunables
        let default_rules = RulesConfig::default();
        if other.rules.complexity_threshold != default_rules.complexity_threshold {
            self.rules.complexity_threshold = other.rules.complexity_threshold;
        }
        if other.rules.max_line_length != default_rules.max_line_length {
            self.rules.max_line_length = other.rules.max_line_length;
        }
        if other.rules.docstring_lookahead != default_rules.docstring_lookahead {
            self.rules.docstring_lookahead = other.rules.docstring_lookahead;
        }
        if !other.rules.extra_secret_patterns.is_empty() {
            self.rules.extra_secret_patterns = other.rules.extra_secret_patterns;
        }

        // Summarizer settings
        let default_summary = SummaryConfig::default();
        if other.summary.enabled {
            self.summary.enabled = true;
        }
        if other.summary.provider != default_summary.provider {
            self.summary.provider = other.summary.provider;
        }
        if other.summary.model != default_summary.model {
            self.summary.model = other.summary.model;
        }
        if other.summary.api_key.is_some() {
            self.summary.api_key = other.summary.api_key;
        }
        if other.summary.base_url.is_some() {
            self.summary.base_url = other.summary.base_url;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_BIND) {
            self.server.bind = val;
        }
        if let Ok(val) = env.var(constants::ENV_GITHUB_TOKEN) {
            self.github.token = Some(val);
        }
        if let Ok(val) = env.var(constants::ENV_GITHUB_API_URL) {
            self.github.api_url = val;
        }

        if let Ok(val) = env.var(constants::ENV_SUMMARY_ENABLED) {
            match val.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => self.summary.enabled = true,
                "false" | "0" | "no" | "off" => self.summary.enabled = false,
                _ => tracing::warn!(
                    "ignoring invalid {} value: {val}",
                    constants::ENV_SUMMARY_ENABLED
                ),
            }
        }
        if let Ok(val) = env.var(constants::ENV_SUMMARY_PROVIDER) {
            if let Ok(name) = val.parse::<ProviderName>() {
                self.summary.provider = name;
            } else {
                tracing::warn!(
                    "ignoring invalid {} value: {val}",
                    constants::ENV_SUMMARY_PROVIDER
                );
            }
        }
        if let Ok(val) = env.var(constants::ENV_SUMMARY_MODEL) {
            self.summary.model = val;
        }
        if let Ok(val) = env.var(constants::ENV_SUMMARY_BASE_URL) {
            self.summary.base_url = Some(val);
        }

        // Provider-specific API key resolution
        let api_key = env
            .var(constants::ENV_SUMMARY_API_KEY)
            .or_else(|_| env.var(self.summary.provider.api_key_env_var()))
            .ok();
        if api_key.is_some() {
            self.summary.api_key = api_key;
        }
    }
}
