//! App-wide constants.
//!
//! Centralises the service name, config paths, environment variable names,
//! and API defaults so a rename only requires changing this file.

/// Display name of the service (lowercase).
pub const APP_NAME: &str = "prlens";

/// Crate version, stamped by cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent sent on outgoing API requests. GitHub rejects requests
/// without one.
pub const USER_AGENT: &str = concat!("prlens/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.prlens.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".prlens.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "prlens";

/// Default GitHub REST API root.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Default bind address for `prlens serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_BIND: &str = "PRLENS_BIND";
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_GITHUB_API_URL: &str = "PRLENS_GITHUB_API_URL";
pub const ENV_SUMMARY_ENABLED: &str = "PRLENS_SUMMARY_ENABLED";
pub const ENV_SUMMARY_PROVIDER: &str = "PRLENS_SUMMARY_PROVIDER";
pub const ENV_SUMMARY_MODEL: &str = "PRLENS_SUMMARY_MODEL";
pub const ENV_SUMMARY_API_KEY: &str = "PRLENS_SUMMARY_API_KEY";
pub const ENV_SUMMARY_BASE_URL: &str = "PRLENS_SUMMARY_BASE_URL";
