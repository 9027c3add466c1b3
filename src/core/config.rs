//! Configuration management for the catalog server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use crate::domains::catalog::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Prefix shared by every environment variable the server reads.
pub const ENV_PREFIX: &str = "DEVTOOLSET_";

/// Main configuration structure for the catalog server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Where and how catalog content is read.
    pub content: ContentConfig,

    /// Card rendering options.
    pub listing: ListingConfig,

    /// Navigation bar and auth-status options.
    pub navigation: NavigationConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Site name shown in the header and reported to MCP clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// What a page does when a content file or locale section is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingContentPolicy {
    /// Log a warning and render an empty-state section.
    #[default]
    Empty,

    /// Answer the page with a 404 error.
    Error,
}

impl MissingContentPolicy {
    /// Parse a policy name, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "empty" => Some(Self::Empty),
            "error" | "fail" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Content store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Root directory holding every content file.
    pub root: PathBuf,

    /// Locale used when a request carries no locale prefix.
    pub default_locale: Locale,

    /// Category index of the AI tools catalog (home page).
    pub ai_index: String,

    /// Category index of the digital tools catalog.
    pub digi_index: String,

    /// Behavior on missing content.
    pub missing_content: MissingContentPolicy,

    /// Whether content paths may traverse symlinks that stay inside `root`.
    pub allow_symlinks: bool,
}

impl ContentConfig {
    /// Every category index, in the order search walks them.
    pub fn indexes(&self) -> [&str; 2] {
        [self.ai_index.as_str(), self.digi_index.as_str()]
    }
}

/// Tool card rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Value of the `utm_source` parameter added to outbound links.
    pub utm_source: String,

    /// Base URL of the favicon lookup service.
    pub favicon_service: String,
}

/// Navigation configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Absolute URL of the auth-status endpoint. `None` means every
    /// visitor is treated as anonymous.
    pub auth_endpoint: Option<String>,

    /// How long a page render waits for the auth check before rendering
    /// the auth fragment in its loading state.
    #[serde(with = "duration_ms")]
    pub auth_wait: Duration,

    /// Repository link shown in the header.
    pub github_url: String,
}

/// Custom Debug implementation to keep query strings of the auth endpoint
/// out of logs.
impl std::fmt::Debug for NavigationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationConfig")
            .field(
                "auth_endpoint",
                &self
                    .auth_endpoint
                    .as_deref()
                    .map(|url| url.split('?').next().unwrap_or(url)),
            )
            .field("auth_wait", &self.auth_wait)
            .field("github_url", &self.github_url)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content"),
            default_locale: Locale::default(),
            ai_index: "ai-tools.jsonc".to_string(),
            digi_index: "digi-tools.jsonc".to_string(),
            missing_content: MissingContentPolicy::default(),
            allow_symlinks: true,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            utm_source: "devtoolset.net".to_string(),
            favicon_service: "https://favicon.im".to_string(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: None,
            auth_wait: Duration::from_millis(300),
            github_url: "https://github.com/iamcorey/devtoolset".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "DevToolset".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            content: ContentConfig::default(),
            listing: ListingConfig::default(),
            navigation: NavigationConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

/// Read `DEVTOOLSET_{key}`.
pub(crate) fn env_var(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `DEVTOOLSET_`, for example
    /// `DEVTOOLSET_CONTENT_DIR` or `DEVTOOLSET_LOG_LEVEL`. Invalid values are
    /// reported and replaced by their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(name) = env_var("SITE_NAME") {
            config.server.name = name;
        }

        if let Some(level) = env_var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(dir) = env_var("CONTENT_DIR") {
            config.content.root = PathBuf::from(dir);
        }
        info!("Content root: {:?}", config.content.root);

        if let Some(code) = env_var("DEFAULT_LOCALE") {
            match code.parse::<Locale>() {
                Ok(locale) => config.content.default_locale = locale,
                Err(e) => warn!("Ignoring DEVTOOLSET_DEFAULT_LOCALE: {}", e),
            }
        }

        if let Some(index) = env_var("AI_INDEX") {
            config.content.ai_index = index;
        }

        if let Some(index) = env_var("DIGI_INDEX") {
            config.content.digi_index = index;
        }

        if let Some(policy) = env_var("MISSING_CONTENT") {
            match MissingContentPolicy::parse(&policy) {
                Some(policy) => config.content.missing_content = policy,
                None => warn!(
                    "Unknown DEVTOOLSET_MISSING_CONTENT '{}', expected 'empty' or 'error'",
                    policy
                ),
            }
        }

        if let Some(allow) = env_var("ALLOW_SYMLINKS") {
            config.content.allow_symlinks = allow.parse().unwrap_or(true);
        }

        if let Some(source) = env_var("UTM_SOURCE") {
            config.listing.utm_source = source;
        }

        if let Some(service) = env_var("FAVICON_SERVICE") {
            config.listing.favicon_service = service.trim_end_matches('/').to_string();
        }

        if let Some(endpoint) = env_var("AUTH_ENDPOINT") {
            match parse_auth_endpoint(&endpoint) {
                Ok(url) => {
                    config.navigation.auth_endpoint = Some(url);
                    info!("Auth status endpoint configured");
                }
                Err(reason) => warn!(
                    "Ignoring DEVTOOLSET_AUTH_ENDPOINT: {} - every visitor is rendered as anonymous",
                    reason
                ),
            }
        } else {
            warn!("DEVTOOLSET_AUTH_ENDPOINT not set - every visitor is rendered as anonymous");
        }

        if let Some(wait) = env_var("AUTH_WAIT_MS") {
            match wait.parse::<u64>() {
                Ok(ms) => config.navigation.auth_wait = Duration::from_millis(ms),
                Err(_) => warn!("Ignoring DEVTOOLSET_AUTH_WAIT_MS '{}': not a number", wait),
            }
        }

        if let Some(url) = env_var("GITHUB_URL") {
            config.navigation.github_url = url;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

/// Validate the auth endpoint: an absolute http(s) URL.
fn parse_auth_endpoint(value: &str) -> Result<String, String> {
    let url = reqwest::Url::parse(value.trim())
        .map_err(|e| format!("'{value}' is not an absolute URL ({e})"))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        scheme => Err(format!("unsupported scheme '{scheme}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_content_dir_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DEVTOOLSET_CONTENT_DIR", "/srv/devtoolset/data");
        }
        let config = Config::from_env();
        assert_eq!(config.content.root, PathBuf::from("/srv/devtoolset/data"));
        unsafe {
            std::env::remove_var("DEVTOOLSET_CONTENT_DIR");
        }
    }

    #[test]
    fn test_missing_content_policy_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DEVTOOLSET_MISSING_CONTENT", "error");
        }
        let config = Config::from_env();
        assert_eq!(config.content.missing_content, MissingContentPolicy::Error);

        unsafe {
            std::env::set_var("DEVTOOLSET_MISSING_CONTENT", "sometimes");
        }
        let config = Config::from_env();
        assert_eq!(config.content.missing_content, MissingContentPolicy::Empty);
        unsafe {
            std::env::remove_var("DEVTOOLSET_MISSING_CONTENT");
        }
    }

    #[test]
    fn test_invalid_locale_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DEVTOOLSET_DEFAULT_LOCALE", "xx");
        }
        let config = Config::from_env();
        assert_eq!(config.content.default_locale, Locale::En);
        unsafe {
            std::env::remove_var("DEVTOOLSET_DEFAULT_LOCALE");
        }
    }

    #[test]
    fn test_auth_wait_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DEVTOOLSET_AUTH_WAIT_MS", "1250");
        }
        let config = Config::from_env();
        assert_eq!(config.navigation.auth_wait, Duration::from_millis(1250));
        unsafe {
            std::env::remove_var("DEVTOOLSET_AUTH_WAIT_MS");
        }
    }

    #[test]
    fn test_auth_endpoint_query_redacted_in_debug() {
        let nav = NavigationConfig {
            auth_endpoint: Some("https://example.com/api/check-auth?token=secret".to_string()),
            ..NavigationConfig::default()
        };
        let debug_str = format!("{:?}", nav);
        assert!(debug_str.contains("https://example.com/api/check-auth"));
        assert!(!debug_str.contains("secret"));
    }

    #[test]
    fn test_default_indexes() {
        let config = Config::default();
        assert_eq!(
            config.content.indexes(),
            ["ai-tools.jsonc", "digi-tools.jsonc"]
        );
        assert_eq!(config.listing.utm_source, "devtoolset.net");
    }

    #[test]
    fn test_parse_auth_endpoint() {
        assert_eq!(
            parse_auth_endpoint("https://devtoolset.net/api/check-auth").unwrap(),
            "https://devtoolset.net/api/check-auth"
        );
        assert!(parse_auth_endpoint("/api/check-auth").is_err());
        assert!(parse_auth_endpoint("ftp://devtoolset.net/check").is_err());
    }

    #[test]
    fn test_relative_auth_endpoint_dropped() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DEVTOOLSET_AUTH_ENDPOINT", "/api/check-auth");
        }
        let config = Config::from_env();
        assert_eq!(config.navigation.auth_endpoint, None);

        unsafe {
            std::env::set_var("DEVTOOLSET_AUTH_ENDPOINT", "http://127.0.0.1:3000/api/check-auth");
        }
        let config = Config::from_env();
        assert_eq!(
            config.navigation.auth_endpoint.as_deref(),
            Some("http://127.0.0.1:3000/api/check-auth")
        );
        unsafe {
            std::env::remove_var("DEVTOOLSET_AUTH_ENDPOINT");
        }
    }
}
