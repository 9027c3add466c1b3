//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::config::env_var;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport: MCP tools only, no website.
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP server: the website plus MCP JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    #[cfg(feature = "http")]
    fn default() -> Self {
        Self::Http(HttpConfig::default())
    }

    #[cfg(all(not(feature = "http"), feature = "stdio"))]
    fn default() -> Self {
        Self::Stdio
    }
}

#[cfg(not(any(feature = "stdio", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio or http");

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Create a STDIO transport config.
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from `DEVTOOLSET_` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Build the config from a variable lookup (keys without prefix).
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let transport = get("TRANSPORT").unwrap_or_default().to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            "http" | "" => {
                let defaults = HttpConfig::default();
                let port = match get("HTTP_PORT").map(|p| p.parse::<u16>()) {
                    Some(Ok(port)) => port,
                    Some(Err(_)) => {
                        warn!("Ignoring invalid DEVTOOLSET_HTTP_PORT");
                        defaults.port
                    }
                    None => defaults.port,
                };
                let host = get("HTTP_HOST").unwrap_or(defaults.host);
                let rpc_path = get("HTTP_PATH").unwrap_or(defaults.rpc_path);
                let enable_cors = get("HTTP_CORS")
                    .map(|v| v.to_lowercase() != "false" && v != "0")
                    .unwrap_or(defaults.enable_cors);
                Self::Http(HttpConfig {
                    port,
                    host,
                    rpc_path,
                    enable_cors,
                })
            }
            other => {
                if !other.is_empty() {
                    warn!("Unknown DEVTOOLSET_TRANSPORT '{}', using default", other);
                }
                Self::default()
            }
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (MCP tools only)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!(
                "HTTP on {}:{} (site at /, MCP at {})",
                cfg.host, cfg.port, cfg.rpc_path
            ),
        }
    }

    /// Check if this transport is the STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}
