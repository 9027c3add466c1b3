//! Common utilities shared across the catalog tools.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::core::config::Config;
use crate::domains::catalog::{CatalogError, Locale};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Default number of search hits.
pub fn default_limit() -> usize {
    20
}

/// Clamp a hit limit to 1-100.
pub fn validate_limit(limit: usize) -> usize {
    limit.clamp(1, 100)
}

/// The requested locale, or the configured default when none is given.
pub fn resolve_locale(code: Option<&str>, config: &Config) -> Result<Locale, CatalogError> {
    match code.map(str::trim) {
        Some(code) if !code.is_empty() => code.parse(),
        _ => Ok(config.content.default_locale),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result holding `value` as pretty JSON text.
pub fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Deserialize HTTP tool arguments into a params struct.
#[cfg(feature = "http")]
pub fn parse_arguments<T: serde::de::DeserializeOwned>(
    arguments: serde_json::Value,
) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Shape a tool result as a JSON-RPC `tools/call` result.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_limit() {
        assert_eq!(validate_limit(0), 1);
        assert_eq!(validate_limit(20), 20);
        assert_eq!(validate_limit(500), 100);
    }

    #[test]
    fn test_resolve_locale() {
        let config = Config::default();
        assert_eq!(resolve_locale(None, &config).unwrap(), Locale::En);
        assert_eq!(resolve_locale(Some(" "), &config).unwrap(), Locale::En);
        assert_eq!(resolve_locale(Some("zh"), &config).unwrap(), Locale::Zh);
        assert!(resolve_locale(Some("fr"), &config).is_err());
    }
}
