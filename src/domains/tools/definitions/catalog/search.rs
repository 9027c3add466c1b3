//! Catalog search tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{default_limit, error_result, json_result, resolve_locale, validate_limit};
use crate::core::config::Config;
use crate::domains::catalog::{ContentStore, search_tools};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the catalog search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Locale code ("en", "zh"). Defaults to the site's default locale.
    #[serde(default)]
    pub locale: Option<String>,

    /// Case-insensitive text matched against tool name, description and tags.
    pub query: String,

    /// Maximum number of hits (1-100, default 20).
    #[serde(default = "default_limit")]
    pub limit: usize,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Catalog search tool - finds tools across both catalogs.
pub struct CatalogSearchTool;

impl CatalogSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "catalog_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search both tool catalogs by name, description or tag. Returns each matching tool once, with the category it was found in, in catalog order.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query))]
    pub fn execute(params: &SearchParams, config: &Config) -> CallToolResult {
        if params.query.trim().is_empty() {
            return error_result("Query must not be empty");
        }

        let locale = match resolve_locale(params.locale.as_deref(), config) {
            Ok(locale) => locale,
            Err(e) => return error_result(&e.to_string()),
        };

        let store = ContentStore::new(&config.content);
        let indexes = config.content.indexes();
        let limit = validate_limit(params.limit);

        match search_tools(&store, locale, &indexes, &params.query, Some(limit)) {
            Ok(hits) => {
                info!("Search '{}' matched {} tools", params.query, hits.len());
                json_result(&hits)
            }
            Err(e) => error_result(&format!("Search failed: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: SearchParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &config)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: SearchParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::testing::{catalog, text};
    use super::*;

    fn params(query: &str, limit: usize) -> SearchParams {
        SearchParams {
            locale: None,
            query: query.to_string(),
            limit,
        }
    }

    #[test]
    fn test_search_matches_tags_case_insensitively() {
        let (_dir, config) = catalog();
        let result = CatalogSearchTool::execute(&params("CHAT", 20), &config);
        assert!(!result.is_error.unwrap_or(false));

        let text = text(&result);
        assert!(text.contains("ChatGPT"));
        assert!(text.contains("Claude"));
        assert!(text.contains("\"category_link\": \"chat\""));
    }

    #[test]
    fn test_search_limit() {
        let (_dir, config) = catalog();
        let result = CatalogSearchTool::execute(&params("chat", 1), &config);
        let text = text(&result);
        assert!(text.contains("ChatGPT"));
        assert!(!text.contains("Claude"));
    }

    #[test]
    fn test_search_blank_query() {
        let (_dir, config) = catalog();
        let result = CatalogSearchTool::execute(&params("   ", 20), &config);
        assert!(result.is_error.unwrap_or(false));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_search_http_handler_default_limit() {
        let (_dir, config) = catalog();
        let result = CatalogSearchTool::http_handler(
            serde_json::json!({ "query": "writing" }),
            Arc::new(config),
        )
        .unwrap();
        assert_eq!(result["isError"], false);
    }
}
