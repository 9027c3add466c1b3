//! List tools tool definition.
//!
//! Returns the tools of one category file, in file order.

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

use super::common::{error_result, json_result, resolve_locale};
use crate::core::config::Config;
use crate::domains::catalog::ContentStore;

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list tools tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListToolsParams {
    /// Locale code ("en", "zh"). Defaults to the site's default locale.
    #[serde(default)]
    pub locale: Option<String>,

    /// Category file identifier, the `src` of a category.
    pub src: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List tools tool - reads one category's tool file.
pub struct CatalogListToolsTool;

impl CatalogListToolsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "catalog_list_tools";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the tools of a category, identified by the category's src. Returns name, description, url, icon_url, tags and featured of each tool.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(src = %params.src))]
    pub fn execute(params: &ListToolsParams, config: &Config) -> CallToolResult {
        let locale = match resolve_locale(params.locale.as_deref(), config) {
            Ok(locale) => locale,
            Err(e) => return error_result(&e.to_string()),
        };

        let store = ContentStore::new(&config.content);
        match store.load_tools(&params.src, locale) {
            Ok(tools) => {
                info!("Listed {} tools of '{}' ({})", tools.len(), params.src, locale);
                json_result(&tools)
            }
            Err(e) => error_result(&format!("Failed to load tools: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: ListToolsParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &config)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListToolsParams>(),
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
                let params: ListToolsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
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

    fn params(src: &str, locale: Option<&str>) -> ListToolsParams {
        ListToolsParams {
            locale: locale.map(str::to_string),
            src: src.to_string(),
        }
    }

    #[test]
    fn test_list_tools_in_file_order() {
        let (_dir, config) = catalog();
        let result = CatalogListToolsTool::execute(&params("ai-chat", None), &config);
        assert!(!result.is_error.unwrap_or(false));

        let text = text(&result);
        let chatgpt = text.find("ChatGPT").unwrap();
        let claude = text.find("Claude").unwrap();
        assert!(chatgpt < claude);
    }

    #[test]
    fn test_list_tools_missing_locale_file() {
        let (_dir, config) = catalog();
        let result = CatalogListToolsTool::execute(&params("ai-chat", Some("zh")), &config);
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_list_tools_rejects_traversal() {
        let (_dir, config) = catalog();
        let result = CatalogListToolsTool::execute(&params("../../etc/passwd", None), &config);
        assert!(result.is_error.unwrap_or(false));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_list_tools_http_handler() {
        let (_dir, config) = catalog();
        let result = CatalogListToolsTool::http_handler(
            serde_json::json!({ "src": "ai-chat" }),
            Arc::new(config),
        )
        .unwrap();
        assert_eq!(result["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_list_tools_http_handler_missing_param() {
        let (_dir, config) = catalog();
        let result = CatalogListToolsTool::http_handler(serde_json::json!({}), Arc::new(config));
        assert!(result.is_err());
    }
}
