//! List categories tool definition.
//!
//! Returns the categories of one catalog index, in file order.

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

/// Which catalog to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CatalogIndex {
    /// AI tools (home page).
    Ai,
    /// Digital marketing tools.
    Digi,
}

impl CatalogIndex {
    /// Index file configured for this catalog.
    pub fn file_name(self, config: &Config) -> &str {
        match self {
            Self::Ai => &config.content.ai_index,
            Self::Digi => &config.content.digi_index,
        }
    }
}

/// Parameters for the list categories tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListCategoriesParams {
    /// Locale code ("en", "zh"). Defaults to the site's default locale.
    #[serde(default)]
    pub locale: Option<String>,

    /// Catalog to list: "ai" or "digi".
    pub index: CatalogIndex,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List categories tool - reads a catalog index.
pub struct CatalogListCategoriesTool;

impl CatalogListCategoriesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "catalog_list_categories";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the categories of the AI or digital marketing tool catalog. Returns name, src, description and link of each category, in display order.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(index = ?params.index))]
    pub fn execute(params: &ListCategoriesParams, config: &Config) -> CallToolResult {
        let locale = match resolve_locale(params.locale.as_deref(), config) {
            Ok(locale) => locale,
            Err(e) => return error_result(&e.to_string()),
        };

        let store = ContentStore::new(&config.content);
        match store.load_categories(locale, params.index.file_name(config)) {
            Ok(categories) => {
                info!("Listed {} categories ({})", categories.len(), locale);
                json_result(&categories)
            }
            Err(e) => error_result(&format!("Failed to load categories: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: ListCategoriesParams = parse_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &config)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListCategoriesParams>(),
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
                let params: ListCategoriesParams =
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

    #[test]
    fn test_list_categories_default_locale() {
        let (_dir, config) = catalog();
        let params = ListCategoriesParams {
            locale: None,
            index: CatalogIndex::Ai,
        };

        let result = CatalogListCategoriesTool::execute(&params, &config);
        assert!(!result.is_error.unwrap_or(false));
        assert!(text(&result).contains("\"link\": \"chat\""));
    }

    #[test]
    fn test_list_categories_locale() {
        let (_dir, config) = catalog();
        let params = ListCategoriesParams {
            locale: Some("zh".to_string()),
            index: CatalogIndex::Ai,
        };

        let result = CatalogListCategoriesTool::execute(&params, &config);
        assert!(text(&result).contains("聊天机器人"));
    }

    #[test]
    fn test_list_categories_missing_index() {
        let (_dir, config) = catalog();
        let params = ListCategoriesParams {
            locale: None,
            index: CatalogIndex::Digi,
        };

        let result = CatalogListCategoriesTool::execute(&params, &config);
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_list_categories_unknown_locale() {
        let (_dir, config) = catalog();
        let params = ListCategoriesParams {
            locale: Some("fr".to_string()),
            index: CatalogIndex::Ai,
        };

        let result = CatalogListCategoriesTool::execute(&params, &config);
        assert!(result.is_error.unwrap_or(false));
        assert!(text(&result).contains("fr"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_list_categories_http_handler_bad_index() {
        let (_dir, config) = catalog();
        let result = CatalogListCategoriesTool::http_handler(
            serde_json::json!({ "index": "video" }),
            Arc::new(config),
        );
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
