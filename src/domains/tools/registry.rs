//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{CatalogListCategoriesTool, CatalogListToolsTool, CatalogSearchTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CatalogListCategoriesTool::NAME,
            CatalogListToolsTool::NAME,
            CatalogSearchTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both transports list tools from here.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CatalogListCategoriesTool::to_tool(),
            CatalogListToolsTool::to_tool(),
            CatalogSearchTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            CatalogListCategoriesTool::NAME => {
                CatalogListCategoriesTool::http_handler(arguments, self.config.clone())
            }
            CatalogListToolsTool::NAME => {
                CatalogListToolsTool::http_handler(arguments, self.config.clone())
            }
            CatalogSearchTool::NAME => CatalogSearchTool::http_handler(arguments, self.config.clone()),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"catalog_list_categories"));
        assert!(names.contains(&"catalog_list_tools"));
        assert!(names.contains(&"catalog_search"));
    }

    #[test]
    fn test_registry_tools_match_names() {
        let registry = ToolRegistry::new(test_config());
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_reports_tool_failure_as_result() {
        // missing content is a tool-level error, not a dispatch error
        let registry = ToolRegistry::new(test_config());
        let result = registry
            .call_tool("catalog_list_tools", serde_json::json!({ "src": "nothing-here" }))
            .unwrap();
        assert_eq!(result["isError"], true);
    }
}
