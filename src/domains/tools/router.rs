//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{CatalogListCategoriesTool, CatalogListToolsTool, CatalogSearchTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CatalogListCategoriesTool::create_route(config.clone()))
        .with_route(CatalogListToolsTool::create_route(config.clone()))
        .with_route(CatalogSearchTool::create_route(config))
}
