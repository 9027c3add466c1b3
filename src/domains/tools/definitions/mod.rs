//! Tool definitions module.
//!
//! Each tool is defined in its own file: params, `execute()`, the HTTP
//! handler, its `Tool` model and its rmcp route.

pub mod catalog;

pub use catalog::{
    CatalogIndex, CatalogListCategoriesTool, CatalogListToolsTool, CatalogSearchTool,
    ListCategoriesParams, ListToolsParams, SearchParams,
};
