//! Read-only tools over the tool catalog.

pub mod common;
pub mod list_categories;
pub mod list_tools;
pub mod search;

pub use list_categories::{CatalogIndex, CatalogListCategoriesTool, ListCategoriesParams};
pub use list_tools::{CatalogListToolsTool, ListToolsParams};
pub use search::{CatalogSearchTool, SearchParams};
