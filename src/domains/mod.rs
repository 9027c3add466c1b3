//! Domains module containing business logic organized by bounded contexts.
//!
//! - `catalog`: locales, content records, the content store and search
//! - `listing`: tool cards and listing markup
//! - `navigation`: the navigation bar controller and auth-status check
//! - `site`: routes, localized copy, layout and page composition
//! - `tools`: MCP tools over the catalog

pub mod catalog;
pub mod listing;
pub mod navigation;
pub mod site;
pub mod tools;
