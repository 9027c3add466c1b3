//! Catalog domain module.
//!
//! Loads categories and tools from the locale content store. This is the
//! data layer every page and MCP tool reads from.
//!
//! ## Architecture
//!
//! - `locale.rs` - Typed locale registry
//! - `model.rs` - `Category` and `Tool` records
//! - `store.rs` - File lookup, lenient JSON parsing, per-locale sections
//! - `search.rs` - Substring search across categories
//! - `error.rs` - Catalog error types

mod error;
mod locale;
mod model;
mod search;
mod store;

pub use error::CatalogError;
pub use locale::Locale;
pub use model::{Category, Tool};
pub use search::{SearchHit, search_tools};
pub use store::ContentStore;
