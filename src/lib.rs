//! DevToolset
//!
//! A localized directory of AI and digital marketing tools. The catalog is
//! read from JSON/JSONC content files and served two ways: as a
//! server-rendered website and as read-only MCP tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, path security, the server
//!   handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: content loading and search
//!   - **listing**: tool cards
//!   - **navigation**: navigation bar state and auth check
//!   - **site**: pages
//!   - **tools**: MCP tools
//!
//! # Example
//!
//! ```rust,no_run
//! use devtoolset::core::{CatalogServer, Config, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(CatalogServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{CatalogServer, Config, Error, Result};
