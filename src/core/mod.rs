//! Core module containing shared infrastructure components.
//!
//! Error handling, configuration, content path security, the server handler
//! and the transport layer.

pub mod config;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{PathSecurityError, resolve_content_path};
pub use server::CatalogServer;
pub use transport::{TransportConfig, TransportService};
