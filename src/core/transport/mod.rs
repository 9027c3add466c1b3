//! Transport layer.
//!
//! - **HTTP**: the website plus MCP JSON-RPC over POST - feature: `http`
//! - **STDIO**: MCP tools over standard input/output - feature: `stdio`
//!
//! # Feature Flags
//!
//! - `http` (default): adds axum, tower, tower-http
//! - `stdio`: STDIO transport - no extra dependencies
//! - `all`: both

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
