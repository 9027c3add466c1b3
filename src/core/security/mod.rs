// Security module for content path resolution
//
// Content identifiers come from index files and from request input. This
// module keeps every resolved file inside the configured content root.

pub mod content_path;

pub use content_path::{PathSecurityError, resolve_content_path};
