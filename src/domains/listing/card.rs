//! Tool card view-model.
//!
//! All optional-field fallbacks are decided here, so the markup in
//! `render.rs` never branches on raw content.

use crate::core::config::ListingConfig;
use crate::domains::catalog::Tool;

/// Maximum number of tag badges on a card.
pub const MAX_TAGS: usize = 3;

/// Where a card's icon comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// `icon_url` from the content file.
    Explicit(String),
    /// Derived from the tool url through the favicon service.
    Favicon(String),
}

impl IconSource {
    /// Resolve the icon of `tool`.
    pub fn for_tool(tool: &Tool, favicon_service: &str) -> Self {
        match tool.icon_url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(url) => Self::Explicit(url.to_string()),
            None => Self::Favicon(favicon_url(favicon_service, &tool.url)),
        }
    }

    pub fn src(&self) -> &str {
        match self {
            Self::Explicit(url) | Self::Favicon(url) => url,
        }
    }
}

/// Everything a card shows, with fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCard<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub icon: IconSource,
    /// `None` when the tool has no tags; the tag block is omitted.
    pub tags: Option<&'a [String]>,
    pub featured: bool,
    pub href: String,
}

impl<'a> ToolCard<'a> {
    pub fn new(tool: &'a Tool, config: &ListingConfig) -> Self {
        Self {
            name: &tool.name,
            description: &tool.description,
            icon: IconSource::for_tool(tool, &config.favicon_service),
            tags: display_tags(tool.tags.as_deref()),
            featured: tool.is_featured(),
            href: outbound_url(&tool.url, &config.utm_source),
        }
    }
}

/// Favicon lookup URL for a tool url, e.g.
/// `https://favicon.im/https://example.com?larger=true`.
pub fn favicon_url(service: &str, tool_url: &str) -> String {
    format!("{}/{}?larger=true", service.trim_end_matches('/'), tool_url)
}

/// First [`MAX_TAGS`] tags, or `None` when the tool declares none.
pub fn display_tags(tags: Option<&[String]>) -> Option<&[String]> {
    tags.map(|tags| &tags[..tags.len().min(MAX_TAGS)])
}

/// Append `utm_source` to a tool url, keeping any query and fragment.
pub fn outbound_url(url: &str, source: &str) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let param = serde_urlencoded::to_string([("utm_source", source)])
        .unwrap_or_else(|_| format!("utm_source={source}"));

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    match fragment {
        Some(fragment) => format!("{base}{separator}{param}#{fragment}"),
        None => format!("{base}{separator}{param}"),
    }
}
