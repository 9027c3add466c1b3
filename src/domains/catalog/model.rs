//! Catalog records as they appear in content files.

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// A named grouping of tools, declared in a category index file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name.
    pub name: String,

    /// Content identifier of the category's tool file.
    pub src: String,

    /// Short description shown on category cards.
    #[serde(default)]
    pub description: String,

    /// Route slug of the category detail page.
    pub link: String,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Absolute URL of the tool's site.
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Display-only prominence flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Tool {
    /// Whether `url` is an absolute http(s) URL.
    pub fn has_absolute_url(&self) -> bool {
        Url::parse(&self.url)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false)
    }

    /// Whether the featured badge applies.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Case-insensitive match of an already lowercased needle against the
    /// name, description and tags.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .flatten()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(url: &str) -> Tool {
        Tool {
            name: "ChatGPT".to_string(),
            description: "Conversational assistant by OpenAI".to_string(),
            url: url.to_string(),
            icon_url: None,
            tags: Some(vec!["Chatbot".to_string(), "Writing".to_string()]),
            featured: None,
        }
    }

    #[test]
    fn test_optional_fields_default() {
        let tool: Tool =
            serde_json::from_str(r#"{"name": "Figma", "url": "https://figma.com"}"#).unwrap();
        assert_eq!(tool.description, "");
        assert!(tool.icon_url.is_none());
        assert!(tool.tags.is_none());
        assert!(!tool.is_featured());
    }

    #[test]
    fn test_absolute_url_check() {
        assert!(tool("https://chat.openai.com").has_absolute_url());
        assert!(!tool("chat.openai.com").has_absolute_url());
        assert!(!tool("mailto:team@openai.com").has_absolute_url());
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let tool = tool("https://chat.openai.com");
        assert!(tool.matches("chatgpt"));
        assert!(tool.matches("openai"));
        assert!(tool.matches("writing"));
        assert!(!tool.matches("video"));
    }
}
