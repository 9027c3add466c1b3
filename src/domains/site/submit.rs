//! Tool submission form.

use serde::{Deserialize, Serialize};

use super::copy::Messages;
use crate::domains::catalog::Tool;

/// Catalog a submission is proposed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionCategory {
    Ai,
    DigitalMarketing,
}

impl SubmissionCategory {
    pub const ALL: [SubmissionCategory; 2] = [Self::Ai, Self::DigitalMarketing];

    pub fn value(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::DigitalMarketing => "digital-marketing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ai => "AI Tools",
            Self::DigitalMarketing => "Digital Marketing Tools",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// The submitted form, as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Submission {
    pub tool_name: String,
    pub tool_url: String,
    pub tool_description: String,
    pub tool_category: String,
}

/// A rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    UrlInvalid,
    CategoryInvalid,
}

impl FieldError {
    pub fn message(self, messages: &Messages) -> &'static str {
        match self {
            Self::NameRequired => messages.error_name_required,
            Self::UrlInvalid => messages.error_url_invalid,
            Self::CategoryInvalid => messages.error_category_invalid,
        }
    }
}

impl Submission {
    /// Parse an `application/x-www-form-urlencoded` body. Unknown fields are
    /// ignored and missing ones are empty.
    pub fn from_form(body: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
        serde_urlencoded::from_bytes(body)
    }

    /// All field errors, in form order. Empty means valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.tool_name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        if !self.as_tool().has_absolute_url() {
            errors.push(FieldError::UrlInvalid);
        }
        if SubmissionCategory::parse(&self.tool_category).is_none() {
            errors.push(FieldError::CategoryInvalid);
        }
        errors
    }

    /// The submission as a catalog record.
    pub fn as_tool(&self) -> Tool {
        Tool {
            name: self.tool_name.trim().to_string(),
            description: self.tool_description.trim().to_string(),
            url: self.tool_url.trim().to_string(),
            icon_url: None,
            tags: None,
            featured: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let form = Submission::from_form(
            b"toolName=Perplexity&toolUrl=https%3A%2F%2Fperplexity.ai&toolDescription=&toolCategory=ai",
        )
        .unwrap();
        assert_eq!(form.tool_name, "Perplexity");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_every_error_reported_in_order() {
        let form = Submission::from_form(b"toolName=++&toolUrl=perplexity.ai&toolCategory=video")
            .unwrap();
        assert_eq!(
            form.validate(),
            [
                FieldError::NameRequired,
                FieldError::UrlInvalid,
                FieldError::CategoryInvalid
            ]
        );
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let form = Submission::from_form(b"").unwrap();
        assert_eq!(form, Submission::default());
        assert_eq!(form.validate().len(), 3);
    }

    #[test]
    fn test_category_values() {
        assert_eq!(
            SubmissionCategory::parse("digital-marketing"),
            Some(SubmissionCategory::DigitalMarketing)
        );
        assert_eq!(SubmissionCategory::parse("AI"), None);
    }
}
