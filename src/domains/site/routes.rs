//! Site paths.
//!
//! Every page exists once per locale: bare for the default locale, and
//! under `/{code}` for any locale (so `/en/digi-tools` also works).

use crate::domains::catalog::Locale;
use crate::domains::navigation::{
    ARTICLE_PATH, CHANGELOG_PATH, DIGI_TOOLS_PATH, HOME_PATH, SUBMIT_TOOL_PATH,
};

pub const SEARCH_PATH: &str = "/search";

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteRoute {
    /// Home: the AI tools catalog.
    AiTools,
    DigiTools,
    /// Category detail page, by category link.
    Category(String),
    Search,
    SubmitTool,
    Article,
    Changelog,
}

impl SiteRoute {
    /// Parse a request path into its locale and page.
    ///
    /// Returns `None` for paths that are not pages.
    pub fn parse(path: &str, default_locale: Locale) -> Option<(Locale, SiteRoute)> {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let locale = match segments.first().and_then(|s| Locale::from_code(s)) {
            Some(locale) => {
                segments.remove(0);
                locale
            }
            _ => default_locale,
        };

        let route = match segments.as_slice() {
            [] => Self::AiTools,
            ["digi-tools"] => Self::DigiTools,
            ["tools" | "category", link] => Self::Category((*link).to_string()),
            ["search"] => Self::Search,
            ["submit-tool"] => Self::SubmitTool,
            ["article"] => Self::Article,
            ["changelog"] => Self::Changelog,
            _ => return None,
        };

        Some((locale, route))
    }

    /// Locale-independent path, as compared by navigation highlighting.
    pub fn pathname(&self) -> String {
        match self {
            Self::AiTools => HOME_PATH.to_string(),
            Self::DigiTools => DIGI_TOOLS_PATH.to_string(),
            Self::Category(link) => format!("/tools/{link}"),
            Self::Search => SEARCH_PATH.to_string(),
            Self::SubmitTool => SUBMIT_TOOL_PATH.to_string(),
            Self::Article => ARTICLE_PATH.to_string(),
            Self::Changelog => CHANGELOG_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_locale() {
        assert_eq!(
            SiteRoute::parse("/", Locale::En),
            Some((Locale::En, SiteRoute::AiTools))
        );
        assert_eq!(
            SiteRoute::parse("/digi-tools/", Locale::En),
            Some((Locale::En, SiteRoute::DigiTools))
        );
    }

    #[test]
    fn test_parse_locale_prefix() {
        assert_eq!(
            SiteRoute::parse("/zh", Locale::En),
            Some((Locale::Zh, SiteRoute::AiTools))
        );
        assert_eq!(
            SiteRoute::parse("/zh/tools/chat", Locale::En),
            Some((Locale::Zh, SiteRoute::Category("chat".to_string())))
        );
        assert_eq!(
            SiteRoute::parse("/en/submit-tool", Locale::Zh),
            Some((Locale::En, SiteRoute::SubmitTool))
        );
    }

    #[test]
    fn test_locale_prefix_is_case_sensitive() {
        assert_eq!(SiteRoute::parse("/ZH/digi-tools", Locale::En), None);
        assert_eq!(SiteRoute::parse("/En", Locale::En), None);
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!(
            SiteRoute::parse("/category/seo", Locale::En),
            SiteRoute::parse("/tools/seo", Locale::En)
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(SiteRoute::parse("/tools", Locale::En), None);
        assert_eq!(SiteRoute::parse("/zh/nope", Locale::En), None);
        assert_eq!(SiteRoute::parse("/tools/a/b", Locale::En), None);
    }

    #[test]
    fn test_pathname_roundtrips_through_nav_paths() {
        assert_eq!(SiteRoute::DigiTools.pathname(), "/digi-tools");
        assert_eq!(SiteRoute::Category("seo".into()).pathname(), "/tools/seo");
    }
}
