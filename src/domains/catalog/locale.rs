//! Locale registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CatalogError;

/// A content language supported by the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, served without a URL prefix.
    #[default]
    En,

    /// Simplified Chinese, served under `/zh`.
    Zh,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// The code used in content files and URL prefixes.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Exact code lookup, as used for URL prefixes. [`FromStr`] is the
    /// lenient form for configuration and tool arguments.
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// The `lang` attribute for rendered pages.
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh-CN",
        }
    }

    /// Prefix a site path with this locale, leaving the default locale bare.
    pub fn localize_path(self, default: Locale, path: &str) -> String {
        if self == default {
            path.to_string()
        } else if path == "/" {
            format!("/{}", self.code())
        } else {
            format!("/{}{}", self.code(), path)
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_lowercase())
            .ok_or(CatalogError::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" ZH ".parse::<Locale>().unwrap(), Locale::Zh);
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Locale::from_code("zh"), Some(Locale::Zh));
        assert_eq!(Locale::from_code("ZH"), None);
        assert_eq!(Locale::from_code(" en"), None);
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownLocale(code) if code == "fr"));
    }

    #[test]
    fn test_localize_path() {
        assert_eq!(Locale::En.localize_path(Locale::En, "/digi-tools"), "/digi-tools");
        assert_eq!(Locale::Zh.localize_path(Locale::En, "/digi-tools"), "/zh/digi-tools");
        assert_eq!(Locale::Zh.localize_path(Locale::En, "/"), "/zh");
    }
}
