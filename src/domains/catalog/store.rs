//! Content store: reads category indexes and tool lists from disk.
//!
//! Every call re-reads its file. A file is looked up in two layouts, in
//! order:
//!
//! 1. `{root}/{locale}/{file}` holding a bare array;
//! 2. `{root}/{file}` holding an object keyed by locale code.
//!
//! Identifiers without an extension are tried as `.jsonc`, then `.json`.

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

use super::error::CatalogError;
use super::locale::Locale;
use super::model::{Category, Tool};
use crate::core::config::ContentConfig;
use crate::core::security::{PathSecurityError, resolve_content_path};

const EXTENSIONS: [&str; 2] = ["jsonc", "json"];

/// Read-only access to the locale content files.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    allow_symlinks: bool,
}

impl ContentStore {
    /// Create a store rooted at `config.root`.
    pub fn new(config: &ContentConfig) -> Self {
        Self {
            root: config.root.clone(),
            allow_symlinks: config.allow_symlinks,
        }
    }

    /// The content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the categories of `index` for `locale`, in file order.
    ///
    /// Fails with [`CatalogError::InvalidContent`] when two categories share
    /// a `link`, since links address category pages.
    #[instrument(skip(self), fields(locale = %locale))]
    pub fn load_categories(
        &self,
        locale: Locale,
        index: &str,
    ) -> Result<Vec<Category>, CatalogError> {
        let (path, categories) = self.load_section::<Category>(locale, index)?;

        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.link.as_str()) {
                return Err(CatalogError::invalid(
                    path,
                    format!("duplicate category link '{}'", category.link),
                ));
            }
        }

        debug!("Loaded {} categories from {:?}", categories.len(), path);
        Ok(categories)
    }

    /// Load the tools of the category whose `src` is `src`, in file order.
    #[instrument(skip(self), fields(locale = %locale))]
    pub fn load_tools(&self, src: &str, locale: Locale) -> Result<Vec<Tool>, CatalogError> {
        let (path, tools) = self.load_section::<Tool>(locale, src)?;

        for tool in tools.iter().filter(|t| !t.has_absolute_url()) {
            warn!(
                "Tool '{}' in {:?} has a non-absolute url '{}'",
                tool.name, path, tool.url
            );
        }

        debug!("Loaded {} tools from {:?}", tools.len(), path);
        Ok(tools)
    }

    /// Load the categories of every index in `indexes` for `locale`, index
    /// by index in file order.
    ///
    /// Indexes that are missing for the locale are skipped. Category pages
    /// are addressed by link across all indexes, so a link declared in two
    /// indexes fails with [`CatalogError::InvalidContent`].
    #[instrument(skip(self), fields(locale = %locale))]
    pub fn load_all_categories(
        &self,
        locale: Locale,
        indexes: &[&str],
    ) -> Result<Vec<Category>, CatalogError> {
        let mut categories: Vec<Category> = Vec::new();
        for index in indexes {
            let found = match self.load_categories(locale, index) {
                Ok(found) => found,
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            };
            for category in found {
                if let Some(first) = categories.iter().find(|c| c.link == category.link) {
                    return Err(CatalogError::invalid(
                        *index,
                        format!(
                            "category link '{}' is already used by '{}' in another index",
                            category.link, first.name
                        ),
                    ));
                }
                categories.push(category);
            }
        }
        Ok(categories)
    }

    /// Find the category whose `link` is `link` in any of `indexes`.
    ///
    /// Indexes that are missing for the locale are skipped.
    pub fn find_category(
        &self,
        locale: Locale,
        indexes: &[&str],
        link: &str,
    ) -> Result<Category, CatalogError> {
        self.load_all_categories(locale, indexes)?
            .into_iter()
            .find(|c| c.link == link)
            .ok_or_else(|| CatalogError::not_found(format!("category '{link}'")))
    }

    fn load_section<T: DeserializeOwned>(
        &self,
        locale: Locale,
        file: &str,
    ) -> Result<(PathBuf, Vec<T>), CatalogError> {
        let names = file_names(file);

        for name in &names {
            let per_locale = format!("{}/{}", locale.code(), name);
            if let Some(path) = self.resolve(&per_locale)? {
                let records = parse_file::<Vec<T>>(&path)?;
                return Ok((path, records));
            }
        }

        for name in &names {
            if let Some(path) = self.resolve(name)? {
                let mut sections =
                    parse_file::<serde_json_lenient::Map<String, serde_json_lenient::Value>>(
                        &path,
                    )?;
                let section = sections.remove(locale.code()).ok_or_else(|| {
                    CatalogError::not_found(format!("'{}' section of {}", locale, name))
                })?;
                let records = serde_json_lenient::from_value::<Vec<T>>(section)
                    .map_err(|e| CatalogError::parse(&path, e.to_string()))?;
                return Ok((path, records));
            }
        }

        Err(CatalogError::not_found(format!("{file} for locale '{locale}'")))
    }

    /// Resolve an identifier, mapping "does not exist" to `None`.
    fn resolve(&self, identifier: &str) -> Result<Option<PathBuf>, CatalogError> {
        match resolve_content_path(&self.root, identifier, self.allow_symlinks) {
            Ok(path) => Ok(Some(path)),
            Err(PathSecurityError::PathNotFound { .. }) => Ok(None),
            Err(PathSecurityError::IoError { error, .. }) => Err(CatalogError::Io(error)),
            Err(e) => Err(CatalogError::access_denied(e.to_string())),
        }
    }
}

/// Candidate file names for an identifier.
fn file_names(file: &str) -> Vec<String> {
    if Path::new(file).extension().is_some() {
        vec![file.to_string()]
    } else {
        EXTENSIONS
            .iter()
            .map(|ext| format!("{file}.{ext}"))
            .collect()
    }
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    if !path.is_file() {
        return Err(CatalogError::not_found(path.display().to_string()));
    }
    let text = fs::read_to_string(path)?;
    serde_json_lenient::from_str(&text).map_err(|e| CatalogError::parse(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(root: &Path) -> ContentStore {
        let config = ContentConfig {
            root: root.to_path_buf(),
            ..ContentConfig::default()
        };
        ContentStore::new(&config)
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_categories_keep_file_order() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "en/ai-tools.jsonc",
            r#"[
                // chat first, on purpose
                {"name": "Chatbots", "src": "ai-chat", "description": "", "link": "chat"},
                {"name": "Art", "src": "ai-art", "description": "", "link": "art"},
                {"name": "Audio", "src": "ai-audio", "description": "", "link": "audio"},
            ]"#,
        );

        let categories = store(dir.path())
            .load_categories(Locale::En, "ai-tools.jsonc")
            .unwrap();

        let links: Vec<_> = categories.iter().map(|c| c.link.as_str()).collect();
        assert_eq!(links, ["chat", "art", "audio"]);
    }

    #[test]
    fn test_locale_keyed_layout() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "digi-tools.jsonc",
            r#"{
                "en": [{"name": "SEO", "src": "seo", "link": "seo"}],
                /* translated */
                "zh": [{"name": "搜索优化", "src": "seo", "link": "seo"}]
            }"#,
        );

        let zh = store(dir.path())
            .load_categories(Locale::Zh, "digi-tools.jsonc")
            .unwrap();
        assert_eq!(zh.len(), 1);
        assert_eq!(zh[0].name, "搜索优化");
    }

    #[test]
    fn test_missing_locale_section_is_not_found() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "digi-tools.jsonc",
            r#"{"en": [{"name": "SEO", "src": "seo", "link": "seo"}]}"#,
        );

        let err = store(dir.path())
            .load_categories(Locale::Zh, "digi-tools.jsonc")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store(dir.path())
            .load_categories(Locale::En, "ai-tools.jsonc")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_links_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "en/ai-tools.json",
            r#"[
                {"name": "Chat", "src": "ai-chat", "link": "chat"},
                {"name": "Chat 2", "src": "ai-chat-2", "link": "chat"}
            ]"#,
        );

        let err = store(dir.path())
            .load_categories(Locale::En, "ai-tools.json")
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidContent { .. }));
    }

    #[test]
    fn test_tools_keep_order_and_ignore_featured() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "en/ai-chat.jsonc",
            r#"[
                {"name": "Claude", "url": "https://claude.ai", "description": "Assistant"},
                {"name": "ChatGPT", "url": "https://chat.openai.com", "featured": true},
                {"name": "Gemini", "url": "https://gemini.google.com"}
            ]"#,
        );

        let tools = store(dir.path()).load_tools("ai-chat", Locale::En).unwrap();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Claude", "ChatGPT", "Gemini"]);
    }

    #[test]
    fn test_extension_fallback_prefers_jsonc() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "en/ai-art.jsonc",
            r#"[{"name": "Midjourney", "url": "https://midjourney.com"}]"#,
        );
        write(
            dir.path(),
            "en/ai-art.json",
            r#"[{"name": "Stale", "url": "https://example.com"}]"#,
        );

        let tools = store(dir.path()).load_tools("ai-art", Locale::En).unwrap();
        assert_eq!(tools[0].name, "Midjourney");
    }

    #[test]
    fn test_traversal_in_src_denied() {
        let dir = TempDir::new().unwrap();
        let err = store(dir.path())
            .load_tools("../../etc/passwd", Locale::En)
            .unwrap_err();
        assert!(matches!(err, CatalogError::AccessDenied(_)));
    }

    #[test]
    fn test_malformed_content_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "en/broken.json", r#"[{"name": "x""#);

        let err = store(dir.path()).load_tools("broken", Locale::En).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_find_category_across_indexes() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "en/ai-tools.jsonc",
            r#"[{"name": "Chat", "src": "ai-chat", "link": "chat"}]"#,
        );
        write(
            dir.path(),
            "en/digi-tools.jsonc",
            r#"[{"name": "SEO", "src": "seo", "link": "seo"}]"#,
        );

        let store = store(dir.path());
        let indexes = ["ai-tools.jsonc", "digi-tools.jsonc"];
        let found = store.find_category(Locale::En, &indexes, "seo").unwrap();
        assert_eq!(found.src, "seo");
        assert!(
            store
                .find_category(Locale::En, &indexes, "video")
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn test_link_shared_across_indexes_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "en/ai-tools.jsonc",
            r#"[{"name": "AI SEO", "src": "ai-seo", "link": "seo"}]"#,
        );
        write(
            dir.path(),
            "en/digi-tools.jsonc",
            r#"[{"name": "SEO", "src": "seo", "link": "seo"}]"#,
        );

        let store = store(dir.path());
        let indexes = ["ai-tools.jsonc", "digi-tools.jsonc"];
        let err = store.find_category(Locale::En, &indexes, "seo").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidContent { .. }));
        assert!(matches!(
            store.load_all_categories(Locale::En, &indexes),
            Err(CatalogError::InvalidContent { .. })
        ));

        // each index on its own is fine
        assert_eq!(store.load_categories(Locale::En, "digi-tools.jsonc").unwrap().len(), 1);
    }

    #[test]
    fn test_all_categories_skip_missing_index() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "en/ai-tools.jsonc",
            r#"[{"name": "Chat", "src": "ai-chat", "link": "chat"}]"#,
        );

        let categories = store(dir.path())
            .load_all_categories(Locale::En, &["ai-tools.jsonc", "digi-tools.jsonc"])
            .unwrap();
        assert_eq!(categories.len(), 1);
    }
}
