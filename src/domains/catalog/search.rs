//! Search across every tool reachable from a set of category indexes.

use std::collections::HashSet;
use tracing::{info, instrument, warn};

use super::error::CatalogError;
use super::locale::Locale;
use super::model::Tool;
use super::store::ContentStore;

/// A search hit, with the category it was found in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchHit {
    pub category: String,
    pub category_link: String,
    pub tool: Tool,
}

/// Case-insensitive substring search over tool names, descriptions and tags.
///
/// Hits follow catalog order (index, then category, then tool). A tool listed
/// in several categories is reported once, under the first one. Missing
/// indexes and category files are skipped; other content errors are returned.
/// A blank query yields no hits.
#[instrument(skip(store, indexes), fields(locale = %locale))]
pub fn search_tools(
    store: &ContentStore,
    locale: Locale,
    indexes: &[&str],
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<SearchHit>, CatalogError> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }
    let limit = limit.unwrap_or(usize::MAX);

    let mut seen = HashSet::new();
    let mut hits = Vec::new();

    'indexes: for index in indexes {
        let categories = match store.load_categories(locale, index) {
            Ok(categories) => categories,
            Err(e) if e.is_not_found() => {
                warn!("Skipping index {}: {}", index, e);
                continue;
            }
            Err(e) => return Err(e),
        };

        for category in categories {
            let tools = match store.load_tools(&category.src, locale) {
                Ok(tools) => tools,
                Err(e) if e.is_not_found() => {
                    warn!("Skipping category {}: {}", category.link, e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            for tool in tools {
                if hits.len() >= limit {
                    break 'indexes;
                }
                if tool.matches(&needle) && seen.insert(tool.url.clone()) {
                    hits.push(SearchHit {
                        category: category.name.clone(),
                        category_link: category.link.clone(),
                        tool,
                    });
                }
            }
        }
    }

    info!("Search '{}' matched {} tools", query, hits.len());
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ContentConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let write = |relative: &str, content: &str| {
            let path = dir.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        };
        write(
            "en/ai-tools.jsonc",
            r#"[
                {"name": "Chatbots", "src": "ai-chat", "link": "chat"},
                {"name": "Writing", "src": "ai-writing", "link": "writing"},
                {"name": "Ghost", "src": "ai-missing", "link": "ghost"}
            ]"#,
        );
        write(
            "en/ai-chat.jsonc",
            r#"[
                {"name": "ChatGPT", "url": "https://chat.openai.com", "tags": ["Writing"]},
                {"name": "Perplexity", "url": "https://perplexity.ai", "description": "Answer engine"}
            ]"#,
        );
        write(
            "en/ai-writing.jsonc",
            r#"[
                {"name": "Jasper", "url": "https://jasper.ai", "description": "AI WRITING for teams"},
                {"name": "ChatGPT", "url": "https://chat.openai.com"}
            ]"#,
        );
        dir
    }

    fn store(root: &Path) -> ContentStore {
        ContentStore::new(&ContentConfig {
            root: root.to_path_buf(),
            ..ContentConfig::default()
        })
    }

    #[test]
    fn test_search_matches_tags_and_keeps_order() {
        let dir = fixture();
        let hits = search_tools(
            &store(dir.path()),
            Locale::En,
            &["ai-tools.jsonc", "digi-tools.jsonc"],
            "writing",
            None,
        )
        .unwrap();

        let names: Vec<_> = hits.iter().map(|h| h.tool.name.as_str()).collect();
        assert_eq!(names, ["ChatGPT", "Jasper"]);
        assert_eq!(hits[0].category_link, "chat");
    }

    #[test]
    fn test_search_dedupes_by_url() {
        let dir = fixture();
        let hits =
            search_tools(&store(dir.path()), Locale::En, &["ai-tools.jsonc"], "chatgpt", None)
                .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_search_limit_and_blank_query() {
        let dir = fixture();
        let store = store(dir.path());
        let hits = search_tools(&store, Locale::En, &["ai-tools.jsonc"], "a", Some(2)).unwrap();
        assert_eq!(hits.len(), 2);

        let hits = search_tools(&store, Locale::En, &["ai-tools.jsonc"], "   ", None).unwrap();
        assert!(hits.is_empty());
    }
}
