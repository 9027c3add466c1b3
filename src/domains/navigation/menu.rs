//! Navigation menu entries.

use crate::domains::site::Messages;

pub const HOME_PATH: &str = "/";
pub const DIGI_TOOLS_PATH: &str = "/digi-tools";
pub const ARTICLE_PATH: &str = "/article";
pub const CHANGELOG_PATH: &str = "/changelog";
pub const SUBMIT_TOOL_PATH: &str = "/submit-tool";

/// A top-level navigation link. `href` is locale-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// The navigation menu, in display order.
pub fn menu_items(messages: &Messages) -> [MenuItem; 4] {
    [
        MenuItem {
            label: messages.nav_ai_tools,
            href: HOME_PATH,
        },
        MenuItem {
            label: messages.nav_digi_tools,
            href: DIGI_TOOLS_PATH,
        },
        MenuItem {
            label: messages.nav_article,
            href: ARTICLE_PATH,
        },
        MenuItem {
            label: messages.nav_changelog,
            href: CHANGELOG_PATH,
        },
    ]
}
