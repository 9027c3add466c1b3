//! Listing markup.

use maud::{Markup, html};

use super::card::ToolCard;
use crate::core::config::ListingConfig;
use crate::domains::catalog::{Category, Locale, SearchHit, Tool};
use crate::domains::site::Messages;

/// What every listing view needs besides its records.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub listing: &'a ListingConfig,
    pub messages: &'a Messages,
    pub locale: Locale,
    pub default_locale: Locale,
}

impl RenderContext<'_> {
    /// Site path in the current locale.
    pub fn path(&self, path: &str) -> String {
        self.locale.localize_path(self.default_locale, path)
    }

    /// Path of a category detail page.
    pub fn category_path(&self, link: &str) -> String {
        self.path(&format!("/tools/{link}"))
    }
}

/// One tool card.
pub fn tool_card(card: &ToolCard<'_>, ctx: &RenderContext<'_>) -> Markup {
    html! {
        article class="tool-card" {
            @if card.featured {
                span class="badge featured" { (ctx.messages.featured) }
            }
            a class="tool-link" href=(card.href) target="_blank" rel="noopener noreferrer" {
                span class="tool-icon" {
                    img width="20" height="20" src=(card.icon.src()) alt={ (card.name) " favicon" };
                }
                h3 class="tool-name" { (card.name) }
                span class="external" aria-hidden="true" { "↗" }
            }
            div class="tool-description clamp-3" { (card.description) }
            @if let Some(tags) = card.tags {
                div class="tool-tags" {
                    @for tag in tags {
                        span class="badge tag" { (tag) }
                    }
                }
            }
        }
    }
}

fn grid<'t>(
    tools: impl IntoIterator<Item = &'t Tool>,
    class: &str,
    ctx: &RenderContext<'_>,
) -> Markup {
    html! {
        div class=(class) {
            @for tool in tools {
                (tool_card(&ToolCard::new(tool, ctx.listing), ctx))
            }
        }
    }
}

/// A category section: heading, tool grid, and optionally a link to the
/// category page.
pub fn tools_list(
    category: &Category,
    tools: &[Tool],
    show_more_link: bool,
    ctx: &RenderContext<'_>,
) -> Markup {
    html! {
        section class="tools-list" id=(category.link) {
            h2 { (category.name) }
            (grid(tools, "tool-grid cols-3", ctx))
            @if show_more_link {
                div class="more" {
                    a href=(ctx.category_path(&category.link)) { (ctx.messages.more) " →" }
                }
            }
        }
    }
}

/// The wide grid of a category detail page.
pub fn tools_page(tools: &[Tool], ctx: &RenderContext<'_>) -> Markup {
    html! {
        section class="tools-page" {
            (grid(tools, "tool-grid cols-4", ctx))
        }
    }
}

/// Search hits, in the same grid as a category page.
pub fn search_results(hits: &[SearchHit], ctx: &RenderContext<'_>) -> Markup {
    html! {
        section class="search-results" {
            (grid(hits.iter().map(|hit| &hit.tool), "tool-grid cols-4", ctx))
        }
    }
}

/// Cards linking to category pages.
pub fn category_list(categories: &[Category], ctx: &RenderContext<'_>) -> Markup {
    html! {
        section class="category-list" {
            div class="tool-grid cols-5" {
                @for category in categories {
                    article class="category-card" {
                        a href=(ctx.category_path(&category.link)) {
                            h3 { (category.name) " →" }
                        }
                        div class="clamp-2" { (category.description) }
                    }
                }
            }
        }
    }
}

/// Placeholder for content that could not be found.
pub fn empty_state(message: &str) -> Markup {
    html! {
        section class="empty-state" {
            p { (message) }
        }
    }
}
