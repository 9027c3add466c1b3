//! Listing domain module.
//!
//! Turns category and tool records into card grids. Stateless: the same
//! records and context always produce the same markup.

mod card;
mod render;

pub use card::{IconSource, MAX_TAGS, ToolCard, display_tags, favicon_url, outbound_url};
pub use render::{
    RenderContext, category_list, empty_state, search_results, tool_card, tools_list, tools_page,
};
