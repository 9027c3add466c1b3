//! Navigation domain module.
//!
//! Holds the per-mount state of the navigation bar: mobile menu, derived
//! active route, and the auth-status check started on mount.

mod auth;
mod controller;
mod menu;

pub use auth::{AuthChecker, AuthError, AuthStatus, HttpAuthChecker, StaticAuthChecker};
#[cfg(test)]
pub(crate) use auth::testing;
pub use controller::{AuthState, MenuEntry, MenuState, NavigationController};
pub use menu::{
    ARTICLE_PATH, CHANGELOG_PATH, DIGI_TOOLS_PATH, HOME_PATH, MenuItem, SUBMIT_TOOL_PATH,
    menu_items,
};
