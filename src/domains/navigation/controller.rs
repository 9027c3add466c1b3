//! Navigation state machine.
//!
//! Two independent axes: the auth axis (`Checking` until the one check on
//! mount settles) and the menu axis (`Closed`/`Open`). The active route is
//! derived from the current path, never stored per item.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use super::auth::{AuthChecker, AuthError};
use super::menu::{MenuItem, menu_items};
use crate::domains::site::Messages;

/// Auth axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Checking,
    Authenticated,
    Anonymous,
}

impl AuthState {
    /// Settle a finished check. Failures are logged and read as anonymous.
    pub fn from_check(result: Result<bool, AuthError>) -> Self {
        match result {
            Ok(true) => Self::Authenticated,
            Ok(false) => Self::Anonymous,
            Err(e) => {
                error!("Failed to check auth status: {}", e);
                Self::Anonymous
            }
        }
    }

    /// Whether the visitor should be treated as signed in right now.
    pub fn is_logged_in(self) -> bool {
        self == Self::Authenticated
    }
}

/// Menu axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// A menu item with its derived highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub item: MenuItem,
    pub active: bool,
}

/// One mount of the navigation bar.
///
/// Dropping the controller unmounts it.
#[derive(Debug)]
pub struct NavigationController {
    pathname: String,
    menu: MenuState,
    auth: Arc<watch::Sender<AuthState>>,
    mounted: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl NavigationController {
    /// A controller for `pathname`, not yet mounted. `pathname` is the
    /// locale-independent route, e.g. `/digi-tools`.
    pub fn new(pathname: impl Into<String>) -> Self {
        let (auth, _) = watch::channel(AuthState::Checking);
        Self {
            pathname: pathname.into(),
            menu: MenuState::Closed,
            auth: Arc::new(auth),
            mounted: Arc::new(AtomicBool::new(false)),
            task: None,
        }
    }

    /// Mount: start the single auth check. Must run inside a Tokio runtime.
    ///
    /// Mounting an already mounted controller does nothing.
    pub fn mount(&mut self, checker: Arc<dyn AuthChecker>) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return;
        }
        self.auth.send_replace(AuthState::Checking);

        let auth = Arc::clone(&self.auth);
        let mounted = Arc::clone(&self.mounted);
        self.task = Some(tokio::spawn(async move {
            let result = checker.check().await;
            if !mounted.load(Ordering::SeqCst) {
                debug!("Discarding auth result for an unmounted navigation");
                return;
            }
            auth.send_replace(AuthState::from_check(result));
        }));
    }

    /// Unmount: results still in flight are discarded.
    pub fn unmount(&mut self) {
        self.mounted.store(false, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Current auth state.
    pub fn auth(&self) -> AuthState {
        *self.auth.borrow()
    }

    /// Wait until the auth check settles, or `limit` passes, and return the
    /// auth state at that point.
    pub async fn wait_for_auth(&self, limit: Duration) -> AuthState {
        let mut updates = self.auth.subscribe();
        let settled = tokio::time::timeout(
            limit,
            updates.wait_for(|state| *state != AuthState::Checking),
        )
        .await;
        match settled {
            Ok(Ok(state)) => *state,
            _ => self.auth(),
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu = if open {
            MenuState::Open
        } else {
            MenuState::Closed
        };
    }

    /// Follow a navigation link: the route changes and the menu closes.
    pub fn activate_link(&mut self, href: &str) {
        self.route_changed(href);
    }

    /// The route changed by any means; the menu closes.
    pub fn route_changed(&mut self, pathname: &str) {
        self.pathname = pathname.to_string();
        self.menu = MenuState::Closed;
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Exact match against the current path; `/article/x` does not
    /// activate `/article`.
    pub fn is_active(&self, href: &str) -> bool {
        self.pathname == href
    }

    /// Menu items with their highlight.
    pub fn entries(&self, messages: &Messages) -> Vec<MenuEntry> {
        menu_items(messages)
            .into_iter()
            .map(|item| MenuEntry {
                item,
                active: self.is_active(item.href),
            })
            .collect()
    }
}

impl Drop for NavigationController {
    fn drop(&mut self) {
        self.unmount();
    }
}
