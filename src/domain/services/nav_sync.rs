//! Navigation state synchronizer
//!
//! [`derive_navigation_state`] is the pure path → state transform.
//! [`NavigationSynchronizer`] owns the current state and applies the two
//! event sources to it: path changes from the router and open/close
//! requests from the menu widget.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::models::{MenuTree, NavigationState};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

/// Text between the first and second `/` of `path`, or `""`
pub fn selected_key_for_path(path: &str) -> &str {
    path.split('/').nth(1).unwrap_or("")
}

/// Compute the navigation state for `path`. Never fails.
pub fn derive_navigation_state(tree: &MenuTree, path: &str) -> NavigationState {
    let open_keys = tree
        .group_for_path(path)
        .map(|group| BTreeSet::from([group.to_string()]))
        .unwrap_or_default();

    NavigationState {
        selected_key: selected_key_for_path(path).to_string(),
        open_keys,
    }
}

/// Sole owner and writer of the sidebar's [`NavigationState`]
#[derive(Debug, Clone)]
pub struct NavigationSynchronizer {
    tree: Arc<MenuTree>,
    current_path: Option<String>,
    state: NavigationState,
    open_keys_overridden: bool,
}

impl NavigationSynchronizer {
    pub fn new(tree: Arc<MenuTree>) -> Self {
        Self {
            tree,
            current_path: None,
            state: NavigationState::default(),
            open_keys_overridden: false,
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    /// True while a user toggle is in effect
    pub fn has_override(&self) -> bool {
        self.open_keys_overridden
    }

    /// Apply a path reported by the router.
    ///
    /// Re-reporting the current path is not a change and keeps any manual
    /// override; a new path replaces the whole state and drops it.
    pub fn on_path_change(&mut self, path: &str) -> &NavigationState {
        if self.current_path.as_deref() == Some(path) {
            logging::log_path_unchanged(path);
            return &self.state;
        }

        self.state = derive_navigation_state(&self.tree, path);
        self.current_path = Some(path.to_string());
        self.open_keys_overridden = false;
        logging::log_path_sync(path, &self.state.selected_key, &self.state.open_keys);
        &self.state
    }

    /// Replace the open groups with the set reported by the menu widget.
    /// Keys that are not groups in the tree are dropped.
    pub fn set_open_keys<I, S>(&mut self, keys: I) -> &NavigationState
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut open_keys = BTreeSet::new();
        for key in keys {
            let key = key.into();
            if self.tree.is_group_key(&key) {
                open_keys.insert(key);
            } else {
                logging::log_unknown_group(&key);
            }
        }

        self.state = NavigationState {
            selected_key: self.state.selected_key.clone(),
            open_keys,
        };
        self.open_keys_overridden = true;
        logging::log_manual_toggle(&self.state.open_keys);
        &self.state
    }

    /// Flip a single group open or closed.
    /// Fails with [`AppError::UnknownGroup`] and leaves the state untouched
    /// when `key` is not a group in the tree.
    pub fn toggle_group(&mut self, key: &str) -> Result<&NavigationState> {
        if !self.tree.is_group_key(key) {
            return Err(AppError::UnknownGroup(key.to_string()));
        }

        let mut keys = self.state.open_keys.clone();
        if !keys.remove(key) {
            keys.insert(key.to_string());
        }
        Ok(self.set_open_keys(keys))
    }
}
