use std::sync::Arc;

use dioxus::prelude::*;
use once_cell::sync::Lazy;

use crate::domain::models::MenuTree;
use crate::domain::services::NavigationSynchronizer;
use crate::shared::logging;

static MENU_TREE: Lazy<Arc<MenuTree>> = Lazy::new(|| Arc::new(MenuTree::builtin()));

/// Sidebar tree, built once per process
pub fn menu_tree() -> Arc<MenuTree> {
    Arc::clone(&MENU_TREE)
}

/// Keep a [`NavigationSynchronizer`] in step with the router path.
///
/// The path effect is the only place path changes reach the
/// synchronizer; toggles go through [`toggle_group`].
pub fn use_navigation(path: String) -> Signal<NavigationSynchronizer> {
    let mut sync = use_signal(|| NavigationSynchronizer::new(menu_tree()));

    use_effect(use_reactive((&path,), move |(path,)| {
        sync.write().on_path_change(&path);
    }));

    sync
}

/// Forward a user open/close request for a group
pub fn toggle_group(mut sync: Signal<NavigationSynchronizer>, key: &str) {
    if sync.write().toggle_group(key).is_err() {
        logging::log_unknown_group(key);
    }
}
