// Business logic services
// Framework-agnostic, 100% testable

pub mod changelog;
pub mod icon_color;
pub mod nav_sync;

pub use changelog::{tag_changelog_link, ChangelogLinkResolver};
pub use icon_color::{color_for, color_for_mode};
pub use nav_sync::{derive_navigation_state, selected_key_for_path, NavigationSynchronizer};
