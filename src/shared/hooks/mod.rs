// Custom Dioxus hooks
pub mod use_navigation;
pub mod use_theme;

pub use use_navigation::{menu_tree, toggle_group, use_navigation};
pub use use_theme::{set_theme_mode, use_theme, use_theme_provider};
