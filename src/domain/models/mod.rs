// Domain models
// Pure Rust, no framework dependencies

pub mod menu;
pub mod navigation;
pub mod theme;

pub use menu::{GroupTrigger, MenuNode, MenuTree};
pub use navigation::NavigationState;
pub use theme::{ColorSpec, ThemeMode};
