//! Route paths, icon colors and link targets used across the sidebar.

/// Route paths served by the dashboard router
pub struct PathConstants;

impl PathConstants {
    pub const MODULES: &'static str = "/modules";
    pub const TEMPLATES: &'static str = "/templates";
    pub const NODES: &'static str = "/nodes";
    pub const HELM_RELEASES: &'static str = "/helm";
    pub const ADDONS_MCP_SERVER: &'static str = "/addons/mcp";
}

/// Releases index of the upstream project
pub const RELEASES_INDEX_URL: &str = "https://github.com/andersan81/cyclops/releases";

/// Version tag used by unreleased/dev builds
pub const DEV_VERSION_TAG: &str = "v0.0.0";

pub const DEFAULT_VERSION_TAG: &str = "v1.0.0";

pub const BUG_REPORT_SUBJECT: &str = "Vision Deployments Bug Report";

// Warning icon palette
pub const WARNING_PRIMARY_COLOR: &str = "#ffcc00";
pub const WARNING_DARK_BACKGROUND_COLOR: &str = "#4f4002";

/// Only menu tree format understood by this build
pub const MENU_TREE_VERSION: u32 = 1;
