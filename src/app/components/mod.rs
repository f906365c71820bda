pub mod error_icon;
pub mod report_bug;
pub mod theme_toggle;
pub mod version_tag;

pub use error_icon::ErrorIcon;
pub use report_bug::ReportBugButton;
pub use theme_toggle::ThemeToggle;
pub use version_tag::VersionTag;
