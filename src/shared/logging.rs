//! Structured logging for the side navigation
//!
//! Keeps field names consistent between the navigation synchronizer,
//! the theme hook and configuration loading.

use std::collections::BTreeSet;

/// Operation tag attached to every log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    PathSync,
    ManualToggle,
    ThemeChange,
    ConfigLoad,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::PathSync => "path_sync",
            LogOperation::ManualToggle => "manual_toggle",
            LogOperation::ThemeChange => "theme_change",
            LogOperation::ConfigLoad => "config_load",
        }
    }
}

fn join_keys(keys: &BTreeSet<String>) -> String {
    keys.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Log a recomputed navigation state after a path change
pub fn log_path_sync(path: &str, selected_key: &str, open_keys: &BTreeSet<String>) {
    tracing::debug!(
        operation = LogOperation::PathSync.as_str(),
        path = path,
        selected_key = selected_key,
        open_keys = %join_keys(open_keys),
        "Navigation state recomputed"
    );
}

/// Log a path report that matched the current path
pub fn log_path_unchanged(path: &str) {
    tracing::trace!(
        operation = LogOperation::PathSync.as_str(),
        path = path,
        "Path unchanged, keeping navigation state"
    );
}

/// Log a user-driven open/close override
pub fn log_manual_toggle(open_keys: &BTreeSet<String>) {
    tracing::debug!(
        operation = LogOperation::ManualToggle.as_str(),
        open_keys = %join_keys(open_keys),
        "Open groups overridden by user"
    );
}

/// Log a toggle request for a key that is not a group
pub fn log_unknown_group(key: &str) {
    tracing::warn!(
        operation = LogOperation::ManualToggle.as_str(),
        group_key = key,
        "Ignoring toggle for unknown menu group"
    );
}

/// Log a theme mode switch
pub fn log_theme_change(mode: &str) {
    tracing::info!(
        operation = LogOperation::ThemeChange.as_str(),
        mode = mode,
        "Theme mode changed"
    );
}

/// Log the loaded runtime configuration
pub fn log_config_loaded(source: &str, version_tag: &str, has_support_email: bool) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        source = source,
        version_tag = version_tag,
        has_support_email = has_support_email,
        "Runtime configuration loaded"
    );
}

/// Log a configuration source that could not be decoded
pub fn log_config_error(source: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::ConfigLoad.as_str(),
        source = source,
        error = error,
        "Falling back to default runtime configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::PathSync.as_str(), "path_sync");
        assert_eq!(LogOperation::ManualToggle.as_str(), "manual_toggle");
        assert_eq!(LogOperation::ThemeChange.as_str(), "theme_change");
        assert_eq!(LogOperation::ConfigLoad.as_str(), "config_load");
    }

    #[test]
    fn test_join_keys_is_sorted() {
        let keys: BTreeSet<String> = ["b".to_string(), "a".to_string()].into();
        assert_eq!(join_keys(&keys), "a,b");
        assert_eq!(join_keys(&BTreeSet::new()), "");
    }
}
