//! Runtime configuration
//!
//! Values injected at deploy time rather than compile time. On native
//! targets they come from environment variables; in the browser from the
//! `window.__RUNTIME_CONFIG__` object written by the hosting page.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::constants::{BUG_REPORT_SUBJECT, DEFAULT_VERSION_TAG, RELEASES_INDEX_URL};
use crate::shared::errors::Result;
use crate::shared::logging;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRuntimeConfig")]
pub struct RuntimeConfig {
    /// Used verbatim in the bug report mail link
    #[serde(rename = "SUPPORT_EMAIL")]
    pub support_email: String,
    #[serde(rename = "APP_VERSION")]
    pub version_tag: String,
    #[serde(rename = "RELEASES_URL")]
    pub releases_url: String,
}

/// Keys as written by the hosting page or the environment.
///
/// Both support email spellings may be present at once; `SUPPORT_EMAIL`
/// wins over the legacy `REACT_APP_SUPPORT_EMAIL`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRuntimeConfig {
    #[serde(rename = "SUPPORT_EMAIL")]
    support_email: Option<String>,
    #[serde(rename = "REACT_APP_SUPPORT_EMAIL")]
    legacy_support_email: Option<String>,
    #[serde(rename = "APP_VERSION")]
    app_version: Option<String>,
    #[serde(rename = "RELEASES_URL")]
    releases_url: Option<String>,
}

impl From<RawRuntimeConfig> for RuntimeConfig {
    fn from(raw: RawRuntimeConfig) -> Self {
        let defaults = Self::default();
        Self {
            support_email: raw
                .support_email
                .or(raw.legacy_support_email)
                .unwrap_or(defaults.support_email),
            // An empty tag or index would render a dangling changelog link
            version_tag: raw
                .app_version
                .filter(|tag| !tag.is_empty())
                .unwrap_or(defaults.version_tag),
            releases_url: raw
                .releases_url
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.releases_url),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            support_email: String::new(),
            version_tag: DEFAULT_VERSION_TAG.to_string(),
            releases_url: RELEASES_INDEX_URL.to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build from a variable lookup, keeping defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        RawRuntimeConfig {
            support_email: lookup("SUPPORT_EMAIL"),
            legacy_support_email: lookup("REACT_APP_SUPPORT_EMAIL"),
            app_version: lookup("APP_VERSION"),
            releases_url: lookup("RELEASES_URL"),
        }
        .into()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read `window.__RUNTIME_CONFIG__`, falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&window, &"__RUNTIME_CONFIG__".into()) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => config,
            Err(e) => {
                logging::log_config_error("window", &e.to_string());
                Self::default()
            }
        }
    }

    /// `mailto:` link for the "Report a Bug" button
    pub fn bug_report_mailto(&self) -> String {
        format!(
            "mailto:{}?subject={}",
            self.support_email,
            urlencoding::encode(BUG_REPORT_SUBJECT)
        )
    }
}

static RUNTIME_CONFIG: Lazy<RuntimeConfig> = Lazy::new(|| {
    #[cfg(not(target_arch = "wasm32"))]
    let (source, config) = ("env", RuntimeConfig::from_env());
    #[cfg(target_arch = "wasm32")]
    let (source, config) = ("window", RuntimeConfig::from_window());

    logging::log_config_loaded(source, &config.version_tag, !config.support_email.is_empty());
    config
});

/// Process-wide configuration, loaded on first access
pub fn runtime_config() -> &'static RuntimeConfig {
    &RUNTIME_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.support_email, "");
        assert_eq!(config.version_tag, "v1.0.0");
        assert_eq!(config.releases_url, RELEASES_INDEX_URL);
    }

    #[test]
    fn test_from_json_partial() {
        let config = RuntimeConfig::from_json(r#"{"SUPPORT_EMAIL": "ops@example.com"}"#).unwrap();
        assert_eq!(config.support_email, "ops@example.com");
        assert_eq!(config.version_tag, "v1.0.0");
    }

    #[test]
    fn test_from_json_accepts_react_app_alias() {
        let config =
            RuntimeConfig::from_json(r#"{"REACT_APP_SUPPORT_EMAIL": "help@example.com"}"#).unwrap();
        assert_eq!(config.support_email, "help@example.com");
    }

    #[test]
    fn test_from_json_prefers_support_email_over_legacy_key() {
        let config = RuntimeConfig::from_json(
            r#"{
                "SUPPORT_EMAIL": "ops@example.com",
                "REACT_APP_SUPPORT_EMAIL": "old@example.com",
                "APP_VERSION": "v2.0.0"
            }"#,
        )
        .unwrap();
        assert_eq!(config.support_email, "ops@example.com");
        assert_eq!(config.version_tag, "v2.0.0");
    }

    #[test]
    fn test_from_json_empty_values_keep_defaults() {
        let config =
            RuntimeConfig::from_json(r#"{"APP_VERSION": "", "RELEASES_URL": ""}"#).unwrap();
        assert_eq!(config.version_tag, "v1.0.0");
        assert_eq!(config.releases_url, RELEASES_INDEX_URL);
    }

    #[test]
    fn test_serialized_config_reads_back() {
        let config = RuntimeConfig {
            support_email: "ops@example.com".to_string(),
            version_tag: "v3.1.0".to_string(),
            releases_url: "https://example.com/releases".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RuntimeConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(RuntimeConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SUPPORT_EMAIL", "team@example.com"),
            ("APP_VERSION", "v2.3.4"),
            ("RELEASES_URL", ""),
        ]);
        let config = RuntimeConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.support_email, "team@example.com");
        assert_eq!(config.version_tag, "v2.3.4");
        assert_eq!(config.releases_url, RELEASES_INDEX_URL);
    }

    #[test]
    fn test_bug_report_mailto_uses_email_verbatim() {
        let config = RuntimeConfig {
            support_email: "not an email".to_string(),
            ..RuntimeConfig::default()
        };
        assert_eq!(
            config.bug_report_mailto(),
            "mailto:not an email?subject=Vision%20Deployments%20Bug%20Report"
        );
    }
}
