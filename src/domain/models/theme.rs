use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Theme mode reported by the theming layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(AppError::InvalidConfiguration(format!(
                "unknown theme mode '{}'",
                other
            ))),
        }
    }
}

/// Icon color: one solid color, or a primary/secondary pair.
///
/// Serializes as `"#rrggbb"` or `["#rrggbb", "#rrggbb"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Solid(String),
    TwoTone(String, String),
}

impl ColorSpec {
    pub fn primary(&self) -> &str {
        match self {
            ColorSpec::Solid(color) => color,
            ColorSpec::TwoTone(primary, _) => primary,
        }
    }

    pub fn secondary(&self) -> Option<&str> {
        match self {
            ColorSpec::Solid(_) => None,
            ColorSpec::TwoTone(_, secondary) => Some(secondary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_parse_strict() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(AppError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_theme_mode_toggle() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_color_spec_serializes_like_two_tone_prop() {
        let solid = ColorSpec::Solid("#ffcc00".to_string());
        let pair = ColorSpec::TwoTone("#ffcc00".to_string(), "#4f4002".to_string());
        assert_eq!(serde_json::to_string(&solid).unwrap(), r##""#ffcc00""##);
        assert_eq!(
            serde_json::to_string(&pair).unwrap(),
            r##"["#ffcc00","#4f4002"]"##
        );
        assert_eq!(pair.primary(), "#ffcc00");
        assert_eq!(pair.secondary(), Some("#4f4002"));
        assert_eq!(solid.secondary(), None);
    }
}
