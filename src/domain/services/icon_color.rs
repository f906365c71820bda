use crate::domain::models::{ColorSpec, ThemeMode};
use crate::shared::constants::{WARNING_DARK_BACKGROUND_COLOR, WARNING_PRIMARY_COLOR};

/// Warning icon color for a theme mode string.
///
/// Only `"light"` gets the solid color; every other value, including
/// unknown modes, gets the dark two-tone pair.
pub fn color_for(mode: &str) -> ColorSpec {
    if mode == ThemeMode::Light.as_str() {
        ColorSpec::Solid(WARNING_PRIMARY_COLOR.to_string())
    } else {
        ColorSpec::TwoTone(
            WARNING_PRIMARY_COLOR.to_string(),
            WARNING_DARK_BACKGROUND_COLOR.to_string(),
        )
    }
}

pub fn color_for_mode(mode: ThemeMode) -> ColorSpec {
    color_for(mode.as_str())
}
