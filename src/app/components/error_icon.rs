use dioxus::prelude::*;

use crate::domain::models::ColorSpec;
use crate::domain::services::color_for_mode;
use crate::shared::hooks::use_theme;

/// Two-tone exclamation circle used for failed/degraded resources
#[component]
pub fn ErrorIcon(#[props(default)] style: String) -> Element {
    let mode = use_theme();
    let color = color_for_mode(mode());

    rsx! {
        TwoToneExclamation { color, style }
    }
}

#[component]
fn TwoToneExclamation(color: ColorSpec, style: String) -> Element {
    let primary = color.primary().to_string();
    // A solid color still needs a tinted fill behind the mark
    let (fill, fill_opacity) = match color.secondary() {
        Some(secondary) => (secondary.to_string(), "1"),
        None => (primary.clone(), "0.15"),
    };

    rsx! {
        span { class: "c-icon c-icon--error", role: "img", style: "{style}",
            svg {
                view_box: "0 0 24 24",
                width: "1em",
                height: "1em",
                circle {
                    cx: "12",
                    cy: "12",
                    r: "10",
                    fill: "{fill}",
                    fill_opacity: "{fill_opacity}",
                    stroke: "{primary}",
                    stroke_width: "2",
                }
                rect { x: "11", y: "6", width: "2", height: "8", rx: "1", fill: "{primary}" }
                circle { cx: "12", cy: "17.5", r: "1.25", fill: "{primary}" }
            }
        }
    }
}
