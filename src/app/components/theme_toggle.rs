use dioxus::prelude::*;
use crate::domain::models::ThemeMode;
use crate::shared::hooks::{set_theme_mode, use_theme};

/// Light/dark switch in the sidebar footer.
/// Animated sun/moon with clouds and stars.
#[component]
pub fn ThemeToggle() -> Element {
    let mode = use_theme();

    let is_currently_light = mode() == ThemeMode::Light;

    let toggle_theme = move |_| {
        set_theme_mode(mode, mode().toggle());
    };

    // Tooltip shows what a click will do
    let tooltip = format!("Switch to {} mode", mode().toggle());

    let toggle_class = if is_currently_light {
        "c-theme-toggle c-theme-toggle--light"
    } else {
        "c-theme-toggle"
    };

    rsx! {
        div {
            class: "{toggle_class}",
            "data-tooltip": "{tooltip}",
            role: "button",
            tabindex: "0",
            onclick: toggle_theme,

            // Ball (sun/moon)
            div { class: "c-theme-toggle__ball" }

            // Stars (visible in dark mode)
            div { class: "c-theme-toggle__stars",
                span { class: "c-theme-toggle__star" }
                span { class: "c-theme-toggle__star" }
                span { class: "c-theme-toggle__star" }
            }

            // Clouds (visible in light mode)
            div { class: "c-theme-toggle__clouds",
                span { class: "c-theme-toggle__cloud" }
                span { class: "c-theme-toggle__cloud" }
            }
        }
    }
}
