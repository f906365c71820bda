use dioxus::prelude::*;

use crate::domain::models::ThemeMode;
use crate::shared::logging;

/// Install the theme mode signal for the whole app.
///
/// Starts in dark mode and switches to the system preference once the
/// page is mounted.
pub fn use_theme_provider() -> Signal<ThemeMode> {
    let mut mode = use_context_provider(|| Signal::new(ThemeMode::default()));

    use_effect(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let script = r#"
                    return window.matchMedia('(prefers-color-scheme: dark)').matches;
                "#;
                if let Ok(result) = document::eval(script).await {
                    if let Some(is_dark) = result.as_bool() {
                        let preferred = if is_dark { ThemeMode::Dark } else { ThemeMode::Light };
                        mode.set(preferred);
                        apply_theme_class(preferred).await;
                    }
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                apply_theme_class(mode()).await;
            }
        });
    });

    mode
}

/// Current theme mode from the provider installed by [`use_theme_provider`]
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

/// Switch the mode and restyle the document
pub fn set_theme_mode(mut signal: Signal<ThemeMode>, mode: ThemeMode) {
    signal.set(mode);
    logging::log_theme_change(mode.as_str());
    spawn(async move {
        apply_theme_class(mode).await;
    });
}

/// Apply theme CSS class to document element
#[cfg(target_arch = "wasm32")]
async fn apply_theme_class(mode: ThemeMode) {
    let script = format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.classList.remove('light', 'dark');
            root.classList.add('{}');
        }})()
    "#,
        mode.as_str()
    );

    let _ = document::eval(&script).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn apply_theme_class(_mode: ThemeMode) {
    // No document outside the browser
}
