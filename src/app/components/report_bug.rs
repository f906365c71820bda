use dioxus::prelude::*;

use crate::config::runtime_config;

/// Opens a prefilled bug report mail to the configured support address
#[component]
pub fn ReportBugButton() -> Element {
    let href = runtime_config().bug_report_mailto();

    rsx! {
        a { class: "c-button c-button--ghost c-sidenav__report-bug", href: "{href}",
            span { class: "c-button__icon", "🐞" }
            b { "Report a Bug" }
        }
    }
}
