use dioxus::prelude::*;

use crate::config::runtime_config;
use crate::domain::services::ChangelogLinkResolver;

/// Running version, linked to its release notes
#[component]
pub fn VersionTag() -> Element {
    let config = runtime_config();
    let href = ChangelogLinkResolver::new(&config.releases_url).resolve(&config.version_tag);

    rsx! {
        div { class: "c-sidenav__version",
            a {
                class: "c-sidenav__taglink",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{config.version_tag}"
            }
        }
    }
}
