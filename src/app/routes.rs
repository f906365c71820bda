use crate::app::components::ErrorIcon;
use crate::app::layouts::SideNav;
use crate::shared::hooks::use_theme_provider;
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardLayout)]
    #[redirect("/", || Route::Modules {})]
    #[route("/modules")]
    Modules {},
    #[route("/modules/:name")]
    ModuleDetails { name: String },
    #[route("/templates")]
    Templates {},
    #[route("/nodes")]
    Nodes {},
    #[route("/helm")]
    HelmReleases {},
    #[route("/addons/mcp")]
    McpServer {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_theme_provider();

    use_effect(|| {
        tracing::info!("Dashboard app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn DashboardLayout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            aside { class: "c-layout__sider",
                SideNav {}
            }
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

// Page bodies are provided by the feature screens; these only mark the slot.

#[component]
fn Modules() -> Element {
    rsx! { PagePlaceholder { title: "Applications" } }
}

#[component]
fn ModuleDetails(name: String) -> Element {
    rsx! { PagePlaceholder { title: "{name}" } }
}

#[component]
fn Templates() -> Element {
    rsx! { PagePlaceholder { title: "Templates" } }
}

#[component]
fn Nodes() -> Element {
    rsx! { PagePlaceholder { title: "Nodes" } }
}

#[component]
fn HelmReleases() -> Element {
    rsx! { PagePlaceholder { title: "Helm releases" } }
}

#[component]
fn McpServer() -> Element {
    rsx! { PagePlaceholder { title: "MCP server" } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "c-page c-page--not-found",
            ErrorIcon { style: "font-size: 2rem;" }
            h1 { "Page not found" }
            p { class: "c-page__hint", "/{path}" }
        }
    }
}

#[component]
fn PagePlaceholder(title: String) -> Element {
    rsx! {
        div { class: "c-page",
            h1 { "{title}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MenuTree;
    use crate::domain::services::derive_navigation_state;
    use crate::shared::constants::PathConstants;

    #[test]
    fn test_route_paths_match_path_constants() {
        assert_eq!(Route::Modules {}.to_string(), PathConstants::MODULES);
        assert_eq!(Route::Templates {}.to_string(), PathConstants::TEMPLATES);
        assert_eq!(Route::Nodes {}.to_string(), PathConstants::NODES);
        assert_eq!(Route::HelmReleases {}.to_string(), PathConstants::HELM_RELEASES);
        assert_eq!(Route::McpServer {}.to_string(), PathConstants::ADDONS_MCP_SERVER);
    }

    #[test]
    fn test_mcp_route_opens_addons_group() {
        let tree = MenuTree::builtin();
        let state = derive_navigation_state(&tree, &Route::McpServer {}.to_string());
        assert_eq!(state.selected_key, "addons");
        assert!(state.is_open("addons"));
        assert_eq!(state.open_keys.len(), 1);
    }

    #[test]
    fn test_module_details_route_selects_modules() {
        let tree = MenuTree::builtin();
        let route = Route::ModuleDetails {
            name: "demo".to_string(),
        };
        assert_eq!(route.to_string(), "/modules/demo");
        let state = derive_navigation_state(&tree, &route.to_string());
        assert!(state.is_selected("modules"));
        assert!(state.open_keys.is_empty());
    }

    #[test]
    fn test_templates_route_closes_groups() {
        let tree = MenuTree::builtin();
        let state = derive_navigation_state(&tree, &Route::Templates {}.to_string());
        assert_eq!(state.selected_key, "templates");
        assert!(state.open_keys.is_empty());
    }
}
