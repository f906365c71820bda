use crate::app::components::{ReportBugButton, ThemeToggle, VersionTag};
use crate::app::routes::Route;
use crate::domain::models::{MenuNode, NavigationState};
use crate::shared::hooks::{toggle_group, use_navigation};
use dioxus::prelude::*;

/// Persistent dashboard sidebar.
///
/// Reads the current route, feeds it to the navigation synchronizer and
/// renders the visible part of the menu tree from the resulting state.
#[component]
pub fn SideNav() -> Element {
    let route = use_route::<Route>();
    let sync = use_navigation(route.to_string());

    let guard = sync.read();
    let state = guard.state().clone();
    let items: Vec<MenuNode> = guard
        .tree()
        .items()
        .iter()
        .filter(|node| !node.hidden)
        .cloned()
        .collect();
    drop(guard);

    let on_toggle = move |key: String| toggle_group(sync, &key);

    rsx! {
        div { class: "c-sidenav",
            Link { to: Route::Modules {}, class: "c-sidenav__logo",
                span { class: "c-sidenav__brand", "Cyclops" }
            }
            nav { class: "c-sidenav__menu c-sidenav__menu--dark",
                ul {
                    for node in items {
                        MenuEntry {
                            key: "{node.key}",
                            node: node.clone(),
                            state: state.clone(),
                            on_toggle,
                        }
                    }
                }
            }
            div { class: "c-sidenav__footer",
                ReportBugButton {}
                ThemeToggle {}
                VersionTag {}
            }
        }
    }
}

#[component]
fn MenuEntry(node: MenuNode, state: NavigationState, on_toggle: EventHandler<String>) -> Element {
    let icon = node.icon.clone().unwrap_or_default();

    if node.is_group() {
        let is_open = state.is_open(&node.key);
        let group_class = if is_open {
            "c-sidenav__group c-sidenav__group--open"
        } else {
            "c-sidenav__group"
        };
        let children: Vec<MenuNode> = node
            .children()
            .iter()
            .filter(|child| !child.hidden)
            .cloned()
            .collect();
        let key = node.key.clone();

        return rsx! {
            li { class: "{group_class}",
                button {
                    class: "c-sidenav__group-title",
                    onclick: move |_| on_toggle.call(key.clone()),
                    span { class: "c-sidenav__icon", "data-icon": "{icon}" }
                    span { "{node.label}" }
                    span { class: "c-sidenav__arrow" }
                }
                if is_open {
                    ul { class: "c-sidenav__submenu",
                        for child in children {
                            MenuEntry {
                                key: "{child.key}",
                                node: child.clone(),
                                state: state.clone(),
                                on_toggle,
                            }
                        }
                    }
                }
            }
        };
    }

    let item_class = if state.is_selected(&node.key) {
        "c-sidenav__item c-sidenav__item--selected"
    } else {
        "c-sidenav__item"
    };
    let target = node.link_target.clone().unwrap_or_default();

    rsx! {
        li { class: "{item_class}",
            Link { to: target,
                span { class: "c-sidenav__icon", "data-icon": "{icon}" }
                span { "{node.label}" }
            }
        }
    }
}
