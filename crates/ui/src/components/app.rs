//! Main application component with routing

use dioxus::prelude::*;
use tracing::{error, info};

use super::status::{use_view, LoadFailed, Loading};
use crate::routes::Route;
use crate::styles::CUSTOM_STYLES;
use crate::views::route_table;

/// Main application component
#[component]
pub fn App() -> Element {
    let table = use_context_provider(|| match route_table() {
        Ok(table) => {
            info!(?table, "route table ready");
            Some(table)
        }
        Err(err) => {
            error!(%err, "route table is invalid");
            None
        }
    });

    rsx! {
        style { {CUSTOM_STYLES} }

        if table.is_some() {
            Router::<Route> {}
        } else {
            LoadFailed { message: "The route table could not be built.".to_string() }
        }
    }
}

/// Layout component wrapping the root route and its children
#[component]
pub fn MainLayout() -> Element {
    let view = use_view(0);
    let route: Route = use_route();
    let is_index = matches!(route, Route::Index {});

    match &*view.read_unchecked() {
        Some(Ok(view)) => rsx! {
            div {
                class: "main-container",

                div { class: "title-bar",
                    span { class: "title-text", "{view.title()}" }

                    div { class: "tab-bar",
                        Link {
                            to: Route::Index {},
                            class: if is_index { "tab-item tab-active" } else { "tab-item" },
                            "Home"
                        }
                    }
                }

                // Child routes render here
                div { class: "content-area",
                    Outlet::<Route> {}
                }
            }
        },
        Some(Err(message)) => rsx! {
            LoadFailed { message: message.clone() }
        },
        None => rsx! {
            Loading {}
        },
    }
}
