//! Fallback page for every path no other route claims

use dioxus::prelude::*;

use super::status::{use_view, LoadFailed, Loading};
use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let view = use_view(0);
    let path = format!("/{}", segments.join("/"));

    match &*view.read_unchecked() {
        Some(Ok(view)) => rsx! {
            section { class: "page not-found",
                h1 { "404" }
                p { "{view.title()}" }
                code { "{path}" }
                Link { to: Route::Index {}, class: "tab-item", "Back to start" }
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
