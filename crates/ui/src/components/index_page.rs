//! Index page, the default child of the main layout

use dioxus::prelude::*;

use super::status::{use_view, LoadFailed, Loading};

#[component]
pub fn IndexPage() -> Element {
    let view = use_view(1);

    match &*view.read_unchecked() {
        Some(Ok(view)) => rsx! {
            section { class: "page",
                h1 { "{view.title()}" }
                p { "Pick a destination from the navigation bar to get started." }
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
