use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Page {
            class: "centered",
            h1 { "404" }
            p { "This page does not exist." }
            Link {
                to: Route::Home {},
                class: "btn btn-outline",
                "Back to the application"
            }
        }
    )
}
