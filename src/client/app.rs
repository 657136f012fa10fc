use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Membership applications for the MSP Tech Club at MIU"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
