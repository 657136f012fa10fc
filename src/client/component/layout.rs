use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        header {
            class: "site-header",
            Link {
                to: Route::Home {},
                class: "site-title",
                "{SITE_NAME}"
            }
            nav {
                Link {
                    to: Route::Admin {},
                    class: "btn btn-outline",
                    "Admin"
                }
            }
        }
        Outlet::<Route> {}
    })
}
