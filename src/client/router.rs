use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Admin, Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/admin")]
    Admin {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
