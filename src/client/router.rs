use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Groups, Messages, NotFound, Players};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Players {},

    #[route("/groups")]
    Groups {},

    #[route("/messages")]
    Messages {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
