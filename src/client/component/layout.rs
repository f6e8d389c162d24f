use dioxus::prelude::*;

use crate::client::{
    component::{Header, NotificationList, Notifications},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    use_context_provider(Notifications::default);

    rsx!(div {
        Header {  }
        Outlet::<Route> {}
        NotificationList {  }
    })
}
