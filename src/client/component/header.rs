use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaComments, FaCubes, FaLayerGroup, FaUsers},
    Icon,
};

use crate::client::{constant::SITE_NAME, router::Route};

#[cfg(feature = "web")]
use crate::client::{api::health::get_health, constant::HEALTH_POLL_MS};

#[derive(Clone, Copy, PartialEq)]
enum ApiStatus {
    Checking,
    Online,
    Offline,
}

#[component]
pub fn Header() -> Element {
    #[allow(unused_mut)]
    let mut status = use_signal(|| ApiStatus::Checking);

    // Poll the health endpoint for the lifetime of the layout
    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            let next = match get_health().await {
                Ok(health) if health.is_online() => ApiStatus::Online,
                _ => ApiStatus::Offline,
            };
            status.set(next);
            gloo_timers::future::TimeoutFuture::new(HEALTH_POLL_MS).await;
        }
    });

    let (badge_class, badge_text) = match status() {
        ApiStatus::Checking => ("badge-ghost", "Checking"),
        ApiStatus::Online => ("badge-success", "API online"),
        ApiStatus::Offline => ("badge-error", "API offline"),
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Players {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaCubes
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            NavLink { to: Route::Players {}, label: "Players", icon: NavIcon::Players }
            NavLink { to: Route::Groups {}, label: "Groups", icon: NavIcon::Groups }
            NavLink { to: Route::Messages {}, label: "Messages", icon: NavIcon::Messages }
            span {
                class: "badge {badge_class} hidden sm:inline-flex",
                "{badge_text}"
            }
        }
    })
}

#[derive(Clone, Copy, PartialEq)]
enum NavIcon {
    Players,
    Groups,
    Messages,
}

#[component]
fn NavLink(to: Route, label: &'static str, icon: NavIcon) -> Element {
    let current = use_route::<Route>();
    let class = if current == to {
        "btn btn-primary"
    } else {
        "btn btn-outline"
    };

    rsx!(
        Link {
            to,
            class: "{class} flex gap-2 items-center",
            match icon {
                NavIcon::Players => rsx!(Icon { width: 16, height: 16, icon: FaUsers }),
                NavIcon::Groups => rsx!(Icon { width: 16, height: 16, icon: FaLayerGroup }),
                NavIcon::Messages => rsx!(Icon { width: 16, height: 16, icon: FaComments }),
            }
            span { class: "hidden md:inline", "{label}" }
        }
    )
}
