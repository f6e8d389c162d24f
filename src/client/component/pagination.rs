use dioxus::prelude::*;

use crate::model::player::PaginationDto;

/// Page controls for 1-based server pagination.
///
/// Writes the chosen page and page size back into the given signals; the caller's
/// resource re-runs from there.
#[component]
pub fn Pagination(mut page: Signal<u64>, mut limit: Signal<u64>, data: PaginationDto) -> Element {
    let first = if data.total == 0 {
        0
    } else {
        data.page.saturating_sub(1) * data.limit + 1
    };
    let last = (data.page * data.limit).min(data.total);
    let pages = data.pages.max(1);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{limit()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            limit.set(value);
                            page.set(1);
                        }
                    },
                    for size in [10u64, 25, 50, 100] {
                        option {
                            value: "{size}",
                            selected: size == limit(),
                            "{size}"
                        }
                    }
                }
                span { "entries" }
            }
            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "Showing {first} to {last} of {data.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.page <= 1,
                        onclick: move |_| page.set(1),
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.page <= 1,
                        onclick: move |_| {
                            if page() > 1 {
                                page.set(page() - 1);
                            }
                        },
                        "‹"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm no-animation",
                        "Page {data.page} of {pages}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.page >= pages,
                        onclick: move |_| {
                            if page() < pages {
                                page.set(page() + 1);
                            }
                        },
                        "›"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.page >= pages,
                        onclick: move |_| page.set(pages),
                        "»"
                    }
                }
            }
        }
    )
}
