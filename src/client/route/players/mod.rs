mod modals;
mod table;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Notifications, Page, Pagination,
        },
        constant::{DEFAULT_PAGE_SIZE, SITE_NAME},
        model::error::ApiError,
    },
    model::{group::AvailableRankDto, player::PlayerListDto},
};

use table::PlayersTable;

#[cfg(feature = "web")]
use crate::client::api::{group::get_available_ranks, player::get_players};

#[component]
pub fn Players() -> Element {
    #[allow(unused_mut)]
    let mut notifications = use_context::<Notifications>();
    let mut page = use_signal(|| 1u64);
    let limit = use_signal(|| DEFAULT_PAGE_SIZE);
    let mut search = use_signal(String::new);
    let mut search_input = use_signal(String::new);
    let mut group = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut players = use_signal(|| None::<Result<PlayerListDto, ApiError>>);
    #[allow(unused_mut)]
    let mut ranks = use_signal(Vec::<AvailableRankDto>::new);

    // Fetch players - resource re-runs when paging, filters or refetch_trigger change
    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_players(page(), limit(), &search(), &group()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*fetch_future.read_unchecked() {
        Some(Ok(data)) => {
            players.set(Some(Ok(data.clone())));
        }
        Some(Err(err)) => {
            tracing::error!("Failed to fetch players: {}", err);
            players.set(Some(Err(err.clone())));
        }
        None => (),
    });

    #[cfg(feature = "web")]
    let ranks_future = use_resource(|| async move { get_available_ranks().await });

    #[cfg(feature = "web")]
    use_effect(move || match &*ranks_future.read_unchecked() {
        Some(Ok(data)) => ranks.set(data.clone()),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch available ranks: {}", err);
            notifications.error(format!("Failed to load ranks: {}", err));
        }
        None => (),
    });

    let on_search = move |evt: Event<FormData>| {
        evt.prevent_default();
        search.set(search_input());
        page.set(1);
    };

    rsx! {
        Title { "Players | {SITE_NAME}" }
        match players() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl",
                        div {
                            class: "flex flex-col sm:flex-row sm:items-center justify-between gap-4 mb-6",
                            h1 {
                                class: "text-lg sm:text-2xl",
                                "Players"
                            }
                            span {
                                class: "badge badge-neutral",
                                "{data.pagination.total} accounts"
                            }
                        }
                        form {
                            class: "flex flex-col sm:flex-row gap-2 mb-4",
                            onsubmit: on_search,
                            input {
                                r#type: "search",
                                class: "input input-bordered w-full sm:max-w-xs",
                                placeholder: "Search by name or ID...",
                                value: "{search_input()}",
                                oninput: move |evt| search_input.set(evt.value()),
                            }
                            select {
                                class: "select select-bordered",
                                value: "{group()}",
                                onchange: move |evt| {
                                    group.set(evt.value());
                                    page.set(1);
                                },
                                option { value: "", selected: group().is_empty(), "All ranks" }
                                for rank in data.groups.iter() {
                                    option {
                                        key: "{rank}",
                                        value: "{rank}",
                                        selected: *rank == group(),
                                        "{rank}"
                                    }
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                "Search"
                            }
                            if !search().is_empty() || !group().is_empty() {
                                button {
                                    r#type: "button",
                                    class: "btn btn-ghost",
                                    onclick: move |_| {
                                        search_input.set(String::new());
                                        search.set(String::new());
                                        group.set(String::new());
                                        page.set(1);
                                    },
                                    "Clear"
                                }
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                PlayersTable {
                                    players: data.players.clone(),
                                    ranks: ranks(),
                                    refetch_trigger,
                                }
                                Pagination {
                                    page,
                                    limit,
                                    data: data.pagination.clone(),
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! {
                LoadingPage { }
            },
        }
    }
}
