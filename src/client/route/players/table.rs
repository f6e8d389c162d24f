use chrono::Utc;
use dioxus::prelude::*;

use crate::{
    client::component::{FormattedText, Notifications},
    model::{
        format::{self, SECTION_CODES},
        group::AvailableRankDto,
        player::{format_last_seen, head_url, PlayerDto, PlayerStatus},
    },
};

use super::modals::{DeletePlayerModal, RenamePlayerModal};

#[cfg(feature = "web")]
use crate::client::{api::player::update_player_rank, constant::CLOCK_TICK_MS};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Player selected for a modal action: `(id, name)`.
pub type PlayerRef = Option<(i64, String)>;

#[component]
pub fn PlayersTable(
    players: Vec<PlayerDto>,
    ranks: Vec<AvailableRankDto>,
    refetch_trigger: Signal<u32>,
) -> Element {
    // Online status is derived from the fetched timestamps and refreshed on this clock
    #[allow(unused_mut)]
    let mut current_time = use_signal(Utc::now);

    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(CLOCK_TICK_MS).await;
            current_time.set(Utc::now());
        }
    });

    let mut show_rename_modal = use_signal(|| false);
    let mut player_to_rename = use_signal(|| None::<(i64, String)>);
    let mut show_delete_modal = use_signal(|| false);
    let mut player_to_delete = use_signal(|| None::<(i64, String)>);

    rsx! {
        if players.is_empty() {
            div {
                class: "text-center py-8 opacity-50",
                "No players found"
            }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Player" }
                            th { "Rank" }
                            th { "Status" }
                            th { "Last seen" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for player in players {
                            {
                                let now = current_time();
                                let status = PlayerStatus::from_last_login(player.last_login, now);
                                let last_seen = format_last_seen(player.last_login, now);
                                let rename_target = (player.id, player.name.clone());
                                let delete_target = (player.id, player.name.clone());
                                rsx! {
                                    tr {
                                        key: "{player.id}",
                                        td {
                                            div {
                                                class: "flex items-center gap-3",
                                                img {
                                                    class: "w-8 h-8 rounded",
                                                    src: head_url(&player.name, 32),
                                                    alt: "{player.name}",
                                                }
                                                div {
                                                    div { class: "font-semibold", "{player.name}" }
                                                    div { class: "text-xs opacity-50", "#{player.id}" }
                                                }
                                            }
                                        }
                                        td {
                                            div {
                                                class: "flex flex-col gap-1",
                                                RankSelect {
                                                    player_id: player.id,
                                                    current: player.rank.clone().unwrap_or_default(),
                                                    ranks: ranks.clone(),
                                                    refetch_trigger,
                                                }
                                                if let Some(tag) = player.tag.as_ref().filter(|tag| !tag.is_empty()) {
                                                    if Some(tag) != player.rank.as_ref() {
                                                        span {
                                                            class: "text-xs mc-preview rounded px-1 w-fit",
                                                            FormattedText { text: tag.clone() }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                        td {
                                            span {
                                                class: if status == PlayerStatus::Online { "badge badge-success" } else { "badge badge-ghost" },
                                                "{status.label()}"
                                            }
                                        }
                                        td {
                                            class: "whitespace-nowrap",
                                            "{last_seen}"
                                        }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm",
                                                    onclick: move |_| {
                                                        player_to_rename.set(Some(rename_target.clone()));
                                                        show_rename_modal.set(true);
                                                    },
                                                    "Rename"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    onclick: move |_| {
                                                        player_to_delete.set(Some(delete_target.clone()));
                                                        show_delete_modal.set(true);
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        RenamePlayerModal {
            show: show_rename_modal,
            player: player_to_rename,
            refetch_trigger,
        }
        DeletePlayerModal {
            show: show_delete_modal,
            player: player_to_delete,
            refetch_trigger,
        }
    }
}

/// Per-row rank picker applying the rank/tag rule on change.
#[component]
fn RankSelect(
    player_id: i64,
    current: String,
    ranks: Vec<AvailableRankDto>,
    refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut notifications = use_context::<Notifications>();
    #[allow(unused_mut)]
    let mut is_updating = use_signal(|| false);
    let known = ranks.iter().any(|rank| rank.value == current);

    rsx! {
        select {
            class: "select select-bordered select-sm w-full max-w-xs",
            disabled: is_updating(),
            onchange: move |evt| {
                let rank = evt.value();
                if rank.is_empty() {
                    return;
                }

                #[cfg(feature = "web")]
                {
                    let mut refetch_trigger = refetch_trigger;
                    is_updating.set(true);
                    spawn(async move {
                        match update_player_rank(player_id, rank).await {
                            Ok(response) => {
                                let data = response.data;
                                notifications.success(response.message.unwrap_or_else(|| {
                                    format!("Rank set to {} (tag {})", data.rank, data.tag)
                                }));
                                refetch_trigger.set(refetch_trigger() + 1);
                            }
                            Err(err) => {
                                tracing::error!("Failed to update rank of {}: {}", player_id, err);
                                notifications.error(err.message);
                            }
                        }
                        is_updating.set(false);
                    });
                }
                #[cfg(not(feature = "web"))]
                let _ = (rank, refetch_trigger);
            },
            if current.is_empty() {
                option { value: "", selected: true, disabled: true, "No rank" }
            } else if !known {
                option { value: "{current}", selected: true, "{current}" }
            }
            for rank in ranks {
                option {
                    key: "{rank.value}",
                    value: "{rank.value}",
                    selected: rank.value == current,
                    {format::strip(&rank.label, &SECTION_CODES)}
                }
            }
        }
    }
}
