mod form;
mod game_preview;
mod table;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::message::{MessageDto, PLAYER_PLACEHOLDER, RANK_PLACEHOLDER},
};

use form::MessageFormModal;
use game_preview::GamePreview;
use table::MessagesTable;

#[cfg(feature = "web")]
use crate::client::api::message::get_messages;

#[component]
pub fn Messages() -> Element {
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut messages = use_signal(|| None::<Result<Vec<MessageDto>, ApiError>>);
    let mut show_form_modal = use_signal(|| false);
    let mut message_to_edit = use_signal(|| None::<MessageDto>);

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_messages().await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*fetch_future.read_unchecked() {
        Some(Ok(data)) => {
            messages.set(Some(Ok(data.clone())));
        }
        Some(Err(err)) => {
            tracing::error!("Failed to fetch messages: {}", err);
            messages.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "Messages | {SITE_NAME}" }
        match messages() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex items-center justify-between gap-4",
                            div {
                                h1 {
                                    class: "text-lg sm:text-2xl",
                                    "Messages"
                                }
                                p {
                                    class: "text-sm opacity-60",
                                    "Placeholders: "
                                    code { "{PLAYER_PLACEHOLDER}" }
                                    " player name, "
                                    code { "{RANK_PLACEHOLDER}" }
                                    " rank, "
                                    code { "{{0}}, {{1}}" }
                                    " positional values. Colors use "
                                    code { "&" }
                                    " codes."
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    message_to_edit.set(None);
                                    show_form_modal.set(true);
                                },
                                "Add Message"
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                MessagesTable {
                                    messages: data.clone(),
                                    refetch_trigger,
                                    on_edit: move |message: MessageDto| {
                                        message_to_edit.set(Some(message));
                                        show_form_modal.set(true);
                                    },
                                }
                            }
                        }
                        GamePreview { refetch_trigger }
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

        MessageFormModal {
            show: show_form_modal,
            message: message_to_edit,
            refetch_trigger,
        }
    }
}
