use dioxus::prelude::*;

use crate::{
    client::component::{ConfirmationModal, FormattedText, Notifications},
    model::{format::AMPERSAND_CODES, message::MessageDto},
};

#[cfg(feature = "web")]
use crate::client::api::message::delete_message;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn MessagesTable(
    messages: Vec<MessageDto>,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<MessageDto>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut notifications = use_context::<Notifications>();
    let mut show_delete_modal = use_signal(|| false);
    let mut key_to_delete = use_signal(|| None::<String>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            match key_to_delete() {
                Some(key) => Some(delete_message(&key).await),
                None => None,
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(response) => {
                    notifications.success(
                        response
                            .message
                            .clone()
                            .unwrap_or_else(|| "Message deleted".to_string()),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                    is_deleting.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete message: {}", err);
                    notifications.error(err.message.clone());
                    is_deleting.set(false);
                }
            }
        }
    });

    rsx! {
        if messages.is_empty() {
            div {
                class: "text-center py-8 opacity-50",
                "No messages yet"
            }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Key" }
                            th { "Content" }
                            th { "Description" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for message in messages {
                            {
                                let delete_target = message.message_key.clone();
                                let edit_target = message.clone();
                                rsx! {
                                    tr {
                                        key: "{message.message_key}",
                                        td {
                                            code { class: "whitespace-nowrap", "{message.message_key}" }
                                        }
                                        td {
                                            div {
                                                class: "mc-preview rounded px-2 py-1 max-w-md truncate",
                                                FormattedText {
                                                    text: message.content.clone(),
                                                    dialect: AMPERSAND_CODES,
                                                }
                                            }
                                        }
                                        td {
                                            class: "text-sm opacity-70",
                                            {message.description.clone().unwrap_or_default()}
                                        }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm",
                                                    onclick: move |_| on_edit.call(edit_target.clone()),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    onclick: move |_| {
                                                        key_to_delete.set(Some(delete_target.clone()));
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

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Message".to_string(),
            message: rsx!(
                if let Some(key) = key_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{key}\"" }
                        "? The server will no longer find this key."
                    }
                }
            ),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            on_confirm: move |_| {
                is_deleting.set(true);
            },
        }
    }
}
