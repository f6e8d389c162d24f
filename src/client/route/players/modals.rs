use dioxus::prelude::*;

use crate::client::component::{ConfirmationModal, Modal, Notifications};

use super::table::PlayerRef;

#[cfg(feature = "web")]
use crate::client::api::player::{delete_player, update_player_name};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn RenamePlayerModal(
    mut show: Signal<bool>,
    player: Signal<PlayerRef>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut notifications = use_context::<Notifications>();
    let mut name = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            name.set(player().map(|(_, name)| name).unwrap_or_default());
            error_message.set(None);
            should_submit.set(false);
        }
    });

    #[cfg(feature = "web")]
    let rename_future = use_resource(move || async move {
        if should_submit() {
            let new_name = name.peek().trim().to_string();
            match player() {
                Some((id, _)) => Some(update_player_name(id, new_name).await),
                None => None,
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = rename_future.read_unchecked().as_ref() {
            match result {
                Ok(response) => {
                    notifications.success(
                        response
                            .message
                            .clone()
                            .unwrap_or_else(|| "Player updated".to_string()),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to rename player: {}", err);
                    error_message.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error_message.set(Some("Name is required".to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx! {
        Modal {
            show,
            title: "Rename Player".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                div {
                    class: "form-control flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", "Player name" }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        maxlength: "16",
                        value: "{name()}",
                        disabled: is_submitting,
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                if let Some(message) = error_message() {
                    div {
                        class: "alert alert-error",
                        span { "{message}" }
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        disabled: is_submitting,
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting,
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Save"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DeletePlayerModal(
    mut show: Signal<bool>,
    player: Signal<PlayerRef>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut notifications = use_context::<Notifications>();
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            match player() {
                Some((id, _)) => Some(delete_player(id).await),
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
                            .unwrap_or_else(|| "Player deleted".to_string()),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                    is_deleting.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete player: {}", err);
                    notifications.error(err.message.clone());
                    is_deleting.set(false);
                }
            }
        }
    });

    rsx! {
        ConfirmationModal {
            show,
            title: "Delete Player".to_string(),
            message: rsx!(
                if let Some((_, name)) = player() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{name}\"" }
                        "? The account row is removed from the database."
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
