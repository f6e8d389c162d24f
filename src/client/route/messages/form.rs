use dioxus::prelude::*;

use crate::{
    client::component::{Modal, Notifications},
    model::{
        format::{self, AMPERSAND_CODES},
        message::{render_template, MessageDto, TemplateValues},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::message::{create_message, update_message},
    model::message::{CreateMessageDto, UpdateMessageDto},
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Values substituted into the live preview of the editor.
fn sample_values() -> TemplateValues {
    TemplateValues {
        player_name: Some("Steve".to_string()),
        rank: Some("&4Admin".to_string()),
        positional: vec!["10".to_string(), "lobby".to_string()],
    }
}

/// Create/edit dialog; editing when `message` holds a value.
///
/// The key is fixed once a message exists since it is the lookup handle used by the game.
#[component]
pub fn MessageFormModal(
    mut show: Signal<bool>,
    message: Signal<Option<MessageDto>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut notifications = use_context::<Notifications>();
    let mut key = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            let current = message.peek().clone();
            key.set(current.as_ref().map(|m| m.message_key.clone()).unwrap_or_default());
            content.set(current.as_ref().map(|m| m.content.clone()).unwrap_or_default());
            description.set(
                current
                    .as_ref()
                    .and_then(|m| m.description.clone())
                    .unwrap_or_default(),
            );
            error_message.set(None);
            should_submit.set(false);
        }
    });

    #[cfg(feature = "web")]
    let submit_future = use_resource(move || async move {
        if !should_submit() {
            return None;
        }

        let description = description.peek().trim().to_string();
        let description = (!description.is_empty()).then_some(description);
        let key = key.peek().trim().to_string();
        let content = content.peek().clone();
        let editing = message.peek().is_some();
        let result = if editing {
            update_message(
                &key,
                UpdateMessageDto {
                    content,
                    description,
                },
            )
            .await
        } else {
            create_message(CreateMessageDto {
                message_key: key,
                content,
                description,
            })
            .await
        };
        Some(result)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = submit_future.read_unchecked().as_ref() {
            match result {
                Ok(response) => {
                    notifications.success(
                        response
                            .message
                            .clone()
                            .unwrap_or_else(|| "Message saved".to_string()),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to save message: {}", err);
                    error_message.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if key().trim().is_empty() || content().is_empty() {
            error_message.set(Some("Key and content are required".to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let editing = message().is_some();
    let title = if editing { "Edit Message" } else { "Add Message" };
    let preview_html = format::render_html(
        &render_template(&content(), &sample_values()),
        &AMPERSAND_CODES,
    );

    rsx! {
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting,
            class: "max-w-2xl",
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                div {
                    class: "form-control flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", "Key" }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full font-mono",
                        placeholder: "welcome.join",
                        maxlength: "64",
                        value: "{key()}",
                        disabled: is_submitting || editing,
                        oninput: move |evt| key.set(evt.value()),
                    }
                }
                div {
                    class: "form-control flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", "Content" }
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full font-mono",
                        rows: "4",
                        placeholder: "&aWelcome &f%%s&a!",
                        value: "{content()}",
                        disabled: is_submitting,
                        oninput: move |evt| content.set(evt.value()),
                    }
                    div {
                        class: "mc-preview rounded px-3 py-2 text-sm min-h-10",
                        dangerous_inner_html: "{preview_html}",
                    }
                }
                div {
                    class: "form-control flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", "Description" }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        value: "{description()}",
                        disabled: is_submitting,
                        oninput: move |evt| description.set(evt.value()),
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
