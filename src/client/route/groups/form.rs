use dioxus::prelude::*;

use crate::{
    client::component::{FormattedText, Modal, Notifications},
    model::group::{GroupDto, TAG_PERMISSION_PREFIX},
};

#[cfg(feature = "web")]
use crate::{
    client::api::group::{create_group, update_group},
    model::group::{CreateGroupDto, UpdateGroupDto},
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[derive(Clone, Default, PartialEq)]
struct GroupForm {
    internal_name: String,
    display_name: String,
    prefix: String,
    visualization: String,
    permissions: String,
}

impl GroupForm {
    fn from_group(group: &GroupDto) -> Self {
        Self {
            internal_name: group.internal_name.clone(),
            display_name: group.display_name.clone(),
            prefix: group.prefix.clone().unwrap_or_default(),
            visualization: group.visualization.clone().unwrap_or_default(),
            permissions: group.permissions.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.internal_name.trim().is_empty() || self.display_name.trim().is_empty() {
            return Err("Internal name and display name are required".to_string());
        }
        if self.internal_name.chars().count() > 32 {
            return Err("Internal name must be at most 32 characters".to_string());
        }
        if self.display_name.chars().count() > 64 {
            return Err("Display name must be at most 64 characters".to_string());
        }
        Ok(())
    }
}

#[cfg(feature = "web")]
fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Create/edit dialog; editing when `group` holds a value.
#[component]
pub fn GroupFormModal(
    mut show: Signal<bool>,
    group: Signal<Option<GroupDto>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut notifications = use_context::<Notifications>();
    let mut form = use_signal(GroupForm::default);
    let mut should_submit = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            let initial = group
                .peek()
                .as_ref()
                .map(GroupForm::from_group)
                .unwrap_or_default();
            form.set(initial);
            error_message.set(None);
            should_submit.set(false);
        }
    });

    #[cfg(feature = "web")]
    let submit_future = use_resource(move || async move {
        if !should_submit() {
            return None;
        }

        let values = form.peek().clone();
        let editing = group.peek().as_ref().map(|group| group.id);
        let result = match editing {
            Some(id) => {
                update_group(
                    id,
                    UpdateGroupDto {
                        internal_name: values.internal_name.trim().to_string(),
                        display_name: values.display_name.clone(),
                        prefix: optional(&values.prefix),
                        visualization: optional(&values.visualization),
                        permissions: optional(&values.permissions),
                    },
                )
                .await
            }
            None => {
                create_group(CreateGroupDto {
                    internal_name: values.internal_name.trim().to_string(),
                    display_name: values.display_name.clone(),
                    prefix: optional(&values.prefix),
                    visualization: optional(&values.visualization),
                    permissions: optional(&values.permissions),
                })
                .await
            }
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
                            .unwrap_or_else(|| "Group saved".to_string()),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to save group: {}", err);
                    error_message.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        match form().validate() {
            Ok(()) => {
                error_message.set(None);
                should_submit.set(true);
            }
            Err(message) => error_message.set(Some(message)),
        }
    };

    let is_submitting = should_submit();
    let title = if group().is_some() {
        "Edit Group"
    } else {
        "Add Group"
    };
    let values = form();
    let is_tag = values.permissions.starts_with(TAG_PERMISSION_PREFIX);

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
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    FormField {
                        label: "Internal name",
                        value: values.internal_name.clone(),
                        placeholder: "Admin",
                        maxlength: 32,
                        disabled: is_submitting,
                        oninput: move |value: String| form.write().internal_name = value,
                    }
                    FormField {
                        label: "Display name",
                        value: values.display_name.clone(),
                        placeholder: "§4Admin",
                        maxlength: 64,
                        disabled: is_submitting,
                        oninput: move |value: String| form.write().display_name = value,
                        preview: values.display_name.clone(),
                    }
                    FormField {
                        label: "Prefix",
                        value: values.prefix.clone(),
                        placeholder: "§4§lADMIN §4",
                        maxlength: 64,
                        disabled: is_submitting,
                        oninput: move |value: String| form.write().prefix = value,
                        preview: format!("{}Steve", values.prefix),
                    }
                    FormField {
                        label: "Visualization",
                        value: values.visualization.clone(),
                        placeholder: "Admin",
                        maxlength: 64,
                        disabled: is_submitting,
                        oninput: move |value: String| form.write().visualization = value,
                        preview: values.visualization.clone(),
                    }
                }
                div {
                    class: "form-control flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", "Permissions" }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "rank.admin or {TAG_PERMISSION_PREFIX}vip",
                        value: "{values.permissions}",
                        disabled: is_submitting,
                        oninput: move |evt| form.write().permissions = evt.value(),
                    }
                    span {
                        class: "text-xs opacity-60",
                        if is_tag {
                            "Tag group: assigning it keeps the player's rank and only changes their tag."
                        } else {
                            "Rank group: prefix with \"{TAG_PERMISSION_PREFIX}\" to make it a cosmetic tag."
                        }
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
fn FormField(
    label: &'static str,
    value: String,
    placeholder: &'static str,
    maxlength: u32,
    disabled: bool,
    oninput: EventHandler<String>,
    preview: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "form-control flex flex-col gap-2",
            label {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder,
                maxlength: "{maxlength}",
                value: "{value}",
                disabled,
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(preview) = preview {
                div {
                    class: "mc-preview rounded px-2 py-1 text-sm min-h-8",
                    FormattedText { text: preview }
                }
            }
        }
    }
}
