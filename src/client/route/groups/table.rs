use dioxus::prelude::*;

use crate::{
    client::component::{ConfirmationModal, FormattedText, Notifications},
    model::group::GroupDto,
};

#[cfg(feature = "web")]
use crate::client::api::group::delete_group;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn GroupsTable(
    groups: Vec<GroupDto>,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<GroupDto>,
) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut notifications = use_context::<Notifications>();
    let mut show_delete_modal = use_signal(|| false);
    let mut group_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);

    // Deletion is rejected server-side while any player holds the rank
    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            match group_to_delete() {
                Some((id, _)) => Some(delete_group(id).await),
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
                            .unwrap_or_else(|| "Group deleted".to_string()),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                    is_deleting.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete group: {}", err);
                    notifications.error(err.message.clone());
                    show_delete_modal.set(false);
                    is_deleting.set(false);
                }
            }
        }
    });

    rsx! {
        if groups.is_empty() {
            div {
                class: "text-center py-8 opacity-50",
                "No groups yet"
            }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Internal name" }
                            th { "Display name" }
                            th { "Chat preview" }
                            th { "Type" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for group in groups {
                            {
                                let is_tag = group.is_tag();
                                let prefix = group.prefix.clone().unwrap_or_default();
                                let delete_target = (group.id, group.internal_name.clone());
                                let edit_target = group.clone();
                                rsx! {
                                    tr {
                                        key: "{group.id}",
                                        td { class: "opacity-50", "{group.id}" }
                                        td {
                                            code { "{group.internal_name}" }
                                        }
                                        td {
                                            span {
                                                class: "mc-preview rounded px-2 py-1",
                                                FormattedText { text: group.display_name.clone() }
                                            }
                                        }
                                        td {
                                            span {
                                                class: "mc-preview rounded px-2 py-1 whitespace-nowrap",
                                                FormattedText { text: format!("{}Steve", prefix) }
                                            }
                                        }
                                        td {
                                            if is_tag {
                                                span { class: "badge badge-secondary", "Tag" }
                                            } else {
                                                span { class: "badge badge-primary", "Rank" }
                                            }
                                            if let Some(permissions) = group.permissions.as_ref().filter(|p| !p.is_empty()) {
                                                div { class: "text-xs opacity-50 mt-1", "{permissions}" }
                                            }
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
                                                        group_to_delete.set(Some(delete_target.clone()));
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
            title: "Delete Group".to_string(),
            message: rsx!(
                if let Some((_, name)) = group_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{name}\"" }
                        "? Groups still assigned to players cannot be deleted."
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
