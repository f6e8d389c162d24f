mod form;
mod reference;
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
    model::{format::SECTION_CODES, group::GroupDto},
};

use form::GroupFormModal;
use reference::CodeReference;
use table::GroupsTable;

#[cfg(feature = "web")]
use crate::client::api::group::get_groups;

#[component]
pub fn Groups() -> Element {
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut groups = use_signal(|| None::<Result<Vec<GroupDto>, ApiError>>);
    let mut show_form_modal = use_signal(|| false);
    let mut group_to_edit = use_signal(|| None::<GroupDto>);
    let mut show_reference = use_signal(|| false);

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_groups().await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*fetch_future.read_unchecked() {
        Some(Ok(data)) => {
            groups.set(Some(Ok(data.clone())));
        }
        Some(Err(err)) => {
            tracing::error!("Failed to fetch groups: {}", err);
            groups.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "Groups | {SITE_NAME}" }
        match groups() {
            Some(Ok(data)) => {
                let tag_count = data.iter().filter(|group| group.is_tag()).count();
                let rank_count = data.len() - tag_count;
                rsx! {
                    Page {
                        class: "flex flex-col items-center w-full h-full",
                        div {
                            class: "w-full max-w-6xl",
                            div {
                                class: "flex items-center justify-between gap-4 mb-6",
                                h1 {
                                    class: "text-lg sm:text-2xl",
                                    "Groups"
                                }
                                div {
                                    class: "flex gap-2",
                                    button {
                                        class: "btn btn-outline",
                                        onclick: move |_| show_reference.set(!show_reference()),
                                        if show_reference() { "Hide codes" } else { "Color codes" }
                                    }
                                    button {
                                        class: "btn btn-primary",
                                        onclick: move |_| {
                                            group_to_edit.set(None);
                                            show_form_modal.set(true);
                                        },
                                        "Add Group"
                                    }
                                }
                            }
                            div {
                                class: "stats stats-vertical sm:stats-horizontal bg-base-200 w-full mb-6",
                                div {
                                    class: "stat",
                                    div { class: "stat-title", "Groups" }
                                    div { class: "stat-value", "{data.len()}" }
                                }
                                div {
                                    class: "stat",
                                    div { class: "stat-title", "Ranks" }
                                    div { class: "stat-value", "{rank_count}" }
                                }
                                div {
                                    class: "stat",
                                    div { class: "stat-title", "Tags" }
                                    div { class: "stat-value", "{tag_count}" }
                                }
                            }
                            if show_reference() {
                                CodeReference { table: SECTION_CODES }
                            }
                            div {
                                class: "card bg-base-200",
                                div {
                                    class: "card-body",
                                    GroupsTable {
                                        groups: data.clone(),
                                        refetch_trigger,
                                        on_edit: move |group: GroupDto| {
                                            group_to_edit.set(Some(group));
                                            show_form_modal.set(true);
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! {
                LoadingPage { }
            },
        }

        GroupFormModal {
            show: show_form_modal,
            group: group_to_edit,
            refetch_trigger,
        }
    }
}
