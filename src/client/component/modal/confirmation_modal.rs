use dioxus::prelude::*;

use super::Modal;

/// Yes/no dialog guarding a destructive action.
///
/// `is_processing` locks both buttons and the backdrop until the caller resets it.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: Element,
    confirm_text: String,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            {message}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    disabled: is_processing,
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-error",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}
