use dioxus::prelude::*;

use crate::model::format::CodeTable;

/// Cheat sheet of every color and style code in the given table.
#[component]
pub fn CodeReference(table: CodeTable) -> Element {
    let marker = table.marker;

    rsx! {
        div {
            class: "card bg-base-200 mb-6",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title text-base", "Formatting codes" }
                div {
                    class: "grid grid-cols-2 sm:grid-cols-4 gap-2",
                    for color in table.colors.iter() {
                        div {
                            key: "{color.code}",
                            class: "flex items-center gap-2 mc-preview rounded px-2 py-1",
                            code { class: "opacity-70", "{marker}{color.code}" }
                            span { style: "color: {color.hex};", "{color.name}" }
                        }
                    }
                }
                div {
                    class: "flex flex-wrap gap-2",
                    for style in table.styles.iter() {
                        div {
                            key: "{style.code()}",
                            class: "badge badge-outline gap-2",
                            code { "{marker}{style.code()}" }
                            "{style.name()}"
                        }
                    }
                    div {
                        class: "badge badge-outline gap-2",
                        code { "{marker}{table.reset}" }
                        "Reset"
                    }
                }
            }
        }
    }
}
