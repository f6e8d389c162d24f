use dioxus::prelude::*;

use crate::model::format::{self, CodeTable, SECTION_CODES};

/// Renders Minecraft formatting codes as styled spans.
///
/// Defaults to the `§` dialect stored by the game.
#[component]
pub fn FormattedText(
    text: String,
    dialect: Option<CodeTable>,
    class: Option<&'static str>,
) -> Element {
    let dialect = dialect.unwrap_or(SECTION_CODES);
    let class: &str = class.unwrap_or_default();
    let runs = format::parse(&text, &dialect);

    rsx!(
        span {
            class: "mc-text {class}",
            for (index, run) in runs.into_iter().enumerate() {
                span {
                    key: "{index}",
                    class: if run.style.obfuscated { "mc-obfuscated" },
                    style: "{run.style.css()}",
                    "{run.text}"
                }
            }
        }
    )
}
