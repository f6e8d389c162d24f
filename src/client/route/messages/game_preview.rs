use dioxus::prelude::*;

use crate::{
    client::component::FormattedText,
    model::{
        format::AMPERSAND_CODES,
        message::{GameMessageDto, MessageKeyDto, TemplateValues},
    },
};

#[cfg(feature = "web")]
use crate::client::api::message::{get_available_keys, get_game_message};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Splits the comma separated positional values typed by the user.
fn positional_values(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders a stored message through the game endpoint with sample values.
#[component]
pub fn GamePreview(refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut keys = use_signal(Vec::<MessageKeyDto>::new);
    let mut selected_key = use_signal(String::new);
    let mut player_name = use_signal(|| "Steve".to_string());
    let mut rank = use_signal(String::new);
    let mut positional = use_signal(String::new);
    let mut should_render = use_signal(|| false);
    #[allow(unused_mut)]
    let mut rendered = use_signal(|| None::<GameMessageDto>);
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let keys_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_available_keys().await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*keys_future.read_unchecked() {
        Some(Ok(data)) => {
            if !data.iter().any(|key| key.key == *selected_key.peek()) {
                selected_key.set(data.first().map(|key| key.key.clone()).unwrap_or_default());
                rendered.set(None);
            }
            keys.set(data.clone());
        }
        Some(Err(err)) => {
            tracing::error!("Failed to fetch message keys: {}", err);
            error_message.set(Some(err.message.clone()));
        }
        None => (),
    });

    #[cfg(feature = "web")]
    let render_future = use_resource(move || async move {
        if !should_render() {
            return None;
        }

        let key = selected_key.peek().clone();
        let values = TemplateValues {
            player_name: Some(player_name.peek().trim().to_string()),
            rank: Some(rank.peek().trim().to_string()),
            positional: positional_values(&positional.peek()),
        };
        Some(get_game_message(&key, &values).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = render_future.read_unchecked().as_ref() {
            match result {
                Ok(message) => {
                    rendered.set(Some(message.clone()));
                    error_message.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to render message: {}", err);
                    rendered.set(None);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_render.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if !selected_key().is_empty() {
            should_render.set(true);
        }
    };

    let is_rendering = should_render();
    let key_list = keys();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "Game preview" }
                if key_list.is_empty() {
                    p { class: "opacity-50", "Create a message to preview it in game." }
                } else {
                    form {
                        class: "grid grid-cols-1 md:grid-cols-5 gap-2 items-end",
                        onsubmit: on_submit,
                        select {
                            class: "select select-bordered w-full md:col-span-2",
                            value: "{selected_key()}",
                            onchange: move |evt| selected_key.set(evt.value()),
                            for entry in key_list {
                                option {
                                    key: "{entry.key}",
                                    value: "{entry.key}",
                                    selected: entry.key == selected_key(),
                                    title: entry.description.clone().unwrap_or_default(),
                                    "{entry.key}"
                                }
                            }
                        }
                        input {
                            r#type: "text",
                            class: "input input-bordered w-full",
                            placeholder: "Player name",
                            value: "{player_name()}",
                            oninput: move |evt| player_name.set(evt.value()),
                        }
                        input {
                            r#type: "text",
                            class: "input input-bordered w-full",
                            placeholder: "Rank",
                            value: "{rank()}",
                            oninput: move |evt| rank.set(evt.value()),
                        }
                        input {
                            r#type: "text",
                            class: "input input-bordered w-full",
                            placeholder: "Values: a, b, c",
                            value: "{positional()}",
                            oninput: move |evt| positional.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary md:col-start-5",
                            disabled: is_rendering || selected_key().is_empty(),
                            if is_rendering {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                            }
                            "Render"
                        }
                    }
                }
                if let Some(message) = error_message() {
                    div {
                        class: "alert alert-error",
                        span { "{message}" }
                    }
                }
                if let Some(message) = rendered() {
                    div {
                        class: "flex flex-col gap-2",
                        div {
                            class: "mc-preview rounded px-3 py-2",
                            FormattedText {
                                text: message.content.clone(),
                                dialect: AMPERSAND_CODES,
                            }
                        }
                        div {
                            class: "text-xs opacity-60 font-mono break-all",
                            "{message.message_key}: {message.original_content}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_positional_values() {
        assert_eq!(positional_values(" 10 , lobby,, "), vec!["10", "lobby"]);
    }

    #[test]
    fn empty_input_has_no_positional_values() {
        assert!(positional_values("").is_empty());
    }
}
