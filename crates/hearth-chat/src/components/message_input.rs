//! Message compose bar with send button.

use dioxus::prelude::*;

/// Message input component.
///
/// Key it by the message being edited so `initial` is reloaded when the
/// user picks Edit Message on another message.
#[component]
pub fn MessageInput(
    on_send: EventHandler<String>,
    #[props(default)]
    initial: String,
    #[props(default)]
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let mut text = use_signal(|| initial.clone());

    let can_send = !text.read().trim().is_empty();
    let editing = on_cancel.is_some();
    let placeholder = if editing { "Edit message..." } else { "Write a message..." };
    let bar_class = if editing { "message-input-bar editing" } else { "message-input-bar" };

    rsx! {
        div { class: "{bar_class}",
            if let Some(cancel) = on_cancel {
                button {
                    class: "cancel-edit-button",
                    title: "Cancel edit",
                    onclick: move |_| cancel.call(()),
                    "✕"
                }
            }
            textarea {
                class: "message-input",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().shift() && can_send {
                        evt.prevent_default();
                        let msg = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(msg);
                    }
                },
            }
            button {
                class: "send-button",
                disabled: !can_send,
                onclick: move |_| {
                    if can_send {
                        let msg = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(msg);
                    }
                },
                "➤"
            }
        }
    }
}
