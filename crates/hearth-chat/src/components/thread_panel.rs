//! Side panel opened by Reply in Thread.

use dioxus::prelude::*;

use crate::state::ChatContext;

#[component]
pub fn ThreadPanel() -> Element {
    let mut ctx = use_context::<ChatContext>();
    let thread = ctx.thread.read().clone();
    let Some(root) = thread.and_then(|id| ctx.log.read().get(&id).cloned()) else {
        return rsx! {};
    };

    rsx! {
        aside { class: "thread-panel",
            div { class: "thread-header",
                span { class: "thread-title", "Thread" }
                button {
                    class: "thread-close",
                    onclick: move |_| ctx.thread.set(None),
                    "✕"
                }
            }
            div { class: "thread-root",
                div { class: "message-author", "{root.message.author.name}" }
                div { class: "message-content", "{root.message.text}" }
            }
            div { class: "thread-empty", "No replies yet" }
        }
    }
}
