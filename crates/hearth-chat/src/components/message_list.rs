//! Scrollable list of message rows that open the action sheet.

use dioxus::prelude::*;
use hearth_ui::{author_initial, ReactionSet};

use crate::state::{ChatContext, HostConfig};

/// All messages in the room, oldest first.
#[component]
pub fn MessageList() -> Element {
    let ctx = use_context::<ChatContext>();
    let host = use_context::<HostConfig>();
    let log = ctx.log.read();

    rsx! {
        div { class: "message-list",
            if log.is_empty() {
                div { class: "message-list-empty", "No messages yet" }
            }
            for entry in log.entries().iter() {
                {
                    let id = entry.message.id.clone();
                    let is_mine = entry.message.is_authored_by(&host.user.id);
                    let reactions = reaction_labels(&host.sheet.supported_reactions, &entry.reactions);
                    rsx! {
                        MessageRow {
                            key: "{id}",
                            author: entry.message.author.name.clone(),
                            text: entry.message.text.clone(),
                            is_mine,
                            is_edited: entry.edited,
                            reactions,
                            on_open: move |_| {
                                let mut ctx = ctx;
                                ctx.open_actions(id.clone());
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Map reaction ids to `"{icon} {count}"` pills, keeping unknown ids readable.
fn reaction_labels(supported: &ReactionSet, counts: &[(String, usize)]) -> Vec<String> {
    counts
        .iter()
        .map(|(id, count)| {
            let icon = supported.get(id).map_or(id.as_str(), |option| option.icon.as_str());
            format!("{icon} {count}")
        })
        .collect()
}

#[component]
fn MessageRow(
    author: String,
    text: String,
    is_mine: bool,
    is_edited: bool,
    reactions: Vec<String>,
    on_open: EventHandler<()>,
) -> Element {
    let row_class = if is_mine { "message-row mine" } else { "message-row theirs" };
    let initial = author_initial(&author);

    rsx! {
        div {
            class: "{row_class}",
            oncontextmenu: move |evt| {
                evt.prevent_default();
                on_open.call(());
            },
            div { class: "message-avatar", "{initial}" }
            div { class: "message-bubble",
                div { class: "message-author", "{author}" }
                div { class: "message-content", "{text}" }
                if !reactions.is_empty() {
                    div { class: "message-reactions",
                        for label in reactions.iter() {
                            span { class: "reaction-pill", "{label}" }
                        }
                    }
                }
                if is_edited {
                    span { class: "message-edited", "edited" }
                }
            }
            button {
                class: "message-actions-button",
                title: "Message actions",
                onclick: move |_| on_open.call(()),
                "⋯"
            }
        }
    }
}
