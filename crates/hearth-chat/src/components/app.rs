//! Root app component wiring the message list to the action sheet.

use dioxus::prelude::*;
use hearth_ui::{MessageActionSheet, ThemeSwitcher, ThemedRoot, use_action_sheet};
use tracing::info;

use super::message_input::MessageInput;
use super::message_list::MessageList;
use super::thread_panel::ThreadPanel;
use crate::state::{ChatContext, ChatLog, HostConfig};

/// Root application component.
///
/// Expects a [`HostConfig`] in the root context.
#[component]
pub fn App() -> Element {
    let host = use_context::<HostConfig>();
    let sheet = use_action_sheet();

    let seed_user = host.user.clone();
    let mut ctx = use_context_provider(move || ChatContext {
        log: Signal::new(ChatLog::seeded(&seed_user)),
        selected: Signal::new(None),
        editing: Signal::new(None),
        thread: Signal::new(None),
        sheet,
    });

    let title = format!("Hearth Chat - {}", host.user.name);
    let selected_message = ctx.selected_message();
    let editing = ctx.editing.read().clone();
    let draft = editing
        .as_ref()
        .and_then(|id| ctx.log.read().get(id).map(|entry| entry.message.text.clone()))
        .unwrap_or_default();
    let input_key = editing.as_ref().map_or("compose".to_string(), |id| id.to_string());

    let author = host.user.clone();

    rsx! {
        ThemedRoot {
            div { class: "chat-layout",
                header { class: "chat-header",
                    span { class: "chat-title", "{title}" }
                    ThemeSwitcher {}
                }
                div { class: "chat-main",
                    div { class: "chat-column",
                        MessageList {}
                        if editing.is_some() {
                            MessageInput {
                                key: "{input_key}",
                                initial: draft,
                                on_send: move |text: String| {
                                    let Some(id) = ctx.editing.peek().clone() else {
                                        return;
                                    };
                                    if ctx.log.write().edit(&id, text) {
                                        info!(message_id = %id, "message edited");
                                    }
                                    ctx.editing.set(None);
                                },
                                on_cancel: move |_| ctx.editing.set(None),
                            }
                        } else {
                            MessageInput {
                                key: "{input_key}",
                                on_send: move |text: String| {
                                    let id = ctx.log.write().send(author.clone(), text);
                                    info!(message_id = %id, "message sent");
                                },
                            }
                        }
                    }
                    ThreadPanel {}
                }
                if let Some(message) = selected_message {
                    MessageActionSheet {
                        sheet: ctx.sheet,
                        message,
                        current_user_id: host.user.id.clone(),
                        on_edit: move |_| {
                            let id = ctx.selected.peek().clone();
                            ctx.editing.set(id);
                        },
                        on_delete: move |_| {
                            let Some(id) = ctx.selected.peek().clone() else {
                                return;
                            };
                            if ctx.log.write().delete(&id) {
                                info!(message_id = %id, "message deleted");
                            }
                            if ctx.editing.peek().as_ref() == Some(&id) {
                                ctx.editing.set(None);
                            }
                            ctx.selected.set(None);
                        },
                        on_open_thread: move |_| {
                            let id = ctx.selected.peek().clone();
                            ctx.thread.set(id);
                        },
                        set_action_sheet_visible: move |visible: bool| ctx.sheet.set_visible(visible),
                        supported_reactions: host.sheet.supported_reactions.clone(),
                        on_reaction: move |reaction: String| {
                            if let Some(id) = ctx.selected.peek().clone() {
                                ctx.log.write().react(&id, &reaction);
                                info!(message_id = %id, %reaction, "reaction added");
                            }
                            ctx.sheet.hide();
                        },
                    }
                }
            }
        }
    }
}
