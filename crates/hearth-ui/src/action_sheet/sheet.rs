//! Bottom-anchored action sheet for a single message.

use dioxus::prelude::*;
use tracing::error;

use super::actions::{ActionCallbacks, ActionList, MessageActionKind, build_actions};
use super::dispatch::dispatch;
use super::reaction_picker::ReactionBar;
use crate::identity::{MessageId, UserId};
use crate::message::ChatMessage;
use crate::reactions::ReactionSet;
use crate::theme::CURRENT_THEME;

/// Copyable handle the host keeps to show or hide its sheet.
#[derive(Clone, Copy, PartialEq)]
pub struct ActionSheetHandle {
    visible: Signal<bool>,
}

impl ActionSheetHandle {
    pub fn new(visible: Signal<bool>) -> Self {
        Self { visible }
    }

    pub fn show(&self) {
        self.set_visible(true);
    }

    pub fn hide(&self) {
        self.set_visible(false);
    }

    pub fn set_visible(&self, visible: bool) {
        let mut signal = self.visible;
        if *signal.peek() != visible {
            signal.set(visible);
        }
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.read()
    }
}

/// Create a hidden sheet handle owned by the calling component.
pub fn use_action_sheet() -> ActionSheetHandle {
    let visible = use_signal(|| false);
    ActionSheetHandle::new(visible)
}

/// Contextual menu for `message` with a reaction picker in its title box.
///
/// Edit and Delete are only offered when `current_user_id` wrote the message.
/// Every selection, including Cancel and a tap on the backdrop, ends with
/// `set_action_sheet_visible(false)`.
#[component]
pub fn MessageActionSheet(
    sheet: ActionSheetHandle,
    message: ChatMessage,
    current_user_id: UserId,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
    on_open_thread: EventHandler<()>,
    set_action_sheet_visible: EventHandler<bool>,
    supported_reactions: ReactionSet,
    on_reaction: EventHandler<String>,
) -> Element {
    if !sheet.is_visible() {
        return rsx! {};
    }

    let callbacks = ActionCallbacks::new()
        .with_edit(move || on_edit.call(()))
        .with_delete(move || on_delete.call(()))
        .with_open_thread(move || on_open_thread.call(()));
    let actions = build_actions(&message, &current_user_id, &callbacks);
    let theme = *CURRENT_THEME.read();
    let message_id = message.id.clone();

    let backdrop_actions = actions.clone();
    let backdrop_message = message_id.clone();
    let cancel_actions = actions.clone();
    let cancel_message = message_id.clone();
    let cancel_title = MessageActionKind::Cancel.title();

    rsx! {
        div {
            class: "action-sheet-overlay",
            "data-theme": "{theme.css_value()}",
            style: "{theme.sheet_style()}",

            div {
                class: "action-sheet-backdrop",
                onclick: move |_| {
                    select_action(
                        &backdrop_actions,
                        MessageActionKind::Cancel,
                        &backdrop_message,
                        || set_action_sheet_visible.call(false),
                    )
                },
            }

            div {
                class: "action-sheet-body",
                "data-message-id": "{message_id}",

                div {
                    class: "action-sheet-title",
                    ReactionBar {
                        reactions: supported_reactions.clone(),
                        on_reaction: on_reaction,
                    }
                }

                for item in actions.selectable().iter() {
                    {
                        let kind = item.kind();
                        let list = actions.clone();
                        let id = message_id.clone();
                        let row_class = if kind.is_destructive() {
                            "action-sheet-item action-sheet-item-destructive"
                        } else {
                            "action-sheet-item"
                        };
                        rsx! {
                            button {
                                key: "{kind}",
                                class: "{row_class}",
                                "data-testid": "action-sheet-item-{item.title()}",
                                onclick: move |_| {
                                    select_action(&list, kind, &id, || set_action_sheet_visible.call(false))
                                },
                                span {
                                    class: "action-sheet-icon icon-{item.icon().name()}",
                                    "{item.icon().glyph()}"
                                }
                                span { class: "action-sheet-item-title", "{item.title()}" }
                            }
                        }
                    }
                }

                button {
                    class: "action-sheet-cancel",
                    "data-testid": "action-sheet-item-{cancel_title}",
                    onclick: move |_| {
                        select_action(
                            &cancel_actions,
                            MessageActionKind::Cancel,
                            &cancel_message,
                            || set_action_sheet_visible.call(false),
                        )
                    },
                    "{cancel_title}"
                }
            }
        }
    }
}

fn select_action(
    actions: &ActionList,
    kind: MessageActionKind,
    message_id: &MessageId,
    close: impl FnOnce(),
) {
    if let Err(err) = dispatch(actions, kind, close) {
        error!(%err, message_id = %message_id, "message action selection did not match the menu");
    }
}
