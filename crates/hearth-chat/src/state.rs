//! App state: the message log and the signals shared through Dioxus context.

use dioxus::prelude::*;
use hearth_ui::{ActionSheetHandle, Author, ChatMessage, ConfigError, MessageId, SheetConfig, UserId};
use tracing::debug;
use uuid::Uuid;

/// Environment variable holding the local user's display name.
pub const NAME_ENV: &str = "HEARTH_NAME";

const DEFAULT_NAME: &str = "You";

/// Startup settings handed to the root component.
#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    /// The local user; Edit and Delete are offered on their messages.
    pub user: Author,
    pub sheet: SheetConfig,
}

impl HostConfig {
    /// Read `HEARTH_NAME` and the sheet config file named by the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let sheet = SheetConfig::from_env()?;
        Ok(Self::new(std::env::var(NAME_ENV).ok(), sheet))
    }

    /// The local user gets a fresh id, so a display name shared with
    /// another member never grants ownership of their messages.
    pub fn new(name: Option<String>, sheet: SheetConfig) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        let id = UserId::new(format!("local-{}", Uuid::new_v4()));
        Self {
            user: Author::new(id, name),
            sheet,
        }
    }
}

/// A message plus the local bookkeeping the chat view shows next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub message: ChatMessage,
    pub edited: bool,
    /// Reaction id and tap count, in first-tapped order.
    pub reactions: Vec<(String, usize)>,
}

/// Ordered, in-memory message history for the open room.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
    next_id: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A short conversation between `me` and another member, so both
    /// variants of the action sheet can be opened right away.
    pub fn seeded(me: &Author) -> Self {
        let ada = Author::new("user-ada", "Ada");
        let mut log = Self::new();
        log.send(ada.clone(), "Morning! Did the build go green?");
        log.send(me.clone(), "It did, shipping the release notes now.");
        log.send(ada, "Nice. Long-press or right-click a message for actions.");
        log
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &MessageId) -> Option<&ChatEntry> {
        self.entries.iter().find(|entry| &entry.message.id == id)
    }

    fn get_mut(&mut self, id: &MessageId) -> Option<&mut ChatEntry> {
        self.entries.iter_mut().find(|entry| &entry.message.id == id)
    }

    /// Append a message and return its new ID.
    pub fn send(&mut self, author: Author, text: impl Into<String>) -> MessageId {
        self.next_id += 1;
        let id = MessageId::new(format!("m{}", self.next_id));
        self.entries.push(ChatEntry {
            message: ChatMessage::new(id.clone(), author, text),
            edited: false,
            reactions: Vec::new(),
        });
        id
    }

    /// Replace a message's text. Returns false when the message is gone.
    pub fn edit(&mut self, id: &MessageId, text: impl Into<String>) -> bool {
        let Some(entry) = self.get_mut(id) else {
            return false;
        };
        let text = text.into();
        if entry.message.text != text {
            entry.message.text = text;
            entry.edited = true;
        }
        true
    }

    pub fn delete(&mut self, id: &MessageId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.message.id != id);
        self.entries.len() != before
    }

    /// Count one more `reaction` on the message.
    pub fn react(&mut self, id: &MessageId, reaction: &str) -> bool {
        let Some(entry) = self.get_mut(id) else {
            debug!(message_id = %id, reaction, "reaction on a missing message");
            return false;
        };
        match entry.reactions.iter_mut().find(|(r, _)| r == reaction) {
            Some((_, count)) => *count += 1,
            None => entry.reactions.push((reaction.to_string(), 1)),
        }
        true
    }

    pub fn reaction_count(&self, id: &MessageId, reaction: &str) -> usize {
        self.get(id)
            .and_then(|entry| entry.reactions.iter().find(|(r, _)| r == reaction))
            .map_or(0, |(_, count)| *count)
    }
}

/// Shared chat state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct ChatContext {
    pub log: Signal<ChatLog>,
    /// Message the action sheet was opened for.
    pub selected: Signal<Option<MessageId>>,
    /// Message whose text is loaded into the compose bar.
    pub editing: Signal<Option<MessageId>>,
    /// Message whose thread panel is open.
    pub thread: Signal<Option<MessageId>>,
    pub sheet: ActionSheetHandle,
}

impl ChatContext {
    /// Select `id` and show the action sheet for it.
    pub fn open_actions(&mut self, id: MessageId) {
        self.selected.set(Some(id));
        self.sheet.show();
    }

    /// The message the sheet is currently targeting, if it still exists.
    pub fn selected_message(&self) -> Option<ChatMessage> {
        let selected = self.selected.read().clone()?;
        self.log.read().get(&selected).map(|entry| entry.message.clone())
    }
}
