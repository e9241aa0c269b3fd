//! View model for a chat message as seen by the action sheet.

use serde::{Deserialize, Serialize};

use crate::identity::{MessageId, UserId};

/// The user who wrote a message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: UserId,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Stable message ID.
    pub id: MessageId,
    /// Who wrote it. Only `author.id` matters for permission gating.
    pub author: Author,
    /// Current text content.
    pub text: String,
}

impl ChatMessage {
    pub fn new(id: impl Into<MessageId>, author: Author, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author,
            text: text.into(),
        }
    }

    /// Whether `user` wrote this message.
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        &self.author.id == user
    }
}
