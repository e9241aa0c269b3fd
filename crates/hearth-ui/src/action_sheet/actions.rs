//! Action kinds and the permission-gated action list.

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::identity::UserId;
use crate::message::ChatMessage;

/// Zero-argument callback run when an action is chosen.
pub type ActionHandler = Rc<dyn Fn()>;

/// Every action the message sheet can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageActionKind {
    /// Dismiss without doing anything.
    Cancel,
    Edit,
    Delete,
    Copy,
    /// Open the message's thread.
    Reply,
}

impl MessageActionKind {
    /// Stable string id, unique among the kinds.
    pub fn id(&self) -> &'static str {
        match self {
            MessageActionKind::Cancel => "cancel",
            MessageActionKind::Edit => "edit",
            MessageActionKind::Delete => "delete",
            MessageActionKind::Copy => "copy",
            MessageActionKind::Reply => "reply",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MessageActionKind::Cancel => "Cancel",
            MessageActionKind::Edit => "Edit Message",
            MessageActionKind::Delete => "Delete message",
            MessageActionKind::Copy => "Copy Text",
            MessageActionKind::Reply => "Reply in Thread",
        }
    }

    pub fn icon(&self) -> ActionIcon {
        match self {
            MessageActionKind::Cancel => ActionIcon::Drafts,
            MessageActionKind::Edit => ActionIcon::EditText,
            MessageActionKind::Delete => ActionIcon::DeleteText,
            MessageActionKind::Copy => ActionIcon::CopyText,
            MessageActionKind::Reply => ActionIcon::Threads,
        }
    }

    /// Rendered in the destructive color.
    pub fn is_destructive(&self) -> bool {
        matches!(self, MessageActionKind::Delete)
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.id() == id)
    }

    pub fn all() -> &'static [MessageActionKind] {
        &[
            MessageActionKind::Cancel,
            MessageActionKind::Edit,
            MessageActionKind::Delete,
            MessageActionKind::Copy,
            MessageActionKind::Reply,
        ]
    }
}

impl fmt::Display for MessageActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Icon shown next to an action title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionIcon {
    Drafts,
    EditText,
    DeleteText,
    CopyText,
    Threads,
}

impl ActionIcon {
    /// Icon identifier, also used as the CSS class suffix.
    pub fn name(&self) -> &'static str {
        match self {
            ActionIcon::Drafts => "drafts",
            ActionIcon::EditText => "edit-text",
            ActionIcon::DeleteText => "delete-text",
            ActionIcon::CopyText => "copy-text",
            ActionIcon::Threads => "threads",
        }
    }

    /// Text fallback drawn when no icon font is loaded.
    pub fn glyph(&self) -> &'static str {
        match self {
            ActionIcon::Drafts => "\u{2715}",
            ActionIcon::EditText => "\u{270e}",
            ActionIcon::DeleteText => "\u{1f5d1}",
            ActionIcon::CopyText => "\u{2398}",
            ActionIcon::Threads => "\u{1f4ac}",
        }
    }
}

/// One selectable entry of the sheet.
#[derive(Clone)]
pub struct ActionItem {
    kind: MessageActionKind,
    handler: Option<ActionHandler>,
}

impl ActionItem {
    pub fn new(kind: MessageActionKind, handler: Option<ActionHandler>) -> Self {
        Self { kind, handler }
    }

    pub fn kind(&self) -> MessageActionKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn icon(&self) -> ActionIcon {
        self.kind.icon()
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Run the handler, if any. Returns whether one ran.
    pub fn run(&self) -> bool {
        match &self.handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("kind", &self.kind)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

/// Host callbacks the sheet delegates to.
#[derive(Clone, Default)]
pub struct ActionCallbacks {
    pub on_edit: Option<ActionHandler>,
    pub on_delete: Option<ActionHandler>,
    pub on_open_thread: Option<ActionHandler>,
}

impl ActionCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edit(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_edit = Some(Rc::new(handler));
        self
    }

    pub fn with_delete(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_delete = Some(Rc::new(handler));
        self
    }

    pub fn with_open_thread(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_open_thread = Some(Rc::new(handler));
        self
    }
}

impl fmt::Debug for ActionCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCallbacks")
            .field("on_edit", &self.on_edit.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .field("on_open_thread", &self.on_open_thread.is_some())
            .finish()
    }
}

/// Ordered actions for one render of the sheet.
///
/// Index 0 is always [`MessageActionKind::Cancel`], and kinds never repeat.
#[derive(Clone, Debug)]
pub struct ActionList {
    items: Vec<ActionItem>,
}

impl ActionList {
    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ActionItem> {
        self.items.get(index)
    }

    pub fn find(&self, kind: MessageActionKind) -> Option<&ActionItem> {
        self.items.iter().find(|item| item.kind == kind)
    }

    pub fn position(&self, kind: MessageActionKind) -> Option<usize> {
        self.items.iter().position(|item| item.kind == kind)
    }

    pub fn contains(&self, kind: MessageActionKind) -> bool {
        self.find(kind).is_some()
    }

    pub fn kinds(&self) -> Vec<MessageActionKind> {
        self.items.iter().map(ActionItem::kind).collect()
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.items.iter().map(ActionItem::title).collect()
    }

    /// Everything except the leading cancel entry.
    pub fn selectable(&self) -> &[ActionItem] {
        &self.items[1..]
    }
}

/// Build the actions offered for `message` to `current_user_id`.
///
/// Cancel comes first; Edit and Delete follow only for the message's author;
/// Copy Text and Reply in Thread close the list. Copy Text has no handler.
pub fn build_actions(
    message: &ChatMessage,
    current_user_id: &UserId,
    callbacks: &ActionCallbacks,
) -> ActionList {
    let mut items = Vec::with_capacity(5);
    items.push(ActionItem::new(MessageActionKind::Cancel, None));

    let is_author = message.is_authored_by(current_user_id);
    if is_author {
        items.push(ActionItem::new(MessageActionKind::Edit, callbacks.on_edit.clone()));
        items.push(ActionItem::new(MessageActionKind::Delete, callbacks.on_delete.clone()));
    }

    items.push(ActionItem::new(MessageActionKind::Copy, None));
    items.push(ActionItem::new(
        MessageActionKind::Reply,
        callbacks.on_open_thread.clone(),
    ));

    trace!(
        message_id = %message.id,
        is_author,
        count = items.len(),
        "built message actions"
    );

    ActionList { items }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::message::Author;

    fn message_by(author: &str) -> ChatMessage {
        ChatMessage::new("m1", Author::new(author, author), "hi")
    }

    #[test]
    fn test_kind_ids_round_trip() {
        for kind in MessageActionKind::all() {
            assert_eq!(MessageActionKind::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(MessageActionKind::from_id("pin"), None);
    }

    #[test]
    fn test_only_delete_is_destructive() {
        let destructive: Vec<_> = MessageActionKind::all()
            .iter()
            .filter(|kind| kind.is_destructive())
            .collect();
        assert_eq!(destructive, [&MessageActionKind::Delete]);
    }

    #[test]
    fn test_icons_match_kinds() {
        assert_eq!(MessageActionKind::Cancel.icon().name(), "drafts");
        assert_eq!(MessageActionKind::Edit.icon().name(), "edit-text");
        assert_eq!(MessageActionKind::Delete.icon().name(), "delete-text");
        assert_eq!(MessageActionKind::Copy.icon().name(), "copy-text");
        assert_eq!(MessageActionKind::Reply.icon().name(), "threads");
    }

    #[test]
    fn test_author_gets_five_items() {
        let list = build_actions(&message_by("u1"), &UserId::from("u1"), &ActionCallbacks::new());
        assert_eq!(
            list.kinds(),
            [
                MessageActionKind::Cancel,
                MessageActionKind::Edit,
                MessageActionKind::Delete,
                MessageActionKind::Copy,
                MessageActionKind::Reply,
            ]
        );
    }

    #[test]
    fn test_other_user_gets_three_items() {
        let list = build_actions(&message_by("u2"), &UserId::from("u1"), &ActionCallbacks::new());
        assert_eq!(list.titles(), ["Cancel", "Copy Text", "Reply in Thread"]);
        assert_eq!(list.selectable().len(), 2);
    }

    #[test]
    fn test_placeholders_have_no_handler() {
        let callbacks = ActionCallbacks::new()
            .with_edit(|| {})
            .with_delete(|| {})
            .with_open_thread(|| {});
        let list = build_actions(&message_by("u1"), &UserId::from("u1"), &callbacks);
        assert!(!list.find(MessageActionKind::Cancel).unwrap().has_handler());
        assert!(!list.find(MessageActionKind::Copy).unwrap().has_handler());
        assert!(list.find(MessageActionKind::Edit).unwrap().has_handler());
        assert!(list.find(MessageActionKind::Reply).unwrap().has_handler());
    }

    #[test]
    fn test_building_runs_no_callbacks() {
        let calls = Rc::new(Cell::new(0));
        let (a, b, c) = (calls.clone(), calls.clone(), calls.clone());
        let callbacks = ActionCallbacks::new()
            .with_edit(move || a.set(a.get() + 1))
            .with_delete(move || b.set(b.get() + 1))
            .with_open_thread(move || c.set(c.get() + 1));
        let _ = build_actions(&message_by("u1"), &UserId::from("u1"), &callbacks);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_run_reports_whether_handler_ran() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let item = ActionItem::new(
            MessageActionKind::Reply,
            Some(Rc::new(move || counter.set(counter.get() + 1))),
        );
        assert!(item.run());
        assert!(!ActionItem::new(MessageActionKind::Copy, None).run());
        assert_eq!(hits.get(), 1);
    }
}
