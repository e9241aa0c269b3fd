//! Message action sheet: permission-gated actions plus a reaction picker.
//!
//! [`build_actions`] produces the menu model for one render,
//! [`dispatch`] routes a selection to its handler and closes the sheet, and
//! [`ReactionBar`] renders the reaction row shown in the sheet's title box.
//! [`MessageActionSheet`] ties the three together as a Dioxus component.

pub mod actions;
pub mod dispatch;
pub mod reaction_picker;
pub mod sheet;

pub use actions::{
    ActionCallbacks, ActionHandler, ActionIcon, ActionItem, ActionList, MessageActionKind,
    build_actions,
};
pub use dispatch::{dispatch, dispatch_index};
pub use reaction_picker::{ReactionBar, ReactionButton, ReactionPicker};
pub use sheet::{ActionSheetHandle, MessageActionSheet, use_action_sheet};
