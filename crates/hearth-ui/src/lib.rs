//! Shared UI components for Hearth chat applications.
//!
//! Provides the message action sheet (edit / delete / copy / reply) with its
//! inline reaction picker, the light and dark themes, and the sheet
//! configuration loaded by host apps.

pub mod action_sheet;
pub mod config;
pub mod error;
pub mod identity;
pub mod message;
pub mod reactions;
pub mod theme;

pub use action_sheet::{
    ActionCallbacks, ActionIcon, ActionItem, ActionList, ActionSheetHandle, MessageActionKind,
    MessageActionSheet, ReactionBar, ReactionPicker, build_actions, dispatch, dispatch_index,
    use_action_sheet,
};
pub use config::SheetConfig;
pub use error::{ActionSheetError, ConfigError};
pub use identity::{MessageId, UserId, author_initial};
pub use message::{Author, ChatMessage};
pub use reactions::{ReactionOption, ReactionSet};
pub use theme::{CURRENT_THEME, SheetPalette, Theme, ThemeSwitcher, ThemedRoot, set_startup_theme};

/// CSS for the action sheet and reaction bar.
pub const SHEET_CSS: &str = include_str!("../assets/action_sheet.css");
