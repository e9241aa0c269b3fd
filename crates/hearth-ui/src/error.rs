//! Error types for the action sheet and its configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::action_sheet::MessageActionKind;

/// Host contract violations detected while dispatching a selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionSheetError {
    /// The selected action was not part of the rendered menu,
    /// e.g. `Edit` on a message the current user did not write.
    #[error("action `{0}` is not in the rendered menu")]
    ActionNotInMenu(MessageActionKind),

    /// A positional selection pointed past the end of the menu.
    #[error("selection index {index} is out of range for a menu of {len} items")]
    SelectionOutOfRange { index: usize, len: usize },
}

/// Errors loading or validating a sheet configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reaction at position {0} has an empty id")]
    EmptyReactionId(usize),

    #[error("reaction id `{0}` is listed more than once")]
    DuplicateReaction(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
