//! Sheet configuration: supported reactions and the initial theme.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::reactions::ReactionSet;
use crate::theme::Theme;

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "HEARTH_SHEET_CONFIG";

/// Configuration for the message action sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Reactions offered in the sheet header, in display order.
    pub supported_reactions: ReactionSet,
    /// Theme applied at startup.
    pub theme: Theme,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            supported_reactions: ReactionSet::standard(),
            theme: Theme::default(),
        }
    }
}

impl SheetConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: SheetConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            reactions = config.supported_reactions.len(),
            "loaded sheet config"
        );
        Ok(config)
    }

    /// Load from the file named by `HEARTH_SHEET_CONFIG`, or use defaults when unset.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_value(std::env::var_os(CONFIG_PATH_ENV).as_deref().map(Path::new))
    }

    fn from_env_value(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("{CONFIG_PATH_ENV} not set, using default sheet config");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.supported_reactions.validate()
    }
}
