use crate::error::{NoteError, Result};
use crate::labels::{Labels, Locale};
use crate::timestamp::DEFAULT_FORMAT;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for notekeeper, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotekeeperConfig {
    /// Language of labels and menu text
    #[serde(default)]
    pub locale: Locale,

    /// strftime pattern used for creation and update timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_timestamp_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for NotekeeperConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl NotekeeperConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotekeeperConfig = serde_json::from_str(&content)?;
        validate_timestamp_format(&config.timestamp_format)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        self.locale = locale.parse()?;
        Ok(())
    }

    pub fn set_timestamp_format(&mut self, pattern: &str) -> Result<()> {
        validate_timestamp_format(pattern)?;
        self.timestamp_format = pattern.to_string();
        Ok(())
    }

    pub fn labels(&self) -> Labels {
        Labels::for_locale(self.locale)
    }
}

// chrono panics while formatting a pattern it could not parse, so reject those up front.
fn validate_timestamp_format(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(NoteError::Config("Timestamp format cannot be empty".into()));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(NoteError::Config(format!(
            "Invalid timestamp format: {}",
            pattern
        )));
    }
    Ok(())
}
