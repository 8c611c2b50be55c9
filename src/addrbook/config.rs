use crate::book::{DEFAULT_BIRTHDAY_WINDOW_DAYS, MAX_BIRTHDAY_WINDOW_DAYS};
use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for addrbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// File name of the address book snapshot inside the data dir
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// How many days ahead `birthdays` looks
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: i64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_birthday_window_days() -> i64 {
    DEFAULT_BIRTHDAY_WINDOW_DAYS
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            birthday_window_days: default_birthday_window_days(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig = serde_json::from_str(&content).map_err(BookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0..=MAX_BIRTHDAY_WINDOW_DAYS).contains(&self.birthday_window_days) {
            return Err(BookError::InvalidConfig(format!(
                "birthday_window_days must be between 0 and {}, got {}",
                MAX_BIRTHDAY_WINDOW_DAYS, self.birthday_window_days
            )));
        }
        if self.data_file.trim().is_empty() {
            return Err(BookError::InvalidConfig(
                "data_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.data_file)
    }
}
