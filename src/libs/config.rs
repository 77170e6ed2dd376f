//! Configuration management for the clockfill application.
//!
//! Two sources feed a run:
//!
//! - **Environment**: the `CLOCKIFY_API_KEY` secret, optionally loaded from a
//!   `.env` file in the working directory. It is required.
//! - **Config file**: an optional `config.json` in the platform data directory
//!   holding the API base URL and the workday window. Missing file or missing
//!   sections fall back to defaults.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\clockfill\config.json`
//! - **macOS**: `~/Library/Application Support/clockfill/config.json`
//! - **Linux**: `~/.local/share/clockfill/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,ignore
//! use clockfill::libs::config::Config;
//!
//! let config = Config::read()?;
//! let api_key = Config::api_key()?;
//! let hours = config.workday().hours()?;
//! ```

use super::data_storage::DataStorage;
use crate::api::clockify::ClockifyConfig;
use crate::libs::messages::Message;
use crate::libs::reconciler::DEFAULT_DESCRIPTION;
use crate::libs::workdays::{parse_time, WorkHours, DEFAULT_END, DEFAULT_START};
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding the Clockify API key.
pub const API_KEY_VAR: &str = "CLOCKIFY_API_KEY";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Workday window and description defaults.
///
/// Times are stored as `HH:MM` strings so the file stays hand-editable;
/// [`WorkdayConfig::hours`] validates them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorkdayConfig {
    /// Start of every created entry, local time.
    pub start: String,
    /// End of every created entry, local time. Must be later than `start`.
    pub end: String,
    /// Description used by the default description mode.
    pub default_description: String,
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl WorkdayConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "workday".to_string(),
            name: "Workday".to_string(),
        }
    }

    /// Parses and validates the stored window.
    pub fn hours(&self) -> Result<WorkHours> {
        WorkHours::parse(&self.start, &self.end)
    }

    /// Prompts for the workday settings, pre-filled with `config` or the defaults.
    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleWorkday);

        let start: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkdayStart.to_string())
            .default(config.start)
            .validate_with(|input: &String| parse_time(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;

        let end: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkdayEnd.to_string())
            .default(config.end)
            .validate_with(|input: &String| WorkHours::parse(&start, input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;

        let default_description = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultDescription.to_string())
            .default(config.default_description)
            .interact_text()?;

        Ok(Self {
            start,
            end,
            default_description,
        })
    }
}

/// Root configuration object.
///
/// Every section is optional; unconfigured sections are omitted from the
/// JSON file and resolve to their defaults at runtime.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockify: Option<ClockifyConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workday: Option<WorkdayConfig>,
}

impl Config {
    /// Reads the configuration file, or returns the default configuration when
    /// no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard.
    ///
    /// The user picks which modules to configure; each selected module is
    /// prompted with the current values as defaults. Unselected modules keep
    /// whatever the file already had.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [ClockifyConfig::module(), WorkdayConfig::module()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "clockify" => config.clockify = Some(ClockifyConfig::init(&config.clockify)?),
                "workday" => config.workday = Some(WorkdayConfig::init(&config.workday)?),
                _ => {}
            }
        }

        Ok(config)
    }

    /// Returns the Clockify API key from the environment.
    ///
    /// Call `dotenv::dotenv()` beforehand to pick up a `.env` file.
    ///
    /// # Errors
    ///
    /// Fails when the variable is unset or blank.
    pub fn api_key() -> Result<String> {
        match env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => msg_bail_anyhow!(Message::ApiKeyMissing(API_KEY_VAR.to_string())),
        }
    }

    pub fn clockify(&self) -> ClockifyConfig {
        self.clockify.clone().unwrap_or_default()
    }

    pub fn workday(&self) -> WorkdayConfig {
        self.workday.clone().unwrap_or_default()
    }
}
