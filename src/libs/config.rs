//! Configuration management for rokim-todo.
//!
//! Settings live in `config.json` inside the platform data directory resolved
//! by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\rokim\todo\config.json`
//! - **macOS**: `~/Library/Application Support/rokim/todo/config.json`
//! - **Linux**: `~/.local/share/rokim/todo/config.json`
//!
//! Each module is optional and omitted from the file when unset. A missing
//! file is not an error: [`Config::read`] then returns the defaults.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rokim_todo::libs::config::Config;
//!
//! let config = Config::read()?;
//! let api = config.api_config(None)?;
//! println!("Todo service: {}", api.api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::formatter::DEFAULT_DATE_FORMAT;
use crate::api::todo::TodoApiConfig;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module as listed by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used to route the selection
    pub key: String,
    /// Name shown to the user
    pub name: String,
}

/// How todos are rendered in tables.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// `chrono` format string for timestamps, shown in local time.
    pub date_format: String,

    /// Whether list tables include the description column.
    pub show_descriptions: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            show_descriptions: true,
        }
    }
}

impl DisplayConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "display".to_string(),
            name: "Display".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Todo service connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<TodoApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does not exist.
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

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Service settings, with `api_url_override` taking precedence over the file.
    ///
    /// # Errors
    ///
    /// Fails with [`Message::ApiNotConfigured`] when neither source provides a URL.
    pub fn api_config(&self, api_url_override: Option<&str>) -> Result<TodoApiConfig> {
        match (api_url_override, &self.api) {
            (Some(url), Some(api)) => Ok(TodoApiConfig {
                api_url: url.to_string(),
                ..api.clone()
            }),
            (Some(url), None) => Ok(TodoApiConfig::new(url)),
            (None, Some(api)) if !api.api_url.trim().is_empty() => Ok(api.clone()),
            _ => Err(msg_error_anyhow!(Message::ApiNotConfigured)),
        }
    }

    pub fn display_or_default(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![TodoApiConfig::module(), DisplayConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => config.api = Some(TodoApiConfig::init(&config.api)?),
                "display" => {
                    let default = config.display_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        date_format: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDateFormat.to_string())
                            .default(default.date_format)
                            .interact_text()?,
                        show_descriptions: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowDescriptions.to_string())
                            .default(default.show_descriptions)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
