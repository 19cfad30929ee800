//! Configuration management for timeclaim.
//!
//! The configuration is a JSON file (`config.json`) in the platform data
//! directory (see [`DataStorage`]). Every section is optional so a fresh
//! install runs with defaults, and `timeclaim init` fills sections in
//! interactively.
//!
//! ## Sections
//!
//! - **user**: the identity whose record set is loaded, and the employee
//!   name printed on exported claim forms.
//! - **sync**: which sync backend to use and how often auto-sync runs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timeclaim::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(user) = &config.user {
//!     println!("Claims for {}", user.employee_name);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::remote::RemoteConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default auto-sync interval: five minutes.
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 300;

/// A selectable section of the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserConfig {
    /// Key under which the user's record set is stored and synced.
    pub user_id: String,
    /// Printed on the claim form.
    pub employee_name: String,
}

/// Which sync backend reconciles the record set.
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncBackendKind {
    /// JSON mirror in the local data directory.
    #[default]
    Mirror,
    /// HTTP document store.
    Remote,
}

impl fmt::Display for SyncBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyncBackendKind::Mirror => write!(f, "mirror"),
            SyncBackendKind::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SyncConfig {
    pub backend: SyncBackendKind,

    /// Seconds between two auto-sync runs.
    pub interval_secs: u64,

    /// Required when `backend` is `remote`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            backend: SyncBackendKind::Mirror,
            interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            remote: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncConfig>,
}

impl Config {
    /// Loads the configuration, or the defaults when no file exists yet.
    ///
    /// A file that exists but does not parse is an error.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The sync section, falling back to the local mirror defaults.
    pub fn sync_or_default(&self) -> SyncConfig {
        self.sync.clone().unwrap_or_default()
    }

    /// Interactive setup wizard, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "user".to_string(),
                name: Message::ConfigModuleUser.to_string(),
            },
            ConfigModule {
                key: "sync".to_string(),
                name: Message::ConfigModuleSync.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "user" => {
                    let default = config.user.clone().unwrap_or(UserConfig {
                        user_id: "".to_string(),
                        employee_name: "".to_string(),
                    });
                    msg_print!(Message::ConfigModuleUser);
                    config.user = Some(UserConfig {
                        user_id: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUserId.to_string())
                            .default(default.user_id)
                            .interact_text()?,
                        employee_name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptEmployeeName.to_string())
                            .default(default.employee_name)
                            .interact_text()?,
                    });
                }
                "sync" => {
                    let default = config.sync_or_default();
                    msg_print!(Message::ConfigModuleSync);
                    let kinds = [SyncBackendKind::Mirror, SyncBackendKind::Remote];
                    let backend = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSyncBackend.to_string())
                        .items(&kinds)
                        .default(kinds.iter().position(|kind| *kind == default.backend).unwrap_or(0))
                        .interact()?;
                    let backend = kinds[backend];
                    let remote = match backend {
                        SyncBackendKind::Remote => Some(RemoteConfig::init(&default.remote)?),
                        SyncBackendKind::Mirror => default.remote,
                    };
                    config.sync = Some(SyncConfig {
                        backend,
                        interval_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSyncInterval.to_string())
                            .default(default.interval_secs)
                            .interact_text()?,
                        remote,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
