//! Configuration management for the logsheet client.
//!
//! Settings live in `config.json` inside the per-user data directory
//! (see [`DataStorage`]). Every section is optional so the client can be
//! configured step by step:
//!
//! - **api**: where the logsheet API lives and which account signs in
//! - **operator**: defaults used to prefill new submissions
//!
//! The API URL can be overridden with the `LOGSHEET_API_URL` environment
//! variable (also read from a `.env` file), which is handy for pointing a
//! configured client at a staging server.
//!
//! ```rust,no_run
//! use logsheet::libs::config::Config;
//!
//! let config = Config::read()?;
//! let api = config.api()?;
//! println!("API: {}", api.api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding [`ApiConfig::api_url`].
pub const API_URL_ENV: &str = "LOGSHEET_API_URL";

/// A section offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Connection settings of the logsheet API.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL, without the `/api` suffix (e.g. `https://logsheets.example.com`).
    pub api_url: String,
    /// Account used to sign in.
    pub email: String,
}

impl ApiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Logsheet API".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleApi);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            email: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiEmail.to_string())
                .default(config.email)
                .interact_text()?,
        })
    }

    /// URL of an API path, tolerating a trailing slash on the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// Values prefilled into every new submission.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct OperatorConfig {
    #[serde(default)]
    pub operator_name: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_signature: String,
}

impl OperatorConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "operator".to_string(),
            name: "Operator defaults".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleOperator);
        Ok(Self {
            operator_name: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDefaultOperatorName.to_string())
                .default(config.operator_name)
                .allow_empty(true)
                .interact_text()?,
            user_name: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDefaultUserName.to_string())
                .default(config.user_name)
                .allow_empty(true)
                .interact_text()?,
            user_signature: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDefaultUserSignature.to_string())
                .default(config.user_signature)
                .allow_empty(true)
                .interact_text()?,
        })
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<OperatorConfig>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    ///
    /// A missing file yields the default (empty) configuration; a corrupted
    /// one is an error.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(config_file_path)?;
        Ok(serde_json::from_str(&config_str)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file = File::create(storage.get_path(CONFIG_FILE_NAME)?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete_from(storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Effective API settings with the environment override applied.
    pub fn api(&self) -> Result<ApiConfig> {
        Self::resolve_api(self.api.clone(), env::var(API_URL_ENV).ok())
    }

    fn resolve_api(api: Option<ApiConfig>, url_override: Option<String>) -> Result<ApiConfig> {
        let url_override = url_override.filter(|url| !url.trim().is_empty());
        let mut api = match (api, &url_override) {
            (Some(api), _) => api,
            (None, Some(_)) => ApiConfig::default(),
            (None, None) => return Err(msg_error_anyhow!(Message::ApiNotConfigured)),
        };
        if let Some(url) = url_override {
            api.api_url = url.trim().to_string();
        }
        if api.api_url.trim().is_empty() {
            return Err(msg_error_anyhow!(Message::ApiNotConfigured));
        }
        Ok(api)
    }

    /// Interactive setup starting from the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [ApiConfig::module(), OperatorConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => config.api = Some(ApiConfig::init(&config.api)?),
                "operator" => config.operator = Some(OperatorConfig::init(&config.operator)?),
                _ => {}
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(url: &str) -> ApiConfig {
        ApiConfig {
            api_url: url.to_string(),
            email: "operator@gmail.com".to_string(),
        }
    }

    #[test]
    fn override_replaces_configured_url() {
        let resolved = Config::resolve_api(Some(api("https://prod.example.com")), Some("http://localhost:5000".into())).unwrap();
        assert_eq!(resolved.api_url, "http://localhost:5000");
        assert_eq!(resolved.email, "operator@gmail.com");
    }

    #[test]
    fn override_alone_is_enough() {
        let resolved = Config::resolve_api(None, Some("http://localhost:5000".into())).unwrap();
        assert_eq!(resolved.api_url, "http://localhost:5000");
    }

    #[test]
    fn missing_api_is_an_error() {
        assert!(Config::resolve_api(None, None).is_err());
        assert!(Config::resolve_api(None, Some("  ".into())).is_err());
        assert!(Config::resolve_api(Some(api("")), None).is_err());
    }

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(api("https://x.example.com/").url("/api/logsheet/my-logs"), "https://x.example.com/api/logsheet/my-logs");
        assert_eq!(api("https://x.example.com").url("api/auth/login"), "https://x.example.com/api/auth/login");
    }
}
