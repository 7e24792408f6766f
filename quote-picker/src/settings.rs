use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use typeahead::TypeaheadConfig;

/// Environment variable naming the settings file
pub const CONFIG_PATH_VAR: &str = "QUOTE_PICKER_CONFIG";

/// Prefix of environment overrides, e.g. `QUOTE_PICKER__TYPEAHEAD__MIN_CHARS=2`
pub const ENV_PREFIX: &str = "QUOTE_PICKER";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_include_igv")]
    pub include_igv: bool,

    #[serde(default)]
    pub typeahead: TypeaheadConfig,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_include_igv() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            log_filter: default_log_filter(),
            include_igv: default_include_igv(),
            typeahead: TypeaheadConfig::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, SettingsError> {
        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());

        Self::load_from(&config_path)
    }

    /// Load from an optional settings file, overlaid by environment overrides
    pub fn load_from(config_path: &str) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.typeahead.code_field.is_empty() {
            return Err(SettingsError::Invalid(
                "typeahead.code_field must not be empty".to_string(),
            ));
        }
        if self.typeahead.label_field.is_empty() {
            return Err(SettingsError::Invalid(
                "typeahead.label_field must not be empty".to_string(),
            ));
        }
        if self.typeahead.max_suggestions == Some(0) {
            return Err(SettingsError::Invalid(
                "typeahead.max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
