//! Configuration for the catalog client
//!
//! Settings are resolved once at startup from (lowest to highest precedence):
//! built-in defaults, `$XDG_CONFIG_HOME/marvel-rs/config.toml`,
//! `./marvel-rs.toml` and `MARVEL_*` environment variables.
//! After [`init`] they are read-only for the lifetime of the process.

use std::collections::HashMap;
use std::path::PathBuf;

use config::{Config as HierarchicalConfig, Environment, File};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

use crate::auth::Credentials;

const CONFIG_DIR_NAME: &str = "marvel-rs";
const LOCAL_CONFIG_FILE: &str = "marvel-rs.toml";
const ENV_PREFIX: &str = "MARVEL";

pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com/v1/public";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

static SETTINGS: OnceCell<Settings> = OnceCell::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("`{key}` is not set (use {env} or `{key}` in {file})")]
    Missing {
        key: &'static str,
        env: &'static str,
        file: String,
    },
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub public_key: String,
    pub private_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Settings {
    /// Load settings from the default config files and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config_files(), None)
    }

    /// Load settings from explicit files, optionally overriding the environment source
    pub fn load_from(
        files: Vec<PathBuf>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = HierarchicalConfig::builder()
            .set_default("public_key", "")?
            .set_default("private_key", "")?
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?;

        for file in files {
            tracing::debug!(path = %file.display(), "Adding config source");
            builder = builder.add_source(File::from(file).required(false));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let file = config_files()
            .last()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| LOCAL_CONFIG_FILE.to_string());

        if self.public_key.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "public_key",
                env: "MARVEL_PUBLIC_KEY",
                file,
            });
        }
        if self.private_key.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "private_key",
                env: "MARVEL_PRIVATE_KEY",
                file,
            });
        }
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.public_key.trim(), self.private_key.trim())
    }
}

fn config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        files.push(dir.join(CONFIG_DIR_NAME).join("config.toml"));
    }
    files.push(PathBuf::from(LOCAL_CONFIG_FILE));
    files
}

/// Resolve settings once and keep them for the rest of the process
pub fn init() -> Result<&'static Settings, ConfigError> {
    SETTINGS.get_or_try_init(Settings::load)
}
