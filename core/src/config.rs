use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
const CONFIG_FILE_NAME: &str = "config.json";
const API_URL_ENV: &str = "HABITGRID_API_URL";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Resolution order: environment variable, then the config file in
    /// the home directory, then the built-in default.
    pub fn load() -> Result<Self> {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                debug!("api url taken from {}", API_URL_ENV);
                return Ok(Config { api_url: url });
            }
        }

        match config_file_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Config::default()),
        }
    }

    fn from_file(path: PathBuf) -> Result<Self> {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not valid config JSON", path.display()))?;
        Ok(config)
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".habitgrid").join(CONFIG_FILE_NAME))
}
