use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base URL used when neither config.toml nor the environment names one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: PathBuf,
    pub api_url: String,
}

/// On-disk config file (~/.taskboard/config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api_url: Option<String>,
}

/// Read `<base_dir>/config.toml`, returning defaults if missing or unparseable.
pub fn load_config_file(base_dir: &Path) -> ConfigFile {
    let path = base_dir.join("config.toml");
    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
            Ok(cf) => cf,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config.toml, using defaults");
                ConfigFile::default()
            }
        },
        Err(_) => ConfigFile::default(),
    }
}

/// Write a `ConfigFile` to `<base_dir>/config.toml`.
pub fn save_config_file(base_dir: &Path, config_file: &ConfigFile) -> Result<()> {
    let path = base_dir.join("config.toml");
    let contents =
        toml::to_string_pretty(config_file).context("failed to serialize config.toml")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

impl Config {
    pub fn new(base_dir: PathBuf, api_url: String) -> Self {
        Self { base_dir, api_url }
    }

    pub fn load() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Could not find home directory")?;
        let base_dir = home_dir.join(".taskboard");

        let config_file = load_config_file(&base_dir);
        let api_url = std::env::var("TASKBOARD_API_URL")
            .ok()
            .or(config_file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let config = Self::new(base_dir, api_url);
        tracing::debug!(base_dir = %config.base_dir.display(), api_url = %config.api_url, "config loaded");
        Ok(config)
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir).context("Failed to create base directory")?;
        Ok(())
    }

    /// Write a default config.toml if missing (or unconditionally with `force`).
    pub fn init_default_files(&self, force: bool) -> Result<()> {
        self.ensure_dirs()?;
        let path = self.base_dir.join("config.toml");
        if force || !path.exists() {
            let defaults = ConfigFile {
                api_url: Some(DEFAULT_API_URL.to_string()),
            };
            save_config_file(&self.base_dir, &defaults)?;
        }
        Ok(())
    }

    /// Where the session token lives: ~/.taskboard/token
    pub fn token_path(&self) -> PathBuf {
        self.base_dir.join("token")
    }
}
