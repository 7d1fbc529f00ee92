use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::Deserialize;

use crate::core::{catalog::DEFAULT_TABLE, extract::DEFAULT_SOURCES, matcher::DEFAULT_MARKER};

pub const CONFIG_FILE_NAME: &str = ".c3stringsrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_reference_language")]
    pub reference_language: String,
    #[serde(default = "default_sources")]
    pub sources: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_reference_language() -> String {
    "en".to_string()
}

fn default_sources() -> String {
    DEFAULT_SOURCES.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_language: default_reference_language(),
            sources: default_sources(),
            table: default_table(),
            marker: default_marker(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the sources glob is invalid or a name is empty.
    pub fn validate(&self) -> Result<()> {
        Pattern::new(&self.sources)
            .with_context(|| format!("Invalid glob pattern in 'sources': \"{}\"", self.sources))?;

        if self.reference_language.trim().is_empty() {
            bail!("'referenceLanguage' must not be empty");
        }
        if self.table.trim().is_empty() {
            bail!("'table' must not be empty");
        }
        if self.marker.is_empty() {
            bail!("'marker' must not be empty");
        }

        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or None if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
