//! Application configuration for sends.
//!
//! User config lives at `~/.sends/sends.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SendsError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "sends.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".sends";

// ---------------------------------------------------------------------------
// Config structs (matching sends.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Content subdirectory under `<site>/content/` used when `--type` is absent.
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Document file name to scan, matched case-insensitively.
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            content_type: default_content_type(),
            index_file: default_index_file(),
        }
    }
}

fn default_content_type() -> String {
    "posts".into()
}
fn default_index_file() -> String {
    "index.md".into()
}

// ---------------------------------------------------------------------------
// Scan config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime scan configuration, merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root of the static site.
    pub site_path: PathBuf,
    /// Content subdirectory, e.g. `posts`.
    pub content_type: String,
    /// Document file name to scan.
    pub index_file: String,
}

impl ScanConfig {
    /// Build a scan config for `site_path`, letting `content_type` override
    /// the configured default.
    pub fn new(
        site_path: impl Into<PathBuf>,
        content_type: Option<&str>,
        config: &AppConfig,
    ) -> Self {
        Self {
            site_path: site_path.into(),
            content_type: content_type
                .map(String::from)
                .unwrap_or_else(|| config.defaults.content_type.clone()),
            index_file: config.defaults.index_file.clone(),
        }
    }

    /// `<site>/content/<type>`.
    pub fn content_path(&self) -> PathBuf {
        self.site_path.join("content").join(&self.content_type)
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.sends/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| SendsError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.sends/sends.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does
/// not exist or no home directory can be found.
pub fn load_config() -> Result<AppConfig> {
    let Ok(path) = config_file_path() else {
        tracing::debug!("no home directory, using default config");
        return Ok(AppConfig::default());
    };

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SendsError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| SendsError::config(format!("failed to parse {}: {e}", path.display())))?;

    if config.defaults.content_type.is_empty() {
        return Err(SendsError::config(format!(
            "{}: defaults.content_type must not be empty",
            path.display()
        )));
    }

    tracing::debug!(?path, "loaded config file");
    Ok(config)
}
