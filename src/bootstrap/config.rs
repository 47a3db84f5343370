//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Locate the site config file
//! - Read TOML and map it onto the `SiteConfig` DTO
//! - Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! No validation and no default values: whatever is in the file is a fact.

use anyhow::Context;
use std::path::{Path, PathBuf};

use folio_core::SiteConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// `$FOLIO_CONFIG`, else `<platform config dir>/folio/config.toml`.
///
/// Returns `None` when neither is available.
pub fn resolve_config_path() -> Option<PathBuf> {
    resolve_config_path_from(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from), dirs::config_dir())
}

fn resolve_config_path_from(explicit: Option<PathBuf>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| config_dir.map(|dir| dir.join("folio").join("config.toml")))
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<SiteConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    SiteConfig::from_toml(&toml_value)
}
