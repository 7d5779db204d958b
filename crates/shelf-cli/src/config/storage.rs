//! Config storage for persisting CLI settings.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Stored configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "shelf").context("Could not determine config directory")?;

    Ok(dirs.config_dir().join("config.json"))
}

/// Save the config to disk.
pub fn save_config(config: &StoredConfig) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json).context("Failed to write config file")?;

    Ok(())
}

/// Load the config from disk, or defaults when none has been saved.
pub fn load_config() -> Result<StoredConfig> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(StoredConfig::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read config file")?;
    let config = serde_json::from_str(&json).context("Invalid config file")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted() {
        let json = serde_json::to_string(&StoredConfig::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn reads_camel_case() {
        let config: StoredConfig =
            serde_json::from_str(r#"{"backendUrl":"http://localhost:9000","pageSize":10}"#)
                .unwrap();
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.page_size, Some(10));
    }
}
