//! Configuration for the modctl ecosystem.
//!
//! Lives at `~/.modctl/config.toml`. The only deployment-specific setting is
//! the items API base URL; resolution priority is CLI flag / `MODCTL_API_URL`
//! env var, then the config file, then the local development default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModError, Result};

/// Default base URL: the upstream worker's local dev port
pub const DEFAULT_BASE_URL: &str = "http://localhost:8787";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

impl ModConfig {
    /// Config file path: ~/.modctl/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".modctl/config.toml")
    }

    /// Load config from the default path; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|err| ModError::config(format!("failed to read {}: {err}", path.display())))?;

        toml::from_str(&content)
            .map_err(|err| ModError::config(format!("invalid TOML in {}: {err}", path.display())))
    }

    /// Resolve the items API base URL.
    ///
    /// Priority: explicit override (flag or env) > config file > default.
    pub fn resolve_endpoint(override_url: Option<&str>) -> String {
        if let Some(url) = override_url {
            return url.to_string();
        }

        if let Ok(config) = Self::load() {
            if let Some(url) = config.api.base_url {
                return url;
            }
        }

        DEFAULT_BASE_URL.to_string()
    }
}
