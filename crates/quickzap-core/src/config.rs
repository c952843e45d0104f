use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::directory::{CatalogSource, RESTCOUNTRIES_URL};
use crate::error::{Error, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Country directory endpoint; `None` uses restcountries.com
    pub catalog_url: Option<String>,
    /// Skip the directory and use the built-in country list
    pub offline: bool,
    /// Picking a country for a message also makes it the default
    pub persist_selection_as_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            catalog_url: None,
            offline: false,
            persist_selection_as_default: true,
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, config_content)?;
        Ok(())
    }

    /// Where the catalog should come from; `force_offline` overrides the file.
    pub fn catalog_source(&self, force_offline: bool) -> CatalogSource {
        if self.offline || force_offline {
            CatalogSource::Builtin
        } else {
            CatalogSource::Remote(
                self.catalog_url
                    .clone()
                    .unwrap_or_else(|| RESTCOUNTRIES_URL.to_string()),
            )
        }
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(Error::NoDirectory { kind: "config" })?;

        Ok(config_dir.join("quickzap").join("config.json"))
    }
}
