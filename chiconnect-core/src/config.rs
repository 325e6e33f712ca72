//! Global ChiConnect configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::kv::DirStore;
use crate::store::Store;

static DEFAULT_DATA_DIR: &str = "~/.chiconnect";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/chiconnect/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChiconnectConfig {
    /// Where the store keeps its JSON files
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for ChiconnectConfig {
    fn default() -> Self {
        ChiconnectConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl ChiconnectConfig {
    pub fn config_path() -> StoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StoreError::Config("Could not determine config directory".into()))?
            .join("chiconnect");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/chiconnect/config.toml, creating a commented default
    /// file first if there is none.
    pub fn load() -> StoreResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from a specific file. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> StoreResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| StoreError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| StoreError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| StoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> StoreResult<()> {
        let contents = format!(
            "\
# chiconnect configuration

# Where your events, connections and profile are stored:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| StoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Open the directory-backed store this config points at.
    pub fn open_store(&self) -> StoreResult<Store<DirStore>> {
        Ok(Store::new(DirStore::open(self.data_path())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ChiconnectConfig::load_from(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config, ChiconnectConfig::default());
    }

    #[test]
    fn commented_default_file_parses_as_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        ChiconnectConfig::create_default_config(&path).unwrap();
        let config = ChiconnectConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn save_then_load_custom_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let config = ChiconnectConfig {
            data_dir: tmp.path().join("data"),
        };

        config.save_to(&path).unwrap();
        assert_eq!(ChiconnectConfig::load_from(&path).unwrap(), config);
        assert_eq!(config.data_path(), tmp.path().join("data"));
    }

    #[test]
    fn default_data_dir_is_not_serialized() {
        let content = toml::to_string_pretty(&ChiconnectConfig::default()).unwrap();
        assert!(!content.contains("data_dir"));
    }

    #[test]
    fn open_store_creates_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ChiconnectConfig {
            data_dir: tmp.path().join("data"),
        };

        let store = config.open_store().unwrap();
        assert!(store.backend().dir().is_dir());
    }
}
