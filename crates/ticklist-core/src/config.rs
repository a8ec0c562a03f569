use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::persist::StorageKeys;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Prepended to every storage key. Empty keeps the plain key names.
    pub key_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "todos".to_string(),
            placeholder: "What needs to be done?".to_string(),
        }
    }
}

impl WidgetConfig {
    #[tracing::instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let cfg: WidgetConfig =
            toml::from_str(text).context("failed parsing widget config")?;
        debug!(
            key_prefix = %cfg.storage.key_prefix,
            title = %cfg.display.title,
            "parsed widget config"
        );
        Ok(cfg)
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::new(self.storage.key_prefix.clone())
    }
}
