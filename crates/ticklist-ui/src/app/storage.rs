use anyhow::anyhow;
use ticklist_core::{
  KeyValueStore,
  WidgetConfig
};

const WIDGET_CONFIG_TOML: &str =
  include_str!(
    "../../assets/ticklist.toml"
  );

/// `window.localStorage` behind the
/// core storage trait.
pub struct BrowserStorage {
  storage: web_sys::Storage
}

impl BrowserStorage {
  pub fn local() -> Option<Self> {
    web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      })
      .map(|storage| {
        Self {
          storage
        }
      })
  }
}

impl KeyValueStore for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>
  {
    self
      .storage
      .get_item(key)
      .map_err(|err| {
        anyhow!(
          "localStorage read of {key} \
           failed: {err:?}"
        )
      })
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .storage
      .set_item(key, value)
      .map_err(|err| {
        anyhow!(
          "localStorage write of \
           {key} failed: {err:?}"
        )
      })
  }

  fn remove_item(
    &mut self,
    key: &str
  ) -> anyhow::Result<()> {
    self
      .storage
      .remove_item(key)
      .map_err(|err| {
        anyhow!(
          "localStorage remove of \
           {key} failed: {err:?}"
        )
      })
  }
}

pub fn load_widget_config()
-> WidgetConfig {
  match WidgetConfig::from_toml_str(
    WIDGET_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        key_prefix = %config.storage.key_prefix,
        "loaded widget config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(?error, "failed to parse widget config; using defaults");
      WidgetConfig::default()
    }
  }
}
