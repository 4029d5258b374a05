use contracts::shared::config::{load_config, Config};

/// localStorage key holding optional TOML overrides
pub const CONFIG_STORAGE_KEY: &str = "product_catalog.config";

fn read_overrides() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}

/// Load the app configuration, falling back to defaults on bad overrides
pub fn load_app_config() -> Config {
    let overrides = read_overrides();
    match load_config(overrides.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{:#}; using default configuration", e);
            Config::default()
        }
    }
}
