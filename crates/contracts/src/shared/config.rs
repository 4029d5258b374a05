use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Transient status message settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    #[serde(default = "default_action_label")]
    pub action_label: String,
}

fn default_duration_ms() -> u32 {
    3000
}

fn default_action_label() -> String {
    "Close".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            action_label: default_action_label(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[notifications]
duration_ms = 3000
action_label = "Close"
"#;

/// Load configuration
///
/// Uses `overrides` (TOML text) when given, otherwise the embedded default.
/// Keys missing from the overrides keep their default values.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<Config> {
    match overrides {
        Some(text) => {
            log::info!("Loading config from overrides");
            toml::from_str(text).context("invalid configuration overrides")
        }
        None => {
            log::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG).context("invalid embedded configuration")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.notifications.duration_ms, 3000);
        assert_eq!(config.notifications.action_label, "Close");
    }

    #[test]
    fn test_partial_overrides_keep_defaults() {
        let config = load_config(Some("[notifications]\nduration_ms = 5000\n")).unwrap();
        assert_eq!(config.notifications.duration_ms, 5000);
        assert_eq!(config.notifications.action_label, "Close");

        let empty = load_config(Some("")).unwrap();
        assert_eq!(empty.notifications, NotificationConfig::default());
    }

    #[test]
    fn test_invalid_overrides_fail() {
        assert!(load_config(Some("[notifications]\nduration_ms = \"soon\"")).is_err());
    }
}
