use crate::core::currency::{DEFAULT_FROM, DEFAULT_TO};
use crate::providers::frankfurter::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FrankfurterProviderConfig {
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for FrankfurterProviderConfig {
    fn default() -> Self {
        FrankfurterProviderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl FrankfurterProviderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub frankfurter: FrankfurterProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DefaultsConfig {
    pub from: String,
    pub to: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            from: DEFAULT_FROM.to_string(),
            to: DEFAULT_TO.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub debounce_ms: u64,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults when
    /// no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("app", "fxw", "fxw")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  frankfurter:
    base_url: "http://example.com/fx"
    timeout_secs: 5
defaults:
  from: "GBP"
  to: "JPY"
debounce_ms: 250
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.providers.frankfurter.base_url, "http://example.com/fx");
        assert_eq!(
            config.providers.frankfurter.timeout(),
            Some(Duration::from_secs(5))
        );
        assert_eq!(config.defaults.from, "GBP");
        assert_eq!(config.defaults.to, "JPY");
        assert_eq!(config.debounce(), Duration::from_millis(250));
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(
            config.providers.frankfurter.base_url,
            "https://api.frankfurter.app"
        );
        assert!(config.providers.frankfurter.timeout().is_none());
        assert_eq!(config.defaults.from, "USD");
        assert_eq!(config.defaults.to, "EUR");
        assert_eq!(config.debounce(), Duration::ZERO);

        let partial = r#"
providers:
  frankfurter:
    base_url: "http://localhost:8080"
"#;
        let config: AppConfig = serde_yaml::from_str(partial).unwrap();
        assert_eq!(config.providers.frankfurter.base_url, "http://localhost:8080");
        assert_eq!(config.defaults.from, "USD");
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let err = AppConfig::load_from_path("/definitely/not/here/config.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
