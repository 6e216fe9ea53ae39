//! Application configuration loaded from `storefront.toml` and the environment.
//!
//! Every field has a default, so a missing config file is not an error. Environment
//! variables (`STOREFRONT_API_URL`, `STOREFRONT_USER_ID`) win over the file, which
//! lets `.env` point a checkout at a different backend without editing TOML.

use crate::{
    errors::{Error, Result},
    ui::notify::ToastPolicy,
};
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tracing::{debug, info};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "storefront.toml";

/// Environment variable overriding [`AppConfig::api_base_url`].
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Environment variable overriding [`AppConfig::user_id`].
pub const USER_ID_ENV: &str = "STOREFRONT_USER_ID";

/// Runtime settings for the storefront
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Store API root, e.g. `http://localhost:5000/api`
    pub api_base_url: String,
    /// Cart owner sent with every cart request
    pub user_id: String,
    /// Overall timeout for one API request, in seconds
    pub request_timeout_secs: u64,
    /// Whether a new toast replaces the current one or stacks below it
    pub toast_policy: ToastPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            user_id: "default".to_string(),
            request_timeout_secs: 30,
            toast_policy: ToastPolicy::Single,
        }
    }
}

impl AppConfig {
    /// Parses a TOML document; absent keys keep their defaults.
    ///
    /// # Errors
    /// Returns `Error::Config` if the TOML is malformed or a value has the wrong type.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse storefront config: {e}"),
        })
    }

    /// Applies overrides looked up through `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            debug!("{API_URL_ENV} overrides api_base_url");
            self.api_base_url = url;
        }
        if let Some(user) = lookup(USER_ID_ENV).filter(|v| !v.trim().is_empty()) {
            debug!("{USER_ID_ENV} overrides user_id");
            self.user_id = user;
        }
    }

    /// [`Self::request_timeout_secs`] as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Loads the configuration from `path`, then applies environment overrides.
///
/// When `path` is `None` the default `storefront.toml` is tried and silently
/// skipped if it does not exist. An explicitly given path must exist.
///
/// # Errors
/// Returns `Error::Config` if an explicit file is missing, or any file cannot be
/// read or parsed.
pub fn load_app_config(path: Option<&Path>) -> Result<AppConfig> {
    let mut config = match path {
        Some(explicit) => read_config_file(explicit)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                read_config_file(default_path)?
            } else {
                debug!("No {DEFAULT_CONFIG_PATH} found, using defaults");
                AppConfig::default()
            }
        }
    };
    config.apply_overrides(|key| std::env::var(key).ok());
    info!(
        api = %config.api_base_url,
        user = %config.user_id,
        "Storefront configuration loaded"
    );
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AppConfig> {
    debug!("Attempting to load configuration from: {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    AppConfig::from_toml(&contents)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            api_base_url = "https://shop.example.com/api"
            user_id = "priya"
            request_timeout_secs = 5
            toast_policy = "stack"
        "#;

        let config = AppConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.api_base_url, "https://shop.example.com/api");
        assert_eq!(config.user_id, "priya");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.toast_policy, ToastPolicy::Stack);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_toml(r#"user_id = "ravi""#).unwrap();
        assert_eq!(config.user_id, "ravi");
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.toast_policy, ToastPolicy::Single);
    }

    #[test]
    fn test_bad_value_is_config_error() {
        let err = AppConfig::from_toml("request_timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            API_URL_ENV => Some("http://10.0.0.2:5000/api".to_string()),
            USER_ID_ENV => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config.api_base_url, "http://10.0.0.2:5000/api");
        // Blank override is ignored
        assert_eq!(config.user_id, "default");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = load_app_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
