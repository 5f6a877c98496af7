// Configuration module: resolves the two backend base URLs at startup
// and keeps one process-wide copy for code that sits outside the
// constructor chain (the services themselves take their base URL
// explicitly, see `services`).

use anyhow::{bail, Result};
use std::sync::RwLock;

/// Base URLs of the two backend services the client talks to.
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub upload_service_url: String,
    pub api_service_url: String,
}

impl AppConfig {
    /// Resolve the configuration from the environment variables
    /// `UPLOAD_SERVICE_URL` and `API_SERVICE_URL`, each falling back to
    /// `http://localhost:8000` when unset.
    pub fn from_env() -> Self {
        AppConfig {
            upload_service_url: std::env::var("UPLOAD_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            api_service_url: std::env::var("API_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
        }
    }
}

static GLOBAL_CONFIG: RwLock<Option<AppConfig>> = RwLock::new(None);

/// Store the configuration process-wide. Expected to be called once by
/// the entry point; a later call silently overwrites the stored value.
pub fn init_global_config(config: AppConfig) {
    let mut guard = GLOBAL_CONFIG
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(config);
}

/// Read the process-wide configuration. Fails if `init_global_config`
/// has not run yet.
pub fn global_config() -> Result<AppConfig> {
    let guard = GLOBAL_CONFIG
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    match guard.as_ref() {
        Some(config) => Ok(config.clone()),
        None => bail!("Config not initialized"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global slot and the environment are process-wide, so each of
    // these tests covers its whole lifecycle in a single function.

    #[test]
    fn global_config_lifecycle() {
        let err = global_config().unwrap_err();
        assert_eq!(err.to_string(), "Config not initialized");

        let config = AppConfig {
            upload_service_url: "http://uploads.test".into(),
            api_service_url: "http://api.test".into(),
        };
        init_global_config(config.clone());
        assert_eq!(global_config().unwrap(), config);

        // A second init overwrites without complaint.
        let other = AppConfig {
            upload_service_url: "http://other.test".into(),
            api_service_url: "http://other.test".into(),
        };
        init_global_config(other.clone());
        assert_eq!(global_config().unwrap(), other);
    }

    #[test]
    fn from_env_defaults_and_overrides() {
        std::env::remove_var("UPLOAD_SERVICE_URL");
        std::env::remove_var("API_SERVICE_URL");
        let config = AppConfig::from_env();
        assert_eq!(config.upload_service_url, "http://localhost:8000");
        assert_eq!(config.api_service_url, "http://localhost:8000");

        std::env::set_var("UPLOAD_SERVICE_URL", "http://uploads.test:9001");
        std::env::set_var("API_SERVICE_URL", "http://api.test:9002");
        let config = AppConfig::from_env();
        assert_eq!(config.upload_service_url, "http://uploads.test:9001");
        assert_eq!(config.api_service_url, "http://api.test:9002");

        std::env::remove_var("UPLOAD_SERVICE_URL");
        std::env::remove_var("API_SERVICE_URL");
    }
}
