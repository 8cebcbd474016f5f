use std::sync::Arc;

use anyhow::{Context, Result};
use iced::Task;
use log::info;

use crate::common::messages::DomainMessage;
use crate::domains::users::UsersMessage;
use crate::infra::{
    api_client::{ApiClient, normalize_base_url},
    constants::{env, routes::DEFAULT_BASE_URL},
    services::{UserDirectoryApiAdapter, UserDirectoryService},
};
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: Arc<str>,
    pub api_key: Option<Arc<str>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: Arc::from(api_url.into()),
            api_key: None,
        }
    }

    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; missing or blank values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key).filter(|value| !value.trim().is_empty())
        };

        let api_url = non_blank(env::API_URL)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = non_blank(env::API_KEY).map(|key| Arc::from(key.trim()));

        Self {
            api_url: Arc::from(api_url),
            api_key,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The base URL after normalisation, checked to be a usable http(s) URL.
    pub fn validated_api_url(&self) -> Result<url::Url> {
        let normalized = normalize_base_url(&self.api_url);
        let parsed = url::Url::parse(&normalized)
            .with_context(|| format!("invalid API URL '{}'", self.api_url))?;
        if parsed.host_str().is_none() {
            anyhow::bail!("API URL '{}' has no host", self.api_url);
        }
        Ok(parsed)
    }
}

/// Pick the users service for this configuration.
pub fn directory_service(
    config: &AppConfig,
) -> Result<Arc<dyn UserDirectoryService>> {
    config.validated_api_url()?;
    let client =
        ApiClient::new(config.api_url(), config.api_key().map(str::to_string))?;
    Ok(Arc::new(UserDirectoryApiAdapter::new(Arc::new(client))))
}

/// Initial state plus the one-off fetch of the users list.
pub fn runtime_boot(
    config: &AppConfig,
    directory: Arc<dyn UserDirectoryService>,
) -> (State, Task<DomainMessage>) {
    info!("Booting against {}", config.api_url());
    let state = State::new(config.clone(), directory);
    (
        state,
        Task::done(DomainMessage::Users(UsersMessage::LoadUsers)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_demo_service() {
        let config = AppConfig::from_lookup(lookup(&[]));

        assert_eq!(config.api_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (env::API_URL, "http://127.0.0.1:9000/api"),
            (env::API_KEY, " secret "),
        ]));

        assert_eq!(config.api_url(), "http://127.0.0.1:9000/api");
        assert_eq!(config.api_key(), Some("secret"));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            (env::API_URL, "  "),
            (env::API_KEY, ""),
        ]));

        assert_eq!(config.api_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn invalid_url_yields_no_service() {
        let broken = AppConfig::new("https://exa mple.com");
        assert!(directory_service(&broken).is_err());
        assert!(directory_service(&AppConfig::default()).is_ok());
    }

    #[test]
    fn validates_api_url() {
        assert!(AppConfig::new("reqres.in/api").validated_api_url().is_ok());
        assert!(
            AppConfig::new("https://exa mple.com")
                .validated_api_url()
                .is_err()
        );
    }
}
