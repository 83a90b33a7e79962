// app.rs
use crate::api::{FetchError, HttpListingsClient, ListingsApi};
use crate::auth::{service_credentials, CredentialProvider};
use crate::config::AppConfig;
use crate::search::ViewRegistry;

/// Everything a request handler needs, shared by all server workers.
pub struct AppState {
    pub config: AppConfig,
    pub api: Box<dyn ListingsApi>,
    /// Used for backend calls when the visitor has no `auth_token` cookie.
    pub service_credentials: Box<dyn CredentialProvider>,
    pub views: ViewRegistry,
}

impl AppState {
    pub fn new(config: AppConfig, api: Box<dyn ListingsApi>) -> Self {
        Self {
            service_credentials: service_credentials(config.api_token.clone()),
            config,
            api,
            views: ViewRegistry::default(),
        }
    }

    /// Wire up the real HTTP client for the configured backend.
    pub fn from_config(config: AppConfig) -> Result<Self, FetchError> {
        let client = HttpListingsClient::new(
            config.api_base_url.clone(),
            config.api_timeout,
            config.placeholder_image.clone(),
        )?;
        Ok(Self::new(config, Box::new(client)))
    }
}
