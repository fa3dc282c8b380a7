use reqwest::Client;

use crate::config::Config;
use crate::llm_client::{Backend, LlmClient, LlmEndpoints};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-user data: every request brings its own API key.
#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub endpoints: LlmEndpoints,
    pub config: Config,
}

impl AppState {
    pub fn new(http: Client, config: Config) -> Self {
        Self {
            http,
            endpoints: config.endpoints(),
            config,
        }
    }

    /// Client for an explicitly chosen vendor.
    pub fn llm(&self, backend: Backend, api_key: &str) -> LlmClient {
        LlmClient::new(
            self.http.clone(),
            &self.endpoints,
            backend,
            api_key.to_string(),
        )
    }

    /// Client whose vendor is inferred from the key.
    pub fn llm_for_key(&self, api_key: &str) -> LlmClient {
        LlmClient::for_api_key(self.http.clone(), &self.endpoints, api_key.to_string())
    }
}
