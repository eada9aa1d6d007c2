use std::sync::Arc;

use crate::client::MondayClient;
use crate::config::{get_api_token, get_api_version, load_config, save_config};
use crate::error::{MondayError, MondayResult};
use crate::services::FetchService;

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    api_token: Option<String>,
    api_version: Option<String>,
    client: Option<Arc<MondayClient>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            api_token: None,
            api_version: None,
            client: None,
        }
    }

    /// Load context from the environment and saved configuration
    pub fn load() -> Self {
        Self {
            api_token: get_api_token().ok(),
            api_version: get_api_version(),
            client: None,
        }
    }

    /// Get or create a client (requires an API token)
    pub fn client(&mut self) -> MondayResult<Arc<MondayClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let api_token = self.api_token()?.clone();
        let client = Arc::new(MondayClient::with_api_version(
            &api_token,
            self.api_version.as_deref(),
        )?);
        self.client = Some(client.clone());
        Ok(client)
    }

    pub fn fetch_service(&mut self) -> MondayResult<FetchService> {
        Ok(FetchService::new(self.client()?))
    }

    /// Get the API token, loading from config if necessary
    pub fn api_token(&mut self) -> MondayResult<&String> {
        if self.api_token.is_none() {
            self.api_token = Some(get_api_token()?);
        }

        self.api_token.as_ref().ok_or(MondayError::ApiKeyNotFound)
    }

    /// Set and save a new API token
    pub fn set_api_token(&mut self, api_token: String) -> MondayResult<()> {
        let mut config = load_config()?;
        config.api_token = Some(api_token.clone());
        save_config(&config)?;
        self.api_token = Some(api_token);
        self.client = None;
        Ok(())
    }

    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some() || get_api_token().is_ok()
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for contexts with an explicit token, bypassing the saved config
pub struct CliContextBuilder {
    api_token: Option<String>,
    api_version: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            api_token: None,
            api_version: None,
        }
    }

    pub fn with_api_token(mut self, api_token: String) -> Self {
        self.api_token = Some(api_token);
        self
    }

    pub fn with_api_version(mut self, api_version: String) -> Self {
        self.api_version = Some(api_version);
        self
    }

    pub fn build(self) -> CliContext {
        match self.api_token {
            Some(api_token) => CliContext {
                api_token: Some(api_token),
                api_version: self.api_version,
                client: None,
            },
            None => {
                let mut context = CliContext::load();
                if self.api_version.is_some() {
                    context.api_version = self.api_version;
                }
                context
            }
        }
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
