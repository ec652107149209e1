use crate::client::ApiClient;
use crate::config::{load_config, resolve_base_url, save_config, Config};
use crate::error::OctofitResult;
use std::sync::Arc;

/// Central context for CLI operations: the resolved backend and a lazily
/// built client shared by every view.
pub struct CliContext {
    base_url: String,
    config: Config,
    client: Option<Arc<ApiClient>>,
}

impl CliContext {
    /// Load context from the environment and the saved configuration.
    /// `base_url` is the command-line override, if any.
    pub fn load(base_url: Option<&str>) -> Self {
        Self {
            base_url: resolve_base_url(base_url),
            config: load_config(),
            client: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get or create the shared client
    pub fn client(&mut self) -> OctofitResult<Arc<ApiClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(ApiClient::new(self.base_url.clone())?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Persist a new base URL and point this context at it
    pub fn set_base_url(&mut self, base_url: Option<String>) -> OctofitResult<()> {
        let mut config = self.config.clone();
        config.base_url = base_url;
        save_config(&config)?;

        self.config = config;
        self.base_url = resolve_base_url(None);
        self.client = None;
        Ok(())
    }

    pub fn set_default_format(&mut self, format: String) -> OctofitResult<()> {
        let mut config = self.config.clone();
        config.set_default_format(format)?;
        save_config(&config)?;
        self.config = config;
        Ok(())
    }
}

/// Builder for contexts with a fixed backend, bypassing the environment
pub struct CliContextBuilder {
    base_url: Option<String>,
    config: Config,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            config: Config::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> CliContext {
        let base_url = match self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => resolve_base_url(None),
        };

        CliContext {
            base_url,
            config: self.config,
            client: None,
        }
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
