//! The client handle
//!
//! A [`Client`] bundles read-only configuration with the HTTP transport.
//! Operations live next to their concern: page fetching and creation in
//! [`crate::messages`], history walking in [`crate::pagination`].

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::Transport;

/// A GroupMe API client
///
/// Cheap to clone is not a goal; construct one per token/base-URL pair and
/// share it by reference. Nothing inside is mutated after construction.
pub struct Client {
    config: ClientConfig,
    pub(crate) transport: Transport,
}

impl Client {
    /// Create a client for the production API with the given access token
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(access_token))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("user_agent", &self.config.user_agent)
            .finish_non_exhaustive()
    }
}
