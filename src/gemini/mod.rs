pub mod transport;
pub mod tryon_client;

use crate::{config::GeminiConfig, error::Result};
use std::sync::Arc;

pub use transport::{GenerativeBackend, HttpBackend};
pub use tryon_client::TryOnClient;

#[derive(Clone, Debug)]
pub struct GeminiClient {
    tryon_client: TryOnClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let model = config.model().to_string();
        let backend = Arc::new(HttpBackend::new(&config)?);

        Ok(Self {
            tryon_client: TryOnClient::new(backend, model),
        })
    }

    /// Builds a client over a custom backend, e.g. a stub transport in
    /// tests or a proxied deployment.
    pub fn with_backend(backend: Arc<dyn GenerativeBackend>, model: impl Into<String>) -> Self {
        Self {
            tryon_client: TryOnClient::new(backend, model),
        }
    }

    pub fn tryon(&self) -> &TryOnClient {
        &self.tryon_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TryOnError;

    #[test]
    fn test_client_requires_a_credential() {
        let err = GeminiClient::new(GeminiConfig::new()).unwrap_err();
        assert!(matches!(err, TryOnError::ConfigError(_)));
    }

    #[test]
    fn test_client_uses_configured_model() {
        let client = GeminiClient::new(
            GeminiConfig::new()
                .with_api_key("test-key")
                .with_model("gemini-test"),
        )
        .unwrap();
        assert_eq!(client.tryon().model(), "gemini-test");
    }
}
