use std::env;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub model: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            api_base: None,
            model: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `GEMINI_API_KEY` (falling back to `GOOGLE_API_KEY`) plus the
    /// optional `GEMINI_API_BASE` and `GEMINI_IMAGE_MODEL` overrides.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .or_else(|| env::var("GOOGLE_API_KEY").ok())
            .filter(|key| !key.trim().is_empty());
        let api_base = env::var("GEMINI_API_BASE").ok();
        let model = env::var("GEMINI_IMAGE_MODEL").ok();

        GeminiConfig {
            api_key,
            api_base,
            model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = GeminiConfig::new()
            .with_api_key("test-key")
            .with_api_base("http://127.0.0.1:9")
            .with_model("gemini-test");

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.api_base(), "http://127.0.0.1:9");
        assert_eq!(config.model(), "gemini-test");
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = GeminiConfig::new();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.model(), DEFAULT_IMAGE_MODEL);
    }
}
