use crate::{
    config::GeminiConfig,
    error::{Result, TryOnError},
    models::{GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;
use reqwest::StatusCode;

/// The outbound seam of the try-on service. One call, one round trip; no
/// retries happen behind this trait.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl HttpBackend {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TryOnError::ConfigError("no Gemini API key configured".into()))?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_base: config.api_base().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint_for_model(&self, model: &str) -> String {
        let trimmed = model.trim();
        let model_path = if trimmed.starts_with("models/") {
            trimmed.to_string()
        } else {
            format!("models/{}", trimmed)
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }
}

#[async_trait]
impl GenerativeBackend for HttpBackend {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint_for_model(model);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| TryOnError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TryOnError::AuthError(format!(
                "service rejected the credential ({})",
                status
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Generation request failed: {} {}", status, body);
            return Err(TryOnError::ResponseError(format!("{}: {}", status, body)));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| TryOnError::ResponseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Content;

    fn backend_with_base(base: &str) -> HttpBackend {
        HttpBackend::new(&GeminiConfig::new().with_api_key("test-key").with_api_base(base))
            .unwrap()
    }

    #[test]
    fn test_endpoint_shapes() {
        let backend = backend_with_base("https://example.test/v1beta/");
        assert_eq!(
            backend.endpoint_for_model("gemini-2.5-flash-image"),
            "https://example.test/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
        assert_eq!(
            backend.endpoint_for_model("models/gemini-2.5-flash-image"),
            "https://example.test/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }

    #[test]
    fn test_missing_key_is_a_config_error() {
        let err = HttpBackend::new(&GeminiConfig::new()).unwrap_err();
        assert!(matches!(err, TryOnError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_network_error() {
        let backend = backend_with_base("http://127.0.0.1:9");
        let request = GenerateContentRequest {
            contents: vec![Content::default()],
        };

        let err = backend
            .generate_content("gemini-2.5-flash-image", &request)
            .await
            .unwrap_err();
        assert!(matches!(err, TryOnError::NetworkError(_)));
    }
}
