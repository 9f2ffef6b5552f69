use crate::{
    error::{Result, TryOnError},
    models::{
        default_angle_labels, Content, GenerateContentRequest, GenerateContentResponse, Part,
        TryOnRequest, TryOnResponse,
    },
};
use std::sync::Arc;

use super::transport::GenerativeBackend;

#[derive(Clone)]
pub struct TryOnClient {
    backend: Arc<dyn GenerativeBackend>,
    model: String,
}

impl std::fmt::Debug for TryOnClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryOnClient")
            .field("model", &self.model)
            .finish()
    }
}

impl TryOnClient {
    pub fn new(backend: Arc<dyn GenerativeBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![("gemini-2.5-flash-image", "Gemini 2.5 Flash Image", "Google")]
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Composes one try-on request and submits it. Exactly one round trip
    /// happens per call; failures are reported to the caller unretried,
    /// and no state survives the invocation.
    pub async fn generate(&self, request: TryOnRequest) -> Result<TryOnResponse> {
        if request.garments.is_empty() {
            return Err(TryOnError::PreconditionViolation(
                "at least one garment image is required".into(),
            ));
        }

        let angle_labels = request
            .angle_labels
            .clone()
            .unwrap_or_else(default_angle_labels);

        let parts = build_parts(&request, &angle_labels);
        let payload = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        log::info!("Generating try-on composite with model: {}", self.model);
        log::debug!(
            "Request carries {} image part(s) and 1 instruction part",
            1 + request.garments.len()
        );

        let response = self.backend.generate_content(&self.model, &payload).await?;
        let image_data = extract_image(&response)?;

        Ok(TryOnResponse {
            image_data,
            model: self.model.clone(),
        })
    }
}

/// Part order is fixed: person image, garment images as supplied, then the
/// single instruction text.
fn build_parts(request: &TryOnRequest, angle_labels: &[String]) -> Vec<Part> {
    let mut parts = Vec::with_capacity(request.garments.len() + 2);
    parts.push(Part::inline_image(
        request.person.media_type(),
        request.person.payload(),
    ));

    for garment in &request.garments {
        parts.push(Part::inline_image(garment.media_type(), garment.payload()));
    }

    parts.push(Part::text(build_instruction(
        &request.garment_description,
        &request.background_directive,
        angle_labels,
    )));

    parts
}

fn build_instruction(description: &str, background: &str, angle_labels: &[String]) -> String {
    let angle_list = angle_labels.join(", ");
    format!(
        "You are a top-tier AI fashion stylist.\n\
         Tasks:\n\
         1. Keep the person's face, hairstyle, and body pose exactly as in the first image.\n\
         2. Replace the worn clothing with the garment(s) shown in the following image(s) ({description}).\n\
         3. Scene setting: {background}.\n\
         4. Composition: show the subject from multiple angles in a single image: {angle_list}.\n\
         5. Blend lighting and shadows naturally, with commercial-grade photographic quality.\n\
         \n\
         Output the generated image directly, not a description of it."
    )
}

/// Scans the first candidate's parts in order and returns the first one
/// carrying inline image data, rewrapped as a PNG data URI.
fn extract_image(response: &GenerateContentResponse) -> Result<String> {
    let parts = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    for part in parts {
        match part {
            Part::InlineData { inline_data } => {
                return Ok(format!("data:image/png;base64,{}", inline_data.data));
            }
            Part::Text { .. } | Part::Other(_) => {}
        }
    }

    Err(TryOnError::NoImageInResponse(
        "the first candidate carried no inline image data".into(),
    ))
}
