use crate::encoding::EncodedImage;
use serde::{Deserialize, Serialize};

/// The four composite views requested when the caller supplies no labels.
pub const DEFAULT_ANGLE_LABELS: [&str; 4] = ["front", "left 45°", "right 45°", "back"];

pub fn default_angle_labels() -> Vec<String> {
    DEFAULT_ANGLE_LABELS.iter().map(|s| s.to_string()).collect()
}

/// Bundled inputs for one generation attempt. Immutable once submitted;
/// the person image must come first and at least one garment is required.
#[derive(Debug, Clone, Deserialize)]
pub struct TryOnRequest {
    pub person: EncodedImage,
    pub garments: Vec<EncodedImage>,
    pub garment_description: String,
    pub background_directive: String,
    pub angle_labels: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct TryOnResponse {
    /// `data:image/png;base64,…` URI of the generated composite.
    pub image_data: String,
    pub model: String,
}
