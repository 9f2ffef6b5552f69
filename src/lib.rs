pub mod config;
pub mod encoding;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;

pub use config::GeminiConfig;
pub use encoding::{
    encode_files, encode_from_file, encode_from_frame, EncodedImage, FrameSource,
};
pub use error::{Result, TryOnError};
pub use gemini::{GeminiClient, GenerativeBackend, HttpBackend, TryOnClient};
pub use models::*;
