use std::fmt;

#[derive(Debug)]
pub enum TryOnError {
    ConfigError(String),
    PreconditionViolation(String),
    CaptureUnavailable(String),
    ReadError(String),
    EncodingError(String),
    SerializationError(String),
    NetworkError(String),
    AuthError(String),
    NoImageInResponse(String),
    ResponseError(String),
}

impl fmt::Display for TryOnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryOnError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TryOnError::PreconditionViolation(msg) => {
                write!(f, "Precondition violation: {}", msg)
            }
            TryOnError::CaptureUnavailable(msg) => write!(f, "Capture unavailable: {}", msg),
            TryOnError::ReadError(msg) => write!(f, "Read error: {}", msg),
            TryOnError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
            TryOnError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            TryOnError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            TryOnError::AuthError(msg) => write!(f, "Authentication error: {}", msg),
            TryOnError::NoImageInResponse(msg) => write!(f, "No image in response: {}", msg),
            TryOnError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl std::error::Error for TryOnError {}

pub type Result<T> = std::result::Result<T, TryOnError>;
