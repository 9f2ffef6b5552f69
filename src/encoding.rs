use crate::error::{Result, TryOnError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An image payload plus its declared media type. The payload is held as
/// raw base64 with the data-URI header already stripped, so request
/// assembly can use it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedImage {
    media_type: String,
    data: String,
}

impl EncodedImage {
    pub fn from_bytes(media_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            media_type: media_type.into(),
            data: BASE64.encode(bytes),
        }
    }

    /// Parses a `data:<mime>;base64,<payload>` string.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| TryOnError::EncodingError("missing data: scheme".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| TryOnError::EncodingError("missing payload separator".into()))?;
        let media_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| TryOnError::EncodingError("expected base64 encoding marker".into()))?;

        if media_type.is_empty() {
            return Err(TryOnError::EncodingError("empty media type".into()));
        }

        Ok(Self {
            media_type: media_type.to_string(),
            data: payload.to_string(),
        })
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Raw base64 payload without the data-URI header.
    pub fn payload(&self) -> &str {
        &self.data
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        BASE64
            .decode(self.data.as_bytes())
            .map_err(|e| TryOnError::EncodingError(e.to_string()))
    }
}

/// A live still-image source, e.g. a camera feed. The source owns the JPEG
/// codec and compresses the current frame at the requested quality.
pub trait FrameSource {
    fn capture_jpeg(&self, quality: f32) -> Option<Vec<u8>>;
}

/// Captures one frame as a JPEG `EncodedImage`. Quality is clamped to
/// [0, 1]. An unavailable source fails with `CaptureUnavailable`.
pub fn encode_from_frame<S: FrameSource + ?Sized>(
    source: &S,
    quality: f32,
) -> Result<EncodedImage> {
    let quality = quality.clamp(0.0, 1.0);
    let bytes = source.capture_jpeg(quality).ok_or_else(|| {
        TryOnError::CaptureUnavailable("no frame available from source".into())
    })?;

    Ok(EncodedImage::from_bytes("image/jpeg", &bytes))
}

/// Reads a user-selected file and encodes it with the media type implied
/// by its extension. Concurrent calls resolve independently; completion
/// order is not guaranteed.
pub async fn encode_from_file(path: impl AsRef<Path>) -> Result<EncodedImage> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| TryOnError::ReadError(format!("{}: {}", path.display(), e)))?;

    log::debug!("Encoded {} ({} bytes)", path.display(), bytes.len());

    Ok(EncodedImage::from_bytes(media_type_for_path(path), &bytes))
}

/// Reads several files concurrently and returns their images in the order
/// the paths were supplied. Each read is keyed by its original index, so a
/// slow first file never reorders the aggregate. The first failed read
/// fails the whole batch.
pub async fn encode_files(paths: &[impl AsRef<Path>]) -> Result<Vec<EncodedImage>> {
    let reads = paths.iter().map(|path| encode_from_file(path.as_ref()));
    join_all(reads).await.into_iter().collect()
}

pub fn media_type_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct StillFrame {
        bytes: Option<Vec<u8>>,
    }

    impl FrameSource for StillFrame {
        fn capture_jpeg(&self, _quality: f32) -> Option<Vec<u8>> {
            self.bytes.clone()
        }
    }

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_data_uri_round_trip_is_lossless() {
        let original: Vec<u8> = (0u8..=255).collect();
        let image = EncodedImage::from_bytes("image/png", &original);

        let uri = image.to_data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));

        let reparsed = EncodedImage::from_data_uri(&uri).unwrap();
        assert_eq!(reparsed.media_type(), "image/png");
        assert_eq!(reparsed.payload(), image.payload());
        assert_eq!(reparsed.decode().unwrap(), original);
    }

    #[test]
    fn test_from_data_uri_rejects_malformed_input() {
        assert!(EncodedImage::from_data_uri("image/png;base64,AAAA").is_err());
        assert!(EncodedImage::from_data_uri("data:image/png;base64").is_err());
        assert!(EncodedImage::from_data_uri("data:image/png,AAAA").is_err());
        assert!(EncodedImage::from_data_uri("data:;base64,AAAA").is_err());
    }

    #[test]
    fn test_frame_capture_produces_jpeg() {
        let source = StillFrame {
            bytes: Some(vec![0xFF, 0xD8, 0xFF, 0xE0]),
        };
        let image = encode_from_frame(&source, 0.85).unwrap();
        assert_eq!(image.media_type(), "image/jpeg");
        assert_eq!(image.decode().unwrap(), vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn test_frame_capture_unavailable() {
        let source = StillFrame { bytes: None };
        let err = encode_from_frame(&source, 0.85).unwrap_err();
        assert!(matches!(err, TryOnError::CaptureUnavailable(_)));
    }

    #[test]
    fn test_media_type_for_path() {
        assert_eq!(media_type_for_path(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("b.png")), "image/png");
        assert_eq!(
            media_type_for_path(Path::new("noext")),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_encode_from_file_matches_raw_bytes() {
        let raw = b"not really a jpeg but enough for the codec".to_vec();
        let path = temp_file("stylestudio_encode_one.jpg", &raw);

        let image = encode_from_file(&path).await.unwrap();
        assert_eq!(image.media_type(), "image/jpeg");
        assert_eq!(image.decode().unwrap(), raw);
    }

    #[tokio::test]
    async fn test_encode_from_file_read_error() {
        let err = encode_from_file("/definitely/not/here.png").await.unwrap_err();
        assert!(matches!(err, TryOnError::ReadError(_)));
    }

    #[tokio::test]
    async fn test_concurrent_reads_resolve_independently() {
        let a = temp_file("stylestudio_concurrent_a.png", b"aaaa");
        let b = temp_file("stylestudio_concurrent_b.png", b"bb");

        let (left, right) = tokio::join!(encode_from_file(&a), encode_from_file(&b));
        assert_eq!(left.unwrap().decode().unwrap(), b"aaaa");
        assert_eq!(right.unwrap().decode().unwrap(), b"bb");
    }

    #[tokio::test]
    async fn test_encode_files_preserves_selection_order() {
        // A much larger first file so its read is the slow one.
        let first = temp_file("stylestudio_order_first.png", &vec![1u8; 512 * 1024]);
        let second = temp_file("stylestudio_order_second.png", b"\x02");

        let images = encode_files(&[&first, &second]).await.unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].decode().unwrap(), vec![1u8; 512 * 1024]);
        assert_eq!(images[1].decode().unwrap(), vec![2u8]);
    }

    #[tokio::test]
    async fn test_encode_files_fails_on_unreadable_entry() {
        let good = temp_file("stylestudio_batch_good.png", b"ok");
        let result = encode_files(&[good.as_path(), Path::new("/missing.png")]).await;
        assert!(matches!(result, Err(TryOnError::ReadError(_))));
    }
}
