//! Photo intake. Turns uploaded bytes into a self-contained image reference.
//!
//! The rendered document must never point at a file path or remote URL, so an
//! upload is sniffed, checked, and re-emitted as a `data:` URI. Encoding is
//! CPU-bound and runs through `tokio::task::spawn_blocking`.

use std::fmt;

use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inline placeholder shown whenever the resume has no photo.
const PLACEHOLDER_SVG: &str = concat!(
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="180" height="180" viewBox="0 0 180 180">"##,
    r##"<rect width="180" height="180" fill="#e2e8f0"/>"##,
    r##"<circle cx="90" cy="70" r="34" fill="#94a3b8"/>"##,
    r##"<path d="M30 170c6-38 32-58 60-58s54 20 60 58z" fill="#94a3b8"/>"##,
    "</svg>"
);

#[derive(Debug, Error, PartialEq)]
pub enum PhotoError {
    #[error("uploaded photo is empty")]
    Empty,

    #[error("uploaded photo is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    #[error("uploaded file is not a supported image (png, jpeg, gif, webp)")]
    UnsupportedFormat,

    #[error("photo could not be read: {0}")]
    ReadFailed(String),
}

/// An image embedded as a `data:` URI.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddedImage(String);

impl EmbeddedImage {
    /// Validates uploaded bytes and encodes them as a data URI.
    pub fn from_upload(bytes: &[u8], max_bytes: usize) -> Result<Self, PhotoError> {
        if bytes.is_empty() {
            return Err(PhotoError::Empty);
        }
        if bytes.len() > max_bytes {
            return Err(PhotoError::TooLarge {
                size: bytes.len(),
                limit: max_bytes,
            });
        }

        let format = image::guess_format(bytes).map_err(|_| PhotoError::UnsupportedFormat)?;
        let mime = match format {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            _ => return Err(PhotoError::UnsupportedFormat),
        };

        let encoded = general_purpose::STANDARD.encode(bytes);
        Ok(EmbeddedImage(format!("data:{mime};base64,{encoded}")))
    }

    /// Runs `from_upload` on the blocking pool so the session task never stalls on encoding.
    pub async fn from_upload_blocking(
        bytes: bytes::Bytes,
        max_bytes: usize,
    ) -> Result<Self, PhotoError> {
        tokio::task::spawn_blocking(move || Self::from_upload(&bytes, max_bytes))
            .await
            .map_err(|e| PhotoError::ReadFailed(format!("encoder task failed: {e}")))?
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or("")
    }
}

// Data URIs can be megabytes long; keep them out of debug logs.
impl fmt::Debug for EmbeddedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmbeddedImage({}, {} bytes)", self.mime_type(), self.0.len())
    }
}

/// Data URI of the placeholder silhouette.
pub fn placeholder_data_uri() -> String {
    let encoded = general_purpose::STANDARD.encode(PLACEHOLDER_SVG);
    format!("data:image/svg+xml;base64,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];
    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 16, b'J', b'F', b'I', b'F'];

    #[test]
    fn test_png_upload_becomes_data_uri() {
        let img = EmbeddedImage::from_upload(PNG_HEADER, 1024).unwrap();
        assert!(img.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(img.mime_type(), "image/png");
    }

    #[test]
    fn test_jpeg_upload_detected() {
        let img = EmbeddedImage::from_upload(JPEG_HEADER, 1024).unwrap();
        assert_eq!(img.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_empty_upload_rejected() {
        assert_eq!(EmbeddedImage::from_upload(&[], 1024), Err(PhotoError::Empty));
    }

    #[test]
    fn test_oversize_upload_rejected() {
        let err = EmbeddedImage::from_upload(PNG_HEADER, 4).unwrap_err();
        assert_eq!(
            err,
            PhotoError::TooLarge {
                size: PNG_HEADER.len(),
                limit: 4
            }
        );
    }

    #[test]
    fn test_non_image_rejected() {
        let err = EmbeddedImage::from_upload(b"just some text", 1024).unwrap_err();
        assert_eq!(err, PhotoError::UnsupportedFormat);
    }

    #[test]
    fn test_debug_does_not_dump_payload() {
        let img = EmbeddedImage::from_upload(PNG_HEADER, 1024).unwrap();
        let dbg = format!("{img:?}");
        assert!(dbg.starts_with("EmbeddedImage(image/png"));
        assert!(!dbg.contains("base64"));
    }

    #[test]
    fn test_placeholder_is_inline_svg() {
        let uri = placeholder_data_uri();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }

    #[tokio::test]
    async fn test_blocking_encode_matches_sync() {
        let bytes = bytes::Bytes::from_static(PNG_HEADER);
        let img = EmbeddedImage::from_upload_blocking(bytes, 1024).await.unwrap();
        assert_eq!(img, EmbeddedImage::from_upload(PNG_HEADER, 1024).unwrap());
    }
}
