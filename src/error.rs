//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image, JPEG, QR and XML errors, and provides semantic
//! variants for symbology and validation failures.
use thiserror::Error;

use crate::core::validate::ValidationFailure;
use crate::types::BarcodeFormat;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot encode '{content}' as {format}: {reason}")]
    Encode {
        format: BarcodeFormat,
        content: String,
        reason: String,
    },

    #[error("No encoder available for symbology {0}")]
    UnsupportedSymbology(BarcodeFormat),

    #[error("QR code error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JPEG encoding error: {0}")]
    Jpeg(#[from] jpeg_encoder::EncodingError),

    #[error("SVG serialization error: {0}")]
    Svg(#[from] quick_xml::Error),

    #[error("Image too large: {width}x{height} exceeds {limit}x{limit}")]
    TooLarge { width: u64, height: u64, limit: u64 },

    #[error("Font error: {0}")]
    Font(String),

    #[error("Output path is not valid UTF-8: {0:?}")]
    NonUtf8Path(std::path::PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Validation(ValidationFailure),
}

impl Error {
    pub fn encode<E: std::fmt::Display>(format: BarcodeFormat, content: &str, e: E) -> Self {
        Error::Encode {
            format,
            content: content.to_string(),
            reason: e.to_string(),
        }
    }
}
