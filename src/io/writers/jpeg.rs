use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

/// Largest side length a baseline JPEG can carry.
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

pub fn encode_gray_jpeg(cols: u32, rows: u32, data: &[u8]) -> Result<Vec<u8>> {
    if cols > MAX_JPEG_DIMENSION || rows > MAX_JPEG_DIMENSION {
        return Err(Error::TooLarge {
            width: cols as u64,
            height: rows as u64,
            limit: MAX_JPEG_DIMENSION as u64,
        });
    }
    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, 100);
    encoder.encode(data, cols as u16, rows as u16, ColorType::Luma)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_jfif_markers() {
        let data = vec![255u8; 16 * 8];
        let bytes = encode_gray_jpeg(16, 8, &data).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn rejects_oversized_images() {
        let err = encode_gray_jpeg(70_000, 1, &[]).unwrap_err();
        assert!(matches!(err, Error::TooLarge { .. }));
    }
}
