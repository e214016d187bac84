use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};
use tracing::debug;

use crate::core::params::QrOptions;
use crate::error::{Error, Result};
use crate::render::linear::MAX_DIMENSION;

/// Paint the QR module matrix, surrounded by the quiet zone, onto a gray canvas.
pub fn rasterize(content: &str, options: &QrOptions) -> Result<GrayImage> {
    let code = QrCode::new(content.as_bytes())?;
    let module_count = code.width() as u64;
    let scale = options.module_size.max(1) as u64;
    let quiet = options.quiet_zone as u64;
    let side = (module_count + 2 * quiet) * scale;
    if side > MAX_DIMENSION {
        return Err(Error::TooLarge {
            width: side,
            height: side,
            limit: MAX_DIMENSION,
        });
    }
    debug!(
        "QR code version {:?}: {} modules per side, {} px image",
        code.version(),
        module_count,
        side
    );

    let mut image = GrayImage::from_pixel(side as u32, side as u32, Luma([255u8]));
    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x0 = ((i as u64 % module_count) + quiet) * scale;
        let y0 = ((i as u64 / module_count) + quiet) * scale;
        for y in y0..y0 + scale {
            for x in x0..x0 + scale {
                image.put_pixel(x as u32, y as u32, Luma([0u8]));
            }
        }
    }
    Ok(image)
}
