//! Renderers: the capability set the dispatcher drives. `DefaultRenderer`
//! delegates symbology encoding to `barcoders` and `qrcode`, then lays the
//! modules out as PNG/JPEG rasters or SVG documents. Raster labels are drawn
//! with `rusttype`.
pub mod label;
pub mod linear;
pub mod qr;
pub mod symbology;

use std::path::Path;

use tracing::info;

use crate::core::params::{BarcodeOptions, QrOptions};
use crate::error::Result;
use crate::io::writers::jpeg::encode_gray_jpeg;
use crate::io::writers::png::encode_gray_png;
use crate::io::writers::write_atomic;
use crate::types::{BarcodeFormat, RasterEncoding};

pub trait Renderer {
    /// Encoded image bytes for a 1D barcode.
    fn render_raster(
        &self,
        format: BarcodeFormat,
        content: &str,
        options: &BarcodeOptions,
        encoding: RasterEncoding,
    ) -> Result<Vec<u8>>;

    /// An SVG document for a 1D barcode.
    fn render_svg(
        &self,
        format: BarcodeFormat,
        content: &str,
        options: &BarcodeOptions,
    ) -> Result<String>;

    /// Render a QR code and write it to `output`. Returns once the file is in place.
    fn render_qr(&self, content: &str, output: &Path, options: &QrOptions) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl DefaultRenderer {
    pub fn qr_png(&self, content: &str, options: &QrOptions) -> Result<Vec<u8>> {
        encode_gray_png(qr::rasterize(content, options)?)
    }
}

impl Renderer for DefaultRenderer {
    fn render_raster(
        &self,
        format: BarcodeFormat,
        content: &str,
        options: &BarcodeOptions,
        encoding: RasterEncoding,
    ) -> Result<Vec<u8>> {
        let modules = symbology::encode_modules(format, content)?;
        let image = linear::rasterize(&modules, content, options)?;
        match encoding {
            RasterEncoding::Png => encode_gray_png(image),
            RasterEncoding::Jpeg => {
                let (cols, rows) = image.dimensions();
                encode_gray_jpeg(cols, rows, image.as_raw())
            }
        }
    }

    fn render_svg(
        &self,
        format: BarcodeFormat,
        content: &str,
        options: &BarcodeOptions,
    ) -> Result<String> {
        let modules = symbology::encode_modules(format, content)?;
        linear::svg(&modules, content, options)
    }

    fn render_qr(&self, content: &str, output: &Path, options: &QrOptions) -> Result<()> {
        let bytes = self.qr_png(content, options)?;
        write_atomic(output, &bytes)?;
        info!("QR code saved to {:?}", output);
        Ok(())
    }
}
