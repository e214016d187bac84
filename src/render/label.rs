//! Human-readable line under raster barcodes. Glyph rasterization is delegated
//! to `rusttype` with an embedded DejaVu Sans Mono.
use image::GrayImage;
use rusttype::{Font, PositionedGlyph, Scale, point};

use crate::error::{Error, Result};

static FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

pub fn font() -> Result<Font<'static>> {
    Font::try_from_bytes(FONT_DATA)
        .ok_or_else(|| Error::Font("embedded label font could not be parsed".to_string()))
}

/// A line of text laid out with its top edge at y = 0 and left edge at x = 0.
pub struct Label {
    glyphs: Vec<PositionedGlyph<'static>>,
    pub width: u32,
}

impl Label {
    pub fn layout(font: &Font<'static>, text: &str, font_size: u32) -> Self {
        let scale = Scale::uniform(font_size as f32);
        let ascent = font.v_metrics(scale).ascent;
        let glyphs: Vec<_> = font.layout(text, scale, point(0.0, ascent)).collect();
        let width = glyphs
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
            .ceil()
            .max(0.0) as u32;
        Self { glyphs, width }
    }

    /// Darken `image` with the glyph coverage; pixels outside the canvas are clipped.
    pub fn draw(&self, image: &mut GrayImage, left: i64, top: i64) {
        let (width, height) = (image.width() as i64, image.height() as i64);
        for glyph in &self.glyphs {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let x = left + bb.min.x as i64 + gx as i64;
                let y = top + bb.min.y as i64 + gy as i64;
                if x < 0 || y < 0 || x >= width || y >= height {
                    return;
                }
                let ink = 255 - (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                let pixel = image.get_pixel_mut(x as u32, y as u32);
                pixel.0[0] = pixel.0[0].min(ink);
            });
        }
    }
}
