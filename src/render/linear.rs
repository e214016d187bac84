//! Layout for 1D barcodes: turns a module pattern into a raster image or an SVG
//! document. Bars start `MARGIN` px in from every edge; the label, when shown,
//! sits `TEXT_MARGIN` px below the bars.
use image::{GrayImage, Luma};
use tracing::debug;

use crate::core::params::BarcodeOptions;
use crate::error::{Error, Result};
use crate::io::writers::svg::{SvgLabel, SvgRect, write_barcode_svg};
use crate::render::label::{Label, font};

pub const MARGIN: u32 = 10;
/// Gap between the bars and the top of the label
pub const TEXT_MARGIN: u32 = 2;
/// Largest side length produced for any output, raster or SVG
pub const MAX_DIMENSION: u64 = 32_768;

/// Consecutive bar modules merged into `(first_module, module_count)` runs.
pub fn bar_runs(modules: &[u8]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, &module) in modules.iter().enumerate() {
        match (module != 0, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, i - s));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, modules.len() - s));
    }
    runs
}

fn label_height(options: &BarcodeOptions) -> u64 {
    if options.display_value {
        TEXT_MARGIN as u64 + options.font_size as u64
    } else {
        0
    }
}

/// Canvas size; `content_width` is the wider of the bars and the label.
fn canvas_size(content_width: u64, options: &BarcodeOptions) -> Result<(u64, u64)> {
    let margin = MARGIN as u64;
    let width = content_width + 2 * margin;
    let height = options.bar_height as u64 + label_height(options) + 2 * margin;
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Error::TooLarge {
            width,
            height,
            limit: MAX_DIMENSION,
        });
    }
    Ok((width, height))
}

pub fn rasterize(modules: &[u8], content: &str, options: &BarcodeOptions) -> Result<GrayImage> {
    let bars_width = modules.len() as u64 * options.bar_width as u64;
    // Reject oversized canvases before laying out any glyphs.
    canvas_size(bars_width, options)?;

    let label = match options.display_value {
        true => Some(Label::layout(&font()?, options.label(content), options.font_size)),
        false => None,
    };
    let label_width = label.as_ref().map_or(0, |l| l.width as u64);
    let (width, height) = canvas_size(bars_width.max(label_width), options)?;

    let mut image = GrayImage::from_pixel(width as u32, height as u32, Luma([255u8]));
    let bars_left = MARGIN as u64 + (width - 2 * MARGIN as u64 - bars_width) / 2;
    let top = MARGIN;
    let bottom = MARGIN + options.bar_height;
    for (first, count) in bar_runs(modules) {
        let left = bars_left as u32 + first as u32 * options.bar_width;
        let right = left + count as u32 * options.bar_width;
        for y in top..bottom {
            for x in left..right {
                image.put_pixel(x, y, Luma([0u8]));
            }
        }
    }

    if let Some(label) = label {
        let left = (width as i64 - label.width as i64) / 2;
        let label_top = (bottom + TEXT_MARGIN) as i64;
        label.draw(&mut image, left, label_top);
    }

    debug!("Final image is {} x {}", width, height);
    Ok(image)
}

pub fn svg(modules: &[u8], content: &str, options: &BarcodeOptions) -> Result<String> {
    let bar_width = options.bar_width as u64;
    let (width, height) = canvas_size(modules.len() as u64 * bar_width, options)?;
    let margin = MARGIN as u64;

    let bars: Vec<SvgRect> = bar_runs(modules)
        .into_iter()
        .map(|(first, count)| SvgRect {
            x: margin + first as u64 * bar_width,
            y: margin,
            width: count as u64 * bar_width,
            height: options.bar_height as u64,
        })
        .collect();

    let label = options.display_value.then(|| SvgLabel {
        text: options.label(content).to_string(),
        x: width / 2,
        y: margin + options.bar_height as u64 + label_height(options),
        font_size: options.font_size,
    });

    debug!("Final SVG is {} x {} with {} bars", width, height, bars.len());
    write_barcode_svg(width, height, &bars, label.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(bar_width: u32, bar_height: u32) -> BarcodeOptions {
        BarcodeOptions {
            bar_width,
            bar_height,
            ..BarcodeOptions::default()
        }
    }

    #[test]
    fn runs_merge_adjacent_bars() {
        assert_eq!(bar_runs(&[1, 1, 0, 1, 0, 0, 1, 1, 1]), vec![(0, 2), (3, 1), (6, 3)]);
        assert_eq!(bar_runs(&[0, 0]), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn raster_size_follows_module_width_and_margin() {
        let mut opts = options(3, 20);
        opts.display_value = false;
        let image = rasterize(&[1, 0, 1], "x", &opts).unwrap();
        assert_eq!(image.dimensions(), (3 * 3 + 20, 20 + 20));
        assert_eq!(image.get_pixel(0, 0), &Luma([255]));
        assert_eq!(image.get_pixel(MARGIN, MARGIN), &Luma([0]));
        assert_eq!(image.get_pixel(MARGIN + 3, MARGIN), &Luma([255]));
        assert_eq!(image.get_pixel(MARGIN + 6, MARGIN + 19), &Luma([0]));
        assert_eq!(image.get_pixel(MARGIN + 6, MARGIN + 20), &Luma([255]));
    }

    #[test]
    fn raster_draws_label_below_bars() {
        let modules = vec![1u8; 40];
        let opts = options(2, 30);
        let image = rasterize(&modules, "11235", &opts).unwrap();
        let (width, height) = image.dimensions();
        assert_eq!(height, 30 + TEXT_MARGIN + opts.font_size + 2 * MARGIN);

        let label_top = MARGIN + 30 + TEXT_MARGIN;
        let inked = (label_top..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| image.get_pixel(x, y).0[0] < 128)
            .count();
        assert!(inked > 0);
    }

    #[test]
    fn raster_label_text_override_changes_pixels() {
        let modules = vec![1u8; 60];
        let mut opts = options(2, 30);
        let as_content = rasterize(&modules, "cont", &opts).unwrap();
        opts.label_text = Some("Continue".to_string());
        let as_override = rasterize(&modules, "cont", &opts).unwrap();
        assert_ne!(as_content.as_raw(), as_override.as_raw());
    }

    #[test]
    fn raster_canvas_widens_for_long_label() {
        let opts = options(1, 10);
        let image = rasterize(&[1, 0, 1], "a much longer label than bars", &opts).unwrap();
        assert!(image.width() > 3 + 2 * MARGIN);
    }

    #[test]
    fn raster_refuses_huge_canvas() {
        let err = rasterize(&[1], "x", &options(1, 100_000)).unwrap_err();
        assert!(matches!(err, Error::TooLarge { .. }));
    }

    #[test]
    fn raster_refuses_max_font_size() {
        let mut opts = options(2, 50);
        opts.font_size = u32::MAX;
        let err = rasterize(&[1, 0, 1], "x", &opts).unwrap_err();
        assert!(matches!(err, Error::TooLarge { .. }));
    }

    #[test]
    fn svg_refuses_max_font_size() {
        let mut opts = options(2, 50);
        opts.font_size = u32::MAX;
        let err = svg(&[1, 0, 1], "x", &opts).unwrap_err();
        assert!(matches!(err, Error::TooLarge { .. }));
    }

    #[test]
    fn svg_reserves_room_for_label() {
        let mut opts = options(2, 50);
        opts.label_text = Some("Continue".to_string());
        let with_label = svg(&[1, 0, 1], "cont", &opts).unwrap();
        assert!(with_label.contains(r#"height="96""#));
        assert!(with_label.contains(">Continue</text>"));

        opts.display_value = false;
        let without = svg(&[1, 0, 1], "cont", &opts).unwrap();
        assert!(without.contains(r#"height="70""#));
        assert!(!without.contains("<text"));
    }
}
