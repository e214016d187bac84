//! High-level library API: render straight to a file or to in-memory bytes.
//! Both check the format/extension pairing the same way the CLI does.
use std::path::Path;

use crate::core::dispatch::{RenderPath, dispatch};
use crate::core::options::RawOptions;
use crate::core::params::{BarcodeOptions, Defaults, QrOptions};
use crate::core::validate::{ValidationFailure, ValidationIssue, allowed_extensions, validate};
use crate::error::{Error, Result};
use crate::render::{DefaultRenderer, Renderer};
use crate::types::{BarcodeFormat, OutputExt, RasterEncoding};

fn rejected(issue: ValidationIssue) -> Error {
    Error::Validation(ValidationFailure {
        issues: vec![issue],
        help_requested: false,
    })
}

/// Render `content` to `output`; the output's extension picks PNG, JPEG or SVG.
/// `output` must be valid UTF-8 so the file written is the file named.
pub fn render_to_path(
    content: &str,
    output: &Path,
    format: BarcodeFormat,
    options: &BarcodeOptions,
) -> Result<RenderPath> {
    if content.is_empty() {
        return Err(rejected(ValidationIssue::EmptyContent));
    }
    let output_file = output
        .to_str()
        .ok_or_else(|| Error::NonUtf8Path(output.to_path_buf()))?;

    let mut raw = RawOptions::new(&Defaults::default());
    raw.positionals = vec![content.to_string()];
    raw.format = format.to_string();
    raw.output_file = output_file.to_string();
    raw.bar_width = options.bar_width as i64;
    raw.bar_height = options.bar_height as i64;
    raw.font_size = options.font_size as i64;
    raw.hide_value = !options.display_value;
    raw.text = options.label_text.clone();

    let request = validate(&raw).map_err(Error::Validation)?;
    dispatch(&request, &DefaultRenderer)
}

/// Render `content` in memory as an `ext` document.
pub fn render_to_bytes(
    content: &str,
    format: BarcodeFormat,
    ext: OutputExt,
    options: &BarcodeOptions,
) -> Result<Vec<u8>> {
    if content.is_empty() {
        return Err(rejected(ValidationIssue::EmptyContent));
    }
    if !allowed_extensions(format).contains(&ext) {
        return Err(rejected(ValidationIssue::IncompatibleExtension { extension: ext, format }));
    }

    let renderer = DefaultRenderer;
    match (format.is_qr(), ext) {
        (true, _) => renderer.qr_png(content, &QrOptions::default()),
        (false, OutputExt::Svg) => Ok(renderer.render_svg(format, content, options)?.into_bytes()),
        (false, OutputExt::Png) => {
            renderer.render_raster(format, content, options, RasterEncoding::Png)
        }
        (false, OutputExt::Jpeg) => {
            renderer.render_raster(format, content, options, RasterEncoding::Jpeg)
        }
    }
}
