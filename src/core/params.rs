use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{BarcodeFormat, OutputExt};

/// Default table applied to options the user did not supply.
/// Suitable for JSON config files (`--defaults`); missing keys keep the built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub output_file: String,
    pub format: String,
    pub bar_width: i64,
    pub bar_height: i64,
    pub font_size: i64,
    pub hide_value: bool,
    /// Encoded when no positional content is given
    pub placeholder_content: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output_file: "barcode.png".to_string(),
            format: "CODE128".to_string(),
            bar_width: 2,
            bar_height: 100,
            font_size: 24,
            hide_value: false,
            placeholder_content: "Test".to_string(),
        }
    }
}

impl Defaults {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }
}

/// Drawing parameters shared by the raster and SVG 1D render paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeOptions {
    /// Width of one module in pixels
    pub bar_width: u32,
    /// Height of the bars in pixels
    pub bar_height: u32,
    pub font_size: u32,
    pub display_value: bool,
    /// Label override; the encoded content is shown when `None`
    pub label_text: Option<String>,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            bar_width: 2,
            bar_height: 100,
            font_size: 24,
            display_value: true,
            label_text: None,
        }
    }
}

impl BarcodeOptions {
    pub fn label<'a>(&'a self, content: &'a str) -> &'a str {
        self.label_text.as_deref().unwrap_or(content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrOptions {
    /// Pixels per module
    pub module_size: u32,
    /// Quiet zone width in modules
    pub quiet_zone: u32,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            module_size: 4,
            quiet_zone: 4,
        }
    }
}

/// One validated rendering job, produced by `core::validate::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub content: String,
    pub format: BarcodeFormat,
    pub output_path: PathBuf,
    pub output_ext: OutputExt,
    pub display_value: bool,
    pub bar_width: u32,
    pub bar_height: u32,
    pub font_size: u32,
    pub label_text: Option<String>,
}

impl RenderRequest {
    pub fn barcode_options(&self) -> BarcodeOptions {
        BarcodeOptions {
            bar_width: self.bar_width,
            bar_height: self.bar_height,
            font_size: self.font_size,
            display_value: self.display_value,
            label_text: self.label_text.clone(),
        }
    }

    pub fn qr_options(&self) -> QrOptions {
        QrOptions::default()
    }
}
