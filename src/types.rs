//! Shared types and enums used across barcode-creator.
//! Includes `BarcodeFormat`, `OutputExt` and `RasterEncoding`.
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum BarcodeFormat {
    Code128,
    Code128A,
    Code128B,
    Code128C,
    Upc,
    Ean13,
    Ean8,
    Ean5,
    Ean2,
    Code39,
    Itf14,
    Msi,
    Msi10,
    Msi11,
    Msi1010,
    Msi1110,
    Pharmacode,
    Codabar,
    QrCode,
}

impl BarcodeFormat {
    /// Every supported format, in the order they are listed in the usage text.
    pub const ALL: [BarcodeFormat; 19] = [
        BarcodeFormat::Code128,
        BarcodeFormat::Code128A,
        BarcodeFormat::Code128B,
        BarcodeFormat::Code128C,
        BarcodeFormat::Upc,
        BarcodeFormat::Ean13,
        BarcodeFormat::Ean8,
        BarcodeFormat::Ean5,
        BarcodeFormat::Ean2,
        BarcodeFormat::Code39,
        BarcodeFormat::Itf14,
        BarcodeFormat::Msi,
        BarcodeFormat::Msi10,
        BarcodeFormat::Msi11,
        BarcodeFormat::Msi1010,
        BarcodeFormat::Msi1110,
        BarcodeFormat::Pharmacode,
        BarcodeFormat::Codabar,
        BarcodeFormat::QrCode,
    ];

    /// Name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeFormat::Code128 => "CODE128",
            BarcodeFormat::Code128A => "CODE128A",
            BarcodeFormat::Code128B => "CODE128B",
            BarcodeFormat::Code128C => "CODE128C",
            BarcodeFormat::Upc => "UPC",
            BarcodeFormat::Ean13 => "EAN13",
            BarcodeFormat::Ean8 => "EAN8",
            BarcodeFormat::Ean5 => "EAN5",
            BarcodeFormat::Ean2 => "EAN2",
            BarcodeFormat::Code39 => "CODE39",
            BarcodeFormat::Itf14 => "ITF14",
            BarcodeFormat::Msi => "MSI",
            BarcodeFormat::Msi10 => "MSI10",
            BarcodeFormat::Msi11 => "MSI11",
            BarcodeFormat::Msi1010 => "MSI1010",
            BarcodeFormat::Msi1110 => "MSI1110",
            BarcodeFormat::Pharmacode => "pharmacode",
            BarcodeFormat::Codabar => "codabar",
            BarcodeFormat::QrCode => "QRCODE",
        }
    }

    pub fn is_qr(&self) -> bool {
        matches!(self, BarcodeFormat::QrCode)
    }
}

impl std::fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BarcodeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BarcodeFormat::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum OutputExt {
    Png,
    Jpeg,
    Svg,
}

impl OutputExt {
    pub const ALL: [OutputExt; 3] = [OutputExt::Png, OutputExt::Jpeg, OutputExt::Svg];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputExt::Png => "png",
            OutputExt::Jpeg => "jpeg",
            OutputExt::Svg => "svg",
        }
    }
}

impl std::fmt::Display for OutputExt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputExt {
    type Err = String;

    /// Accepts the canonical names plus `jpg`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputExt::Png),
            "jpeg" | "jpg" => Ok(OutputExt::Jpeg),
            "svg" => Ok(OutputExt::Svg),
            _ => Err(s.to_string()),
        }
    }
}

/// Raster container used by the raster render path.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RasterEncoding {
    Png,
    Jpeg, // Lossy
}

impl std::fmt::Display for RasterEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterEncoding::Png => write!(f, "PNG"),
            RasterEncoding::Jpeg => write!(f, "JPEG"),
        }
    }
}
