#![doc = r#"
barcode-creator — turn a text string into a barcode or QR code image.

This crate powers the `barcode-creator` CLI and can be embedded in your own Rust
applications. It validates a format/output pairing, picks one of three render
paths (raster 1D, SVG 1D, QR), and writes the result atomically.

Symbology encoding is delegated: 1D barcodes to `barcoders`, QR codes to `qrcode`.
Formats without an available encoder (the MSI family and pharmacode) validate but
fail at render time with `Error::UnsupportedSymbology`.

Quick start: render to a file
-----------------------------
```rust,no_run
use std::path::Path;
use barcode_creator::{render_to_path, BarcodeFormat, BarcodeOptions};

fn main() -> barcode_creator::Result<()> {
    render_to_path("11235", Path::new("barcode.svg"), BarcodeFormat::Code128, &BarcodeOptions::default())?;
    Ok(())
}
```

Render in memory
----------------
```rust,no_run
use barcode_creator::{render_to_bytes, BarcodeFormat, BarcodeOptions, OutputExt};

fn main() -> barcode_creator::Result<()> {
    let png = render_to_bytes("https://example.com", BarcodeFormat::QrCode, OutputExt::Png, &BarcodeOptions::default())?;
    assert!(!png.is_empty());
    Ok(())
}
```

Validate user options yourself
------------------------------
```rust
use barcode_creator::{validate, Defaults, RawOptions};

let mut raw = RawOptions::new(&Defaults::default());
raw.format = "BOGUS".to_string();
let failure = validate(&raw).unwrap_err();
assert!(failure.reasons()[0].contains("BOGUS"));
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — option defaults, validation and dispatch.
- [`render`] — the `Renderer` trait and `DefaultRenderer`.
- [`io`] — PNG/JPEG/SVG encoders and the atomic file writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod render;
pub mod types;

// Curated public API surface
pub use core::dispatch::{RenderPath, dispatch};
pub use core::options::RawOptions;
pub use core::params::{BarcodeOptions, Defaults, QrOptions, RenderRequest};
pub use core::validate::{
    ValidationFailure, ValidationIssue, allowed_extensions, extension_of, validate,
};
pub use error::{Error, Result};
pub use render::{DefaultRenderer, Renderer};
pub use types::{BarcodeFormat, OutputExt, RasterEncoding};

pub use api::{render_to_bytes, render_to_path};
