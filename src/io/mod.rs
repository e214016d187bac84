//! Output layer: encoders for PNG/JPEG rasters and SVG documents, and the
//! atomic file writer every render path goes through.
pub mod writers;
