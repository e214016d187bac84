use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat};

use crate::error::Result;

pub fn encode_gray_png(image: GrayImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}
