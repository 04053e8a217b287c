//! Validation of PNG captures.

use image::{ImageFormat, ImageResult};

/// Decode a PNG capture and return its pixel size `(width, height)`.
///
/// The whole image is decoded, so a truncated or corrupt capture is an
/// error rather than a plausible header.
pub fn png_dimensions(bytes: &[u8]) -> ImageResult<(u32, u32)> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
    Ok((image.width(), image.height()))
}

/// Encode a blank RGBA image of the given size. Used by tests that need
/// real PNG bytes.
#[cfg(test)]
pub(crate) fn blank_png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height))
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}
