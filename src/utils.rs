//! A set of utilities to help with preparing sticker payloads.

use std::io::Cursor;

use image::ImageReader;

/// Reads the pixel dimensions out of an encoded image without decoding the
/// pixel data itself.
///
/// Returns [`None`] if the bytes are not in a format that can be probed.
///
/// # Examples
///
/// ```rust
/// use telegram_stickers_import::utils::image_dimensions;
///
/// assert_eq!(image_dimensions(b"not an image"), None);
/// ```
#[must_use]
pub fn image_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format().ok()?;
    reader.into_dimensions().ok()
}
