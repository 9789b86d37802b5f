//! Content-sniffing decoder producing RGBA rasters.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};

use super::DecodeError;
use crate::Raster;

/// Read and decode the image file at `path`.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be opened or read, and any of
/// the errors of [`decode_raster`] for its content.
pub fn load_raster(path: impl AsRef<Path>) -> Result<Raster, DecodeError> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_raster(&bytes)
}

/// Decode an in-memory image to an RGBA raster.
///
/// The format is guessed from the leading magic bytes. Any color type the
/// decoder produces is converted to RGBA8.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// format, `DecodeError::CorruptedFile` if decoding fails part way, and
/// `DecodeError::EmptyImage` for a zero-sized image.
pub fn decode_raster(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    Ok(Raster::from_rgba_image(rgba))
}
