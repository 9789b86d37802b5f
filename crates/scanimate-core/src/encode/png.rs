//! PNG encoding for composite and mask output.
//!
//! The `image` crate's PNG encoder is used with fixed settings so that the
//! same raster always encodes to the same bytes.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::raster::CHANNELS;
use crate::Raster;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a raster to PNG bytes (8-bit RGBA).
///
/// # Errors
///
/// Returns an error if the raster has a zero dimension, if its buffer length
/// doesn't match its dimensions, or if the encoder fails.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = raster.dimensions();
    let pixels = &raster.pixels;

    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = width as usize * height as usize * CHANNELS;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Default, FilterType::Adaptive);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_raster;
    use crate::raster::{BLACK, WHITE};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_signature() {
        let raster = Raster::filled(10, 10, WHITE);
        let bytes = encode_png(&raster).unwrap();

        assert_eq!(&bytes[0..8], &PNG_SIGNATURE);
        // IEND chunk type sits 8 bytes before the end (type + CRC).
        let len = bytes.len();
        assert_eq!(&bytes[len - 8..len - 4], b"IEND");
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let mut raster = Raster::filled(7, 3, BLACK);
        raster.pixels[0..4].copy_from_slice(&[1, 2, 3, 4]);
        raster.pixels[40..44].copy_from_slice(&[250, 128, 0, 0]);

        let bytes = encode_png(&raster).unwrap();
        let decoded = decode_raster(&bytes).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_encode_png_zero_width() {
        let raster = Raster::new(0, 10, vec![]);
        let result = encode_png(&raster);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_invalid_pixel_data() {
        let raster = Raster {
            width: 10,
            height: 10,
            pixels: vec![0u8; 10 * 9 * 4],
        };
        let result = encode_png(&raster);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 400,
                actual: 360
            })
        ));
    }

    #[test]
    fn test_encode_png_deterministic() {
        let raster = Raster::filled(33, 17, [12, 34, 56, 255]);
        assert_eq!(encode_png(&raster).unwrap(), encode_png(&raster).unwrap());
    }
}
