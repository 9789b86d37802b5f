//! Top-level error for barrier-grid generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::WriteError;

/// Every way a generation run can fail.
///
/// Each variant aborts the whole run at the point it is detected.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The source set is empty.
    #[error("No images to combine")]
    NoImages,

    /// An input file could not be opened or decoded.
    #[error("Error opening image {index} ({}): {source}", .path.display())]
    Decode {
        index: usize,
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// An input differs in size from the first (reference) image.
    #[error(
        "Images must be of the same size: image {index} is {width}x{height}, \
         expected {expected_width}x{expected_height}"
    )]
    SizeMismatch {
        index: usize,
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    /// A caller-built raster whose pixel buffer does not match its dimensions.
    #[error("Image {index} has {actual} bytes of pixel data, expected {expected}")]
    InvalidPixelData {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// An in-memory input could not be decoded.
    #[error("Error opening image {index}: {source}")]
    DecodeBuffer {
        index: usize,
        #[source]
        source: DecodeError,
    },

    /// The bar width does not evenly divide the reference width.
    #[error("Bar width {bar_width} must be a divider of the images' width {width}")]
    BarWidthMismatch { width: u32, bar_width: u32 },

    /// An output file could not be written.
    #[error("Error creating output image {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },

    /// The generation options are unusable.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Convenience alias used throughout the crate.
pub type GenerateResult<T> = Result<T, GenerateError>;
