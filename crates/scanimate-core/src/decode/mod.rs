//! Raster loading for Scanimate.
//!
//! This module turns input files (or in-memory buffers) into RGBA [`Raster`]s:
//! - PNG (lossless) and JPEG (lossy) are supported
//! - The format is detected from the file content, never from the extension
//! - Every decoded image is converted to 8-bit RGBA
//!
//! # Examples
//!
//! ```ignore
//! use scanimate_core::decode::load_raster;
//!
//! let raster = load_raster("frame-1.png").unwrap();
//! println!("Loaded {}x{} image", raster.width, raster.height);
//! ```
//!
//! [`Raster`]: crate::Raster

mod loader;
mod types;

pub use loader::{decode_raster, load_raster};
pub use types::DecodeError;
