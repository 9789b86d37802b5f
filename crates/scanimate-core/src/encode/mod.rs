//! Raster encoding and output for Scanimate.
//!
//! This module provides functionality for:
//! - Encoding rasters as 8-bit RGBA PNG (lossless)
//! - Writing encoded rasters to disk without leaving partial files behind
//!
//! # Examples
//!
//! ```ignore
//! use scanimate_core::encode::{encode_png, write_png};
//!
//! let bytes = encode_png(&composite).unwrap();
//! write_png(&mask, "out/mask.png").unwrap();
//! ```

mod png;
mod write;

pub use png::{encode_png, EncodeError};
pub use write::{write_png, WriteError};
