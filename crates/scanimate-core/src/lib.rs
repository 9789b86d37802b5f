//! Scanimate Core - barrier-grid composite generation
//!
//! This crate interleaves vertical bars from N equal-size images into one
//! composite and builds the striped mask that, slid across a print of the
//! composite, reveals each image in turn (scanimation).
//!
//! # Pipeline
//!
//! - [`decode`] - load inputs as RGBA rasters
//! - [`composite`] - validate the source set and interleave bars
//! - [`mask`] - build the black/white slit mask
//! - [`encode`] - PNG encoding and safe file output
//! - [`generate()`] - the whole run, from input paths to `output.png` and `mask.png`

pub mod composite;
pub mod decode;
pub mod encode;
pub mod error;
pub mod generate;
pub mod mask;
pub mod raster;

pub use composite::{build_composite, BarLayout, SourceSet};
pub use decode::{decode_raster, load_raster, DecodeError};
pub use encode::{encode_png, write_png, EncodeError, WriteError};
pub use error::{GenerateError, GenerateResult};
pub use generate::{
    compose, decode_source_set, generate, generate_with, load_source_set, BarrierGrid,
    GenerateOptions, GeneratedFiles, DEFAULT_COMPOSITE_NAME, DEFAULT_MASK_NAME,
};
pub use mask::{build_mask, SlitRule};
pub use raster::{Raster, Rgba};
