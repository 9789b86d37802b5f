//! Scanimate WASM - WebAssembly bindings for Scanimate
//!
//! This crate exposes scanimate-core to JavaScript/TypeScript. Everything
//! works on in-memory buffers; the page decides where the results go.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for rasters and results
//! - `image` - raster decode and PNG encode bindings
//! - `generate` - barrier-grid generation bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { generate_barrier_grid } from '@scanimate/wasm';
//!
//! await init();
//! const grid = generate_barrier_grid(frames, 10);
//! console.log(`${grid.bar_count} bars from ${grid.image_count} images`);
//! ```

use wasm_bindgen::prelude::*;

mod generate;
mod image;
mod types;

pub use generate::{generate_barrier_grid, generate_barrier_grid_with, JsGridOptions};
pub use image::{decode_image, encode_png};
pub use types::{JsBarrierGrid, JsRaster};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
