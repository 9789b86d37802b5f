//! WASM-compatible wrapper types for rasters and generation results.
//!
//! These types wrap the core Scanimate types and hand pixel and PNG data to
//! JavaScript as `Uint8Array` copies.

use scanimate_core::{BarLayout, Raster};
use wasm_bindgen::prelude::*;

/// A decoded RGBA raster for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it into a new
/// `Uint8Array`.
#[wasm_bindgen]
pub struct JsRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from dimensions and RGBA pixel data (4 bytes per pixel).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRaster {
        JsRaster {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsRaster {
    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self {
            width: raster.width,
            height: raster.height,
            pixels: raster.pixels,
        }
    }

    /// Convert back to a core Raster (clones the pixel data).
    pub(crate) fn to_raster(&self) -> Raster {
        Raster {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// PNG-encoded composite and mask of one generation run.
#[wasm_bindgen]
pub struct JsBarrierGrid {
    composite_png: Vec<u8>,
    mask_png: Vec<u8>,
    layout: BarLayout,
}

#[wasm_bindgen]
impl JsBarrierGrid {
    /// The interleaved composite as PNG bytes.
    pub fn composite_png(&self) -> Vec<u8> {
        self.composite_png.clone()
    }

    /// The slit mask as PNG bytes.
    pub fn mask_png(&self) -> Vec<u8> {
        self.mask_png.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    #[wasm_bindgen(getter)]
    pub fn bar_width(&self) -> u32 {
        self.layout.bar_width
    }

    #[wasm_bindgen(getter)]
    pub fn bar_count(&self) -> u32 {
        self.layout.bar_count
    }

    #[wasm_bindgen(getter)]
    pub fn image_count(&self) -> usize {
        self.layout.image_count
    }
}

impl JsBarrierGrid {
    pub(crate) fn new(composite_png: Vec<u8>, mask_png: Vec<u8>, layout: BarLayout) -> Self {
        Self {
            composite_png,
            mask_png,
            layout,
        }
    }
}
