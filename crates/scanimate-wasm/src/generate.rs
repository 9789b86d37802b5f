//! Barrier-grid generation bindings.
//!
//! Works on in-memory buffers: the caller passes the encoded source images in
//! animation order and receives PNG bytes for the composite and the mask.
//!
//! # Example
//!
//! ```typescript
//! import { generate_barrier_grid } from '@scanimate/wasm';
//!
//! const frames = await Promise.all(files.map(async f => new Uint8Array(await f.arrayBuffer())));
//! const grid = generate_barrier_grid(frames, 10);
//! download(grid.composite_png(), 'output.png');
//! download(grid.mask_png(), 'mask.png');
//! ```

use crate::types::JsBarrierGrid;
use js_sys::{Array, Uint8Array};
use scanimate_core::{decode_source_set, encode_png, BarrierGrid, SlitRule};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// JavaScript-side generation options.
///
/// Output file names have no meaning here, so unlike the file-based options
/// this only carries what shapes the rasters. Unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsGridOptions {
    pub bar_width: u32,
    pub slit_rule: SlitRule,
}

impl Default for JsGridOptions {
    fn default() -> Self {
        Self {
            bar_width: 1,
            slit_rule: SlitRule::Compat,
        }
    }
}

impl JsGridOptions {
    pub fn new(bar_width: u32) -> Self {
        Self {
            bar_width,
            ..Self::default()
        }
    }
}

/// Generate a composite and mask from encoded images with default options.
///
/// # Arguments
///
/// * `images` - Array of `Uint8Array`, each a PNG or JPEG file
/// * `bar_width` - Bar width in pixels; must divide the image width
#[wasm_bindgen]
pub fn generate_barrier_grid(images: Array, bar_width: u32) -> Result<JsBarrierGrid, JsValue> {
    run(images, &JsGridOptions::new(bar_width))
}

/// Generate a composite and mask with explicit options.
///
/// `options` is an object with the optional fields `bar_width` and
/// `slit_rule` (`"compat"` or `"per-period"`). `null` or `undefined` uses
/// the defaults. Any other field is an error.
#[wasm_bindgen]
pub fn generate_barrier_grid_with(images: Array, options: JsValue) -> Result<JsBarrierGrid, JsValue> {
    let options: JsGridOptions = if options.is_undefined() || options.is_null() {
        JsGridOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
    };
    run(images, &options)
}

fn run(images: Array, options: &JsGridOptions) -> Result<JsBarrierGrid, JsValue> {
    let buffers = images
        .iter()
        .enumerate()
        .map(|(i, value)| {
            value
                .dyn_into::<Uint8Array>()
                .map(|bytes| bytes.to_vec())
                .map_err(|_| JsValue::from_str(&format!("image {i} is not a Uint8Array")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    build_grid(&buffers, options).map_err(|e| JsValue::from_str(&e))
}

/// Decode, validate and encode in the same order as file-based generation.
pub(crate) fn build_grid<B: AsRef<[u8]>>(
    buffers: &[B],
    options: &JsGridOptions,
) -> Result<JsBarrierGrid, String> {
    let set = decode_source_set(buffers, options.bar_width).map_err(|e| e.to_string())?;

    let grid = BarrierGrid::build(&set, options.slit_rule);
    let composite_png = encode_png(&grid.composite).map_err(|e| e.to_string())?;
    let mask_png = encode_png(&grid.mask).map_err(|e| e.to_string())?;

    Ok(JsBarrierGrid::new(composite_png, mask_png, grid.layout))
}
