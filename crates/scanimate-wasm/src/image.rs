//! Raster decode and PNG encode bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_png } from '@scanimate/wasm';
//!
//! const raster = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const png = encode_png(raster);
//! ```

use crate::types::JsRaster;
use scanimate_core::{decode, encode};
use wasm_bindgen::prelude::*;

/// Decode PNG or JPEG bytes into an RGBA raster.
///
/// The format is detected from the content.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image or are corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    decode::decode_raster(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a raster to PNG bytes.
///
/// # Errors
///
/// Returns an error if the raster has a zero dimension or its pixel buffer
/// does not match width * height * 4.
#[wasm_bindgen]
pub fn encode_png(raster: &JsRaster) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&raster.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}
