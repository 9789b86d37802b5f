//! In-memory RGBA raster shared by every stage of the pipeline.

/// An RGBA8 pixel quad.
pub type Rgba = [u8; 4];

/// Fill color of a fresh composite canvas. Any pixel still carrying this color
/// after compositing marks a column no bar was copied into.
pub const SENTINEL: Rgba = [255, 0, 255, 255];

/// Opaque black, the blocking part of the mask.
pub const BLACK: Rgba = [0, 0, 0, 255];

/// Opaque white, the slits of the mask.
pub const WHITE: Rgba = [255, 255, 255, 255];

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// A width×height grid of RGBA pixels, origin top-left, rows top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length is width * height * 4.
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster from dimensions and RGBA pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            byte_len(width, height),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a raster with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let pixels = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * CHANNELS)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a Raster from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbaImage.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Buffer length implied by the dimensions.
    pub fn expected_len(&self) -> usize {
        byte_len(self.width, self.height)
    }

    /// Number of bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * CHANNELS;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[i..i + CHANNELS]);
        Some(px)
    }

    /// Count pixels exactly equal to `color`.
    pub fn count_pixels(&self, color: Rgba) -> usize {
        self.pixels
            .chunks_exact(CHANNELS)
            .filter(|px| *px == color)
            .count()
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if this is an empty/invalid raster.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Overwrite columns `[x, x + span)` of every row with `color`.
    ///
    /// The span is clipped to the raster width. Returns the number of columns
    /// actually painted.
    pub(crate) fn fill_columns(&mut self, x: u32, span: u32, color: Rgba) -> u32 {
        let end = x.saturating_add(span).min(self.width);
        if x >= end {
            return 0;
        }
        let stride = self.stride();
        let start = x as usize * CHANNELS;
        let stop = end as usize * CHANNELS;
        for row in self.pixels.chunks_exact_mut(stride) {
            for px in row[start..stop].chunks_exact_mut(CHANNELS) {
                px.copy_from_slice(&color);
            }
        }
        end - x
    }

    /// Copy columns `[x, x + span)` of every row from `src` into the same
    /// columns of `self`.
    ///
    /// Both rasters must share dimensions; the span is clipped to the width.
    pub(crate) fn copy_columns_from(&mut self, src: &Raster, x: u32, span: u32) -> u32 {
        debug_assert_eq!(self.dimensions(), src.dimensions());
        let end = x.saturating_add(span).min(self.width);
        if x >= end {
            return 0;
        }
        let stride = self.stride();
        let start = x as usize * CHANNELS;
        let stop = end as usize * CHANNELS;
        for (dst_row, src_row) in self
            .pixels
            .chunks_exact_mut(stride)
            .zip(src.pixels.chunks_exact(stride))
        {
            dst_row[start..stop].copy_from_slice(&src_row[start..stop]);
        }
        end - x
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}
