//! Ordered, size-checked collection of source rasters.

use super::BarLayout;
use crate::error::{GenerateError, GenerateResult};
use crate::Raster;

/// Ordered source rasters sharing one size that the bar width divides.
///
/// The first raster is the reference: its dimensions are the dimensions of
/// the whole set. Order decides which image each bar is taken from.
#[derive(Debug, Clone)]
pub struct SourceSet {
    images: Vec<Raster>,
    bar_width: u32,
}

impl SourceSet {
    /// Start a set from its reference raster.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::InvalidPixelData` if the reference buffer does
    /// not match its dimensions, and `GenerateError::BarWidthMismatch` if
    /// `bar_width` is zero or does not evenly divide the reference width.
    pub fn new(reference: Raster, bar_width: u32) -> GenerateResult<Self> {
        check_buffer(0, &reference)?;
        check_bar_width(reference.width, bar_width)?;
        Ok(Self {
            images: vec![reference],
            bar_width,
        })
    }

    /// Build a set from already decoded rasters, applying every check in order.
    ///
    /// # Errors
    ///
    /// `GenerateError::NoImages` for an empty list, then the errors of
    /// [`SourceSet::new`] and [`SourceSet::push`].
    pub fn from_rasters(rasters: Vec<Raster>, bar_width: u32) -> GenerateResult<Self> {
        let mut rasters = rasters.into_iter();
        let reference = rasters.next().ok_or(GenerateError::NoImages)?;

        let mut set = Self::new(reference, bar_width)?;
        for raster in rasters {
            set.push(raster)?;
        }
        Ok(set)
    }

    /// Append the next raster.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::SizeMismatch`, naming the index the raster would
    /// have had, if its size differs from the reference, and
    /// `GenerateError::InvalidPixelData` if its buffer is the wrong length.
    pub fn push(&mut self, raster: Raster) -> GenerateResult<()> {
        let index = self.images.len();
        let (expected_width, expected_height) = self.dimensions();
        if raster.width != expected_width || raster.height != expected_height {
            return Err(GenerateError::SizeMismatch {
                index,
                expected_width,
                expected_height,
                width: raster.width,
                height: raster.height,
            });
        }
        check_buffer(index, &raster)?;
        self.images.push(raster);
        Ok(())
    }

    /// Reference dimensions shared by every raster.
    pub fn dimensions(&self) -> (u32, u32) {
        self.images[0].dimensions()
    }

    pub fn bar_width(&self) -> u32 {
        self.bar_width
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false: a set holds at least its reference raster.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[Raster] {
        &self.images
    }

    pub fn layout(&self) -> BarLayout {
        let (width, height) = self.dimensions();
        BarLayout::new(width, height, self.bar_width, self.images.len())
    }
}

fn check_buffer(index: usize, raster: &Raster) -> GenerateResult<()> {
    let expected = raster.expected_len();
    if raster.pixels.len() != expected {
        return Err(GenerateError::InvalidPixelData {
            index,
            expected,
            actual: raster.pixels.len(),
        });
    }
    Ok(())
}

fn check_bar_width(width: u32, bar_width: u32) -> GenerateResult<()> {
    if bar_width == 0 || width % bar_width != 0 {
        return Err(GenerateError::BarWidthMismatch { width, bar_width });
    }
    Ok(())
}
