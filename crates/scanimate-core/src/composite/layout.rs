//! Bar arithmetic derived from the source set dimensions.

use serde::{Deserialize, Serialize};

use crate::mask::SlitRule;

/// Derived quantities of one barrier-grid run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarLayout {
    /// Shared width of every source image in pixels.
    pub width: u32,
    /// Shared height of every source image in pixels.
    pub height: u32,
    /// Width of a single bar in pixels (non-zero, divides `width`).
    pub bar_width: u32,
    /// Number of bars across the width.
    pub bar_count: u32,
    /// Number of source images.
    pub image_count: usize,
}

impl BarLayout {
    /// Compute the layout. `bar_width` must be non-zero; public callers get a
    /// layout from [`SourceSet::layout`](super::SourceSet::layout), which has
    /// already checked it.
    pub(crate) fn new(width: u32, height: u32, bar_width: u32, image_count: usize) -> Self {
        debug_assert!(bar_width > 0, "bar width must be non-zero");
        Self {
            width,
            height,
            bar_width,
            bar_count: width / bar_width,
            image_count,
        }
    }

    /// Index of the source image that bar `bar` is copied from.
    #[inline]
    pub fn source_for_bar(&self, bar: u32) -> usize {
        bar as usize % self.image_count.max(1)
    }

    /// Left column of bar `bar`.
    #[inline]
    pub fn bar_x(&self, bar: u32) -> u32 {
        bar * self.bar_width
    }

    /// Columns covered by bars. Equals `width` whenever the bar width divides it.
    pub fn covered_width(&self) -> u32 {
        self.bar_count * self.bar_width
    }

    /// Width of one full interleave period (`image_count` bars).
    pub fn period(&self) -> u64 {
        self.image_count as u64 * self.bar_width as u64
    }

    /// Number of mask slits painted under `rule`.
    ///
    /// `SlitRule::Compat` is `bar_count / bar_width` with truncating division.
    /// This only equals one slit per period when `bar_width == image_count`.
    pub fn slit_count(&self, rule: SlitRule) -> u32 {
        match rule {
            SlitRule::Compat => self.bar_count.checked_div(self.bar_width).unwrap_or(0),
            SlitRule::PerPeriod => {
                let n = self.image_count.max(1) as u32;
                self.bar_count.div_ceil(n)
            }
        }
    }

    /// Left column of slit `i`, or `None` if it starts past the right edge.
    pub fn slit_x(&self, i: u32) -> Option<u32> {
        let x = self.period().checked_mul(i as u64)?;
        u32::try_from(x).ok().filter(|&x| x < self.width)
    }
}
