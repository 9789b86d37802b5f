//! Composite construction by cyclic bar assignment.

use super::SourceSet;
use crate::raster::SENTINEL;
use crate::Raster;

/// Build the interleaved composite of a validated source set.
///
/// The canvas starts filled with [`SENTINEL`]. Bar `b` covers columns
/// `[b * bar_width, (b + 1) * bar_width)` over every row and is copied from
/// source image `b mod image_count` at the same columns, so there is no
/// horizontal shift between source and destination.
pub fn build_composite(set: &SourceSet) -> Raster {
    let layout = set.layout();
    let mut canvas = Raster::filled(layout.width, layout.height, SENTINEL);

    let mut covered = 0u32;
    for bar in 0..layout.bar_count {
        let src = &set.images()[layout.source_for_bar(bar)];
        covered += canvas.copy_columns_from(src, layout.bar_x(bar), layout.bar_width);
    }

    debug_assert_eq!(
        covered, layout.width,
        "composite left {} sentinel columns",
        layout.width - covered
    );
    canvas
}


// ============================================================================
// Property-Based Tests
// ============================================================================
