//! Slit mask generation.
//!
//! The mask is the striped overlay printed on transparency: opaque black
//! everywhere except for white vertical slits one bar wide. Sliding it across
//! the composite one bar at a time exposes each source image in turn.
//!
//! ## Slit Count
//!
//! Two rules are available:
//!
//! - **Compat** (default): `bar_count / bar_width` slits. This reproduces the
//!   established output bit for bit, but only yields one slit per interleave
//!   period when `bar_width == image_count`.
//! - **PerPeriod**: one slit for every period of `image_count` bars, covering
//!   the full width.
//!
//! Slit `i` always starts at column `image_count * bar_width * i`. Slits that
//! run past the right edge are clipped; slits starting past it are skipped.

use serde::{Deserialize, Serialize};

use crate::composite::BarLayout;
use crate::raster::{BLACK, WHITE};
use crate::Raster;

/// Formula used for the number of slits in the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlitRule {
    /// `bar_count / bar_width` slits (truncating).
    #[default]
    Compat,
    /// `ceil(bar_count / image_count)` slits, one per interleave period.
    PerPeriod,
}

/// Build the black/white slit mask for `layout`.
///
/// The mask has the same dimensions as the sources. Every pixel is either
/// opaque black or opaque white.
pub fn build_mask(layout: &BarLayout, rule: SlitRule) -> Raster {
    let mut mask = Raster::filled(layout.width, layout.height, BLACK);

    let slits = layout.slit_count(rule);
    tracing::debug!(?rule, slits, period = layout.period(), "building mask");

    for i in 0..slits {
        let Some(x) = layout.slit_x(i) else {
            tracing::debug!(slit = i, "mask slit starts past the right edge, skipped");
            // Offsets only grow with i.
            break;
        };
        let painted = mask.fill_columns(x, layout.bar_width, WHITE);
        if painted < layout.bar_width {
            tracing::debug!(slit = i, x, painted, "mask slit clipped at the right edge");
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_columns(mask: &Raster) -> Vec<u32> {
        (0..mask.width)
            .filter(|&x| mask.pixel(x, 0) == Some(WHITE))
            .collect()
    }

    #[test]
    fn test_mask_dimensions_match_sources() {
        let layout = BarLayout::new(100, 50, 10, 2);
        let mask = build_mask(&layout, SlitRule::Compat);
        assert_eq!(mask.dimensions(), (100, 50));
    }

    #[test]
    fn test_compat_single_slit() {
        // 10 bars / bar width 10 = 1 slit at x = 0.
        let layout = BarLayout::new(100, 50, 10, 2);
        let mask = build_mask(&layout, SlitRule::Compat);

        assert_eq!(white_columns(&mask), (0..10).collect::<Vec<_>>());
        assert_eq!(mask.count_pixels(WHITE), 10 * 50);
        assert_eq!(mask.count_pixels(BLACK), 90 * 50);
    }

    #[test]
    fn test_compat_zero_slits_is_all_black() {
        // 9 bars / bar width 10 = 0 slits.
        let layout = BarLayout::new(90, 30, 10, 3);
        let mask = build_mask(&layout, SlitRule::Compat);
        assert_eq!(mask.count_pixels(BLACK), 90 * 30);
    }

    #[test]
    fn test_compat_slit_spacing() {
        // 40 bars of width 2, 3 images: 20 slits every 6 columns.
        let layout = BarLayout::new(80, 4, 2, 3);
        let mask = build_mask(&layout, SlitRule::Compat);

        let expected: Vec<u32> = (0..80).filter(|x| x % 6 < 2).collect();
        assert_eq!(white_columns(&mask), expected);
    }

    #[test]
    fn test_slits_past_edge_are_dropped() {
        // 100 bars of width 1, 5 images: compat wants 100 slits at x = 5 * i,
        // only the first 20 fit.
        let layout = BarLayout::new(100, 2, 1, 5);
        assert_eq!(layout.slit_count(SlitRule::Compat), 100);
        let mask = build_mask(&layout, SlitRule::Compat);

        let expected: Vec<u32> = (0..100).step_by(5).collect();
        assert_eq!(white_columns(&mask), expected);
    }

    #[test]
    fn test_per_period_covers_width() {
        let layout = BarLayout::new(100, 10, 10, 2);
        let mask = build_mask(&layout, SlitRule::PerPeriod);

        let expected: Vec<u32> = (0..100).filter(|x| x % 20 < 10).collect();
        assert_eq!(white_columns(&mask), expected);
    }

    #[test]
    fn test_per_period_partial_period() {
        // 5 bars of 4 columns, 3 images: a full period then a partial one.
        let layout = BarLayout::new(20, 1, 4, 3);
        let mask = build_mask(&layout, SlitRule::PerPeriod);
        assert_eq!(
            white_columns(&mask),
            vec![0, 1, 2, 3, 12, 13, 14, 15]
        );
    }

    #[test]
    fn test_slit_rule_serde_names() {
        assert_eq!(SlitRule::default(), SlitRule::Compat);
        let rule: SlitRule = slit_rule_from_str("per-period");
        assert_eq!(rule, SlitRule::PerPeriod);
    }

    fn slit_rule_from_str(name: &str) -> SlitRule {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;
        let de: StrDeserializer<'_, Error> = name.into_deserializer();
        SlitRule::deserialize(de).unwrap()
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
