//! Bar interleaving for barrier-grid composites.
//!
//! The composite is built in three steps:
//! - [`SourceSet`] validates the ordered inputs against a bar width
//! - [`BarLayout`] derives the bar arithmetic shared with the mask builder
//! - [`build_composite`] copies bar `b` from source `b mod image_count`
//!
//! # Validation Order
//!
//! 1. At least one image
//! 2. The bar width divides the first image's width
//! 3. Every further image matches the first image's size
//!
//! The first failing rule aborts.

mod interleave;
mod layout;
mod source_set;

pub use interleave::build_composite;
pub use layout::BarLayout;
pub use source_set::SourceSet;
