//! End-to-end barrier-grid generation.
//!
//! Runs strictly in order: load and validate every input, build the
//! composite, build the mask, write the composite, write the mask. The first
//! failure aborts the run; validation failures write nothing.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::composite::{build_composite, BarLayout, SourceSet};
use crate::decode::{decode_raster, load_raster};
use crate::encode::write_png;
use crate::error::{GenerateError, GenerateResult};
use crate::mask::{build_mask, SlitRule};
use crate::Raster;

/// File name of the composite inside the output directory.
pub const DEFAULT_COMPOSITE_NAME: &str = "output.png";

/// File name of the mask inside the output directory.
pub const DEFAULT_MASK_NAME: &str = "mask.png";

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Bar width in pixels (must divide the image width)
    pub bar_width: u32,
    /// Slit count formula for the mask
    pub slit_rule: SlitRule,
    /// File name of the composite
    pub composite_name: String,
    /// File name of the mask
    pub mask_name: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            bar_width: 1,
            slit_rule: SlitRule::Compat,
            composite_name: DEFAULT_COMPOSITE_NAME.to_string(),
            mask_name: DEFAULT_MASK_NAME.to_string(),
        }
    }
}

impl GenerateOptions {
    /// Default options with the given bar width.
    pub fn new(bar_width: u32) -> Self {
        Self {
            bar_width,
            ..Self::default()
        }
    }

    pub fn with_slit_rule(mut self, slit_rule: SlitRule) -> Self {
        self.slit_rule = slit_rule;
        self
    }

    /// Check that the output names are plain, distinct file names.
    ///
    /// The bar width is checked later against the actual image width.
    pub fn validate(&self) -> GenerateResult<()> {
        for name in [&self.composite_name, &self.mask_name] {
            let mut components = Path::new(name).components();
            let plain = matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            );
            if !plain {
                return Err(GenerateError::InvalidOptions(format!(
                    "output name {name:?} must be a plain file name"
                )));
            }
        }
        if self.composite_name == self.mask_name {
            return Err(GenerateError::InvalidOptions(format!(
                "composite and mask would both be written to {:?}",
                self.mask_name
            )));
        }
        Ok(())
    }
}

/// Composite and mask built in memory.
#[derive(Debug, Clone)]
pub struct BarrierGrid {
    pub composite: Raster,
    pub mask: Raster,
    pub layout: BarLayout,
}

impl BarrierGrid {
    /// Build both rasters for a validated source set.
    pub fn build(set: &SourceSet, slit_rule: SlitRule) -> Self {
        let layout = set.layout();
        tracing::info!(
            images = layout.image_count,
            bars = layout.bar_count,
            slits = layout.slit_count(slit_rule),
            width = layout.width,
            height = layout.height,
            "compositing"
        );
        let composite = build_composite(set);
        let mask = build_mask(&layout, slit_rule);
        Self {
            composite,
            mask,
            layout,
        }
    }
}

/// Paths written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub composite: PathBuf,
    pub mask: PathBuf,
    pub layout: BarLayout,
}

/// Validate already decoded rasters and build the composite and mask.
///
/// # Errors
///
/// `NoImages`, `BarWidthMismatch` or `SizeMismatch`, checked in that order,
/// and `InvalidPixelData` for a raster whose buffer does not match its size.
pub fn compose(rasters: Vec<Raster>, options: &GenerateOptions) -> GenerateResult<BarrierGrid> {
    let set = SourceSet::from_rasters(rasters, options.bar_width)?;
    Ok(BarrierGrid::build(&set, options.slit_rule))
}

/// Decode `images` in order into a validated source set.
///
/// The bar width is checked as soon as the first image is decoded; every
/// later image is size-checked right after it is decoded.
pub fn load_source_set<P: AsRef<Path>>(images: &[P], bar_width: u32) -> GenerateResult<SourceSet> {
    collect_sources(images, bar_width, |index, path| load_indexed(index, path.as_ref()))
}

/// Like [`load_source_set`], for encoded images already held in memory.
pub fn decode_source_set<B: AsRef<[u8]>>(
    buffers: &[B],
    bar_width: u32,
) -> GenerateResult<SourceSet> {
    collect_sources(buffers, bar_width, |index, bytes| {
        decode_raster(bytes.as_ref()).map_err(|source| GenerateError::DecodeBuffer { index, source })
    })
}

fn collect_sources<T>(
    items: &[T],
    bar_width: u32,
    mut load: impl FnMut(usize, &T) -> GenerateResult<Raster>,
) -> GenerateResult<SourceSet> {
    let (first, rest) = items.split_first().ok_or(GenerateError::NoImages)?;

    let mut set = SourceSet::new(load(0, first)?, bar_width)?;
    for (i, item) in rest.iter().enumerate() {
        set.push(load(i + 1, item)?)?;
    }
    Ok(set)
}

fn load_indexed(index: usize, path: &Path) -> GenerateResult<Raster> {
    let raster = load_raster(path).map_err(|source| GenerateError::Decode {
        index,
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        index,
        path = %path.display(),
        width = raster.width,
        height = raster.height,
        "loaded image"
    );
    Ok(raster)
}

/// Generate `output.png` and `mask.png` in `output_dir` from `images`.
///
/// Equivalent to [`generate_with`] with default options and `bar_width`.
pub fn generate<P: AsRef<Path>>(
    images: &[P],
    output_dir: impl AsRef<Path>,
    bar_width: u32,
) -> GenerateResult<GeneratedFiles> {
    generate_with(images, output_dir, &GenerateOptions::new(bar_width))
}

/// Generate the composite and mask files in `output_dir`.
///
/// Existing files with the same names are replaced. The composite is written
/// before the mask.
///
/// # Errors
///
/// Any [`GenerateError`]; validation errors are reported before anything is
/// written.
#[tracing::instrument(
    skip_all,
    fields(images = images.len(), bar_width = options.bar_width, output_dir = %output_dir.as_ref().display())
)]
pub fn generate_with<P: AsRef<Path>>(
    images: &[P],
    output_dir: impl AsRef<Path>,
    options: &GenerateOptions,
) -> GenerateResult<GeneratedFiles> {
    options.validate()?;
    let output_dir = output_dir.as_ref();

    let set = load_source_set(images, options.bar_width)?;
    let grid = BarrierGrid::build(&set, options.slit_rule);
    drop(set);

    let composite = output_dir.join(&options.composite_name);
    write_output(&grid.composite, &composite)?;

    let mask = output_dir.join(&options.mask_name);
    write_output(&grid.mask, &mask)?;

    Ok(GeneratedFiles {
        composite,
        mask,
        layout: grid.layout,
    })
}

fn write_output(raster: &Raster, path: &Path) -> GenerateResult<()> {
    write_png(raster, path).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote image");
    Ok(())
}
