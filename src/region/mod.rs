//! District extraction from a boundary-drawn raster
//!
//! A district is segmented from a seed with a color-banded flood fill,
//! repaired by filling enclosed holes, and reduced to its outer boundary
//! for outline rendering. Discovery scans a raster for every district at
//! once by threading one visited set through repeated segmentations.

mod boundary;
mod discovery;
mod holes;
mod pixel_set;
mod segmenter;
#[cfg(test)]
pub(crate) mod tests;

pub use boundary::{boundary, BoundarySet};
pub use discovery::{discover, DiscoveredRegion, ScanGrid};
pub use holes::fill_holes;
pub use pixel_set::PixelSet;
pub use segmenter::{segment, ColorBand, RegionSegmenter, Worklist};
