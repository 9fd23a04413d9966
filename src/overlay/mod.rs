//! Hatched overlay rendering
//!
//! Extracted districts are drawn onto a second, differently scaled raster
//! as a solid fill with diagonal hatching and a dashed outline.

mod compositor;
mod pipeline;
mod style;
#[cfg(test)]
mod tests;

pub use compositor::{boundary_pass, composite, fill_pass, stripe_pass, CompositeStats};
pub use pipeline::{extract_region, render_overlay, ExtractedRegion, RegionSummary};
pub use style::{PatternSettings, StyleSpec};
