//! Map color statistics
//!
//! Region colors on the map are keyed by exact RGB value, so these helpers
//! count colors, compare the palettes of two map versions, and recolor the
//! dominant gray fill.

mod color_census;
mod recolor;

pub use color_census::{compare, ColorCensus, ColorComparison};
pub use recolor::{dominant_gray, recolor};

use crate::raster::Color;

/// Paper white and outline black carry no region mapping
pub fn is_map_color(color: Color) -> bool {
    !color.all_above(250) && !color.all_below(5)
}
