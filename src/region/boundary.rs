//! Region outline extraction

use super::pixel_set::PixelSet;
use crate::coordinate::Coordinate;

/// Boundary pixels of a region in row-major order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundarySet {
    pixels: Vec<Coordinate>,
}

impl BoundarySet {
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels sorted by row, then column
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.pixels.iter()
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        self.pixels
            .binary_search_by_key(&c.row_major_key(), Coordinate::row_major_key)
            .is_ok()
    }

    /// The boundary as an unordered set
    pub fn to_pixel_set(&self) -> PixelSet {
        self.pixels.iter().copied().collect()
    }
}

/// Members of `region` with at least one 4-neighbour outside it
///
/// Run `fill_holes` first; otherwise the rims of interior holes are
/// reported too.
pub fn boundary(region: &PixelSet) -> BoundarySet {
    let mut pixels: Vec<Coordinate> = region
        .iter()
        .filter(|c| c.neighbors4().iter().any(|n| !region.contains(n)))
        .copied()
        .collect();
    pixels.sort_unstable_by_key(Coordinate::row_major_key);
    BoundarySet { pixels }
}
