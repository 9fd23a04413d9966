//! Unordered set of source-space pixels

use std::collections::hash_set;
use std::collections::HashSet;

use crate::coordinate::{BoundingBox, Coordinate};

/// Pixels belonging to one region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelSet {
    pixels: HashSet<Coordinate>,
}

impl PixelSet {
    /// Create an empty set
    pub fn new() -> Self {
        PixelSet::default()
    }

    /// Add a pixel, returning whether it was new
    pub fn insert(&mut self, c: Coordinate) -> bool {
        self.pixels.insert(c)
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        self.pixels.contains(c)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Coordinate> {
        self.pixels.iter()
    }

    /// Bounding box of the members, `None` when empty
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.pixels.iter())
    }

    /// Mean member position, truncated to whole pixels
    pub fn centroid(&self) -> Option<Coordinate> {
        if self.pixels.is_empty() {
            return None;
        }
        let n = self.pixels.len() as f64;
        let (sx, sy) = self
            .pixels
            .iter()
            .fold((0.0f64, 0.0f64), |(sx, sy), c| (sx + c.x as f64, sy + c.y as f64));
        Some(Coordinate::new((sx / n) as i64, (sy / n) as i64))
    }

    /// Members of either set
    pub fn union(&self, other: &PixelSet) -> PixelSet {
        self.pixels.union(&other.pixels).copied().collect()
    }

    /// Whether every member of `self` is also in `other`
    pub fn is_subset(&self, other: &PixelSet) -> bool {
        self.pixels.is_subset(&other.pixels)
    }

    /// Members sorted by row, then column
    pub fn to_row_major(&self) -> Vec<Coordinate> {
        let mut sorted: Vec<Coordinate> = self.pixels.iter().copied().collect();
        sorted.sort_unstable_by_key(Coordinate::row_major_key);
        sorted
    }
}

impl FromIterator<Coordinate> for PixelSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        PixelSet {
            pixels: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coordinate> for PixelSet {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.pixels.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PixelSet {
    type Item = &'a Coordinate;
    type IntoIter = hash_set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}
