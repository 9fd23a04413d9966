//! Color-banded flood fill
//!
//! Pixels are classified into three bands: boundary (dark outline ink),
//! background (paper white), and everything in between, which is fillable.
//! The fill spreads through fillable pixels only, so it stops at any
//! sufficiently dark outline regardless of the seed's exact shade and
//! tolerates anti-aliasing gradients inside a district.

use std::collections::{HashSet, VecDeque};

use log::debug;

use super::pixel_set::PixelSet;
use crate::coordinate::Coordinate;
use crate::raster::{Color, PixelBuffer};

/// Thresholds separating outline, fill and background colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    /// A pixel whose channels are all below this is outline ink
    pub boundary_below: u8,
    /// A pixel whose channels are all above this is background
    pub background_above: u8,
}

impl Default for ColorBand {
    fn default() -> Self {
        ColorBand {
            boundary_below: 100,
            background_above: 240,
        }
    }
}

impl ColorBand {
    pub fn new(boundary_below: u8, background_above: u8) -> Self {
        ColorBand {
            boundary_below,
            background_above,
        }
    }

    pub fn is_boundary(&self, color: Color) -> bool {
        color.all_below(self.boundary_below)
    }

    pub fn is_background(&self, color: Color) -> bool {
        color.all_above(self.background_above)
    }

    /// Neither outline nor background
    pub fn is_fillable(&self, color: Color) -> bool {
        !self.is_boundary(color) && !self.is_background(color)
    }
}

/// Order in which pending pixels are expanded
///
/// The resulting set is the same for both; only the visit order differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Worklist {
    /// Breadth-first
    #[default]
    Queue,
    /// Depth-first
    Stack,
}

/// Flood fill from `seed` through pixels that are neither boundary nor background
///
/// Returns an empty set when the seed is out of bounds or not fillable.
pub fn segment<B, F, G>(buffer: &B, seed: Coordinate, is_boundary: F, is_background: G) -> PixelSet
where
    B: PixelBuffer + ?Sized,
    F: Fn(Color) -> bool,
    G: Fn(Color) -> bool,
{
    let mut visited = HashSet::new();
    flood(buffer, seed, Worklist::Queue, &mut visited, |c| {
        !is_boundary(c) && !is_background(c)
    })
}

/// Segmenter bound to a color band and worklist discipline
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionSegmenter {
    band: ColorBand,
    worklist: Worklist,
}

impl RegionSegmenter {
    pub fn new(band: ColorBand) -> Self {
        RegionSegmenter {
            band,
            worklist: Worklist::Queue,
        }
    }

    /// Use a different worklist discipline
    pub fn with_worklist(mut self, worklist: Worklist) -> Self {
        self.worklist = worklist;
        self
    }

    pub fn band(&self) -> ColorBand {
        self.band
    }

    /// Segment the district containing `seed`
    pub fn segment<B: PixelBuffer + ?Sized>(&self, buffer: &B, seed: Coordinate) -> PixelSet {
        let mut visited = HashSet::new();
        self.segment_with_visited(buffer, seed, &mut visited)
    }

    /// Segment while sharing `visited` with earlier calls
    ///
    /// Every pixel examined, member or not, is recorded in `visited`, and
    /// pixels already present are never examined again. A seed that was
    /// visited before yields an empty set.
    pub fn segment_with_visited<B: PixelBuffer + ?Sized>(
        &self,
        buffer: &B,
        seed: Coordinate,
        visited: &mut HashSet<Coordinate>,
    ) -> PixelSet {
        let band = self.band;
        flood(buffer, seed, self.worklist, visited, |c| band.is_fillable(c))
    }
}

fn flood<B, P>(
    buffer: &B,
    seed: Coordinate,
    worklist: Worklist,
    visited: &mut HashSet<Coordinate>,
    fillable: P,
) -> PixelSet
where
    B: PixelBuffer + ?Sized,
    P: Fn(Color) -> bool,
{
    let mut region = PixelSet::new();

    if !buffer.contains(&seed) || !visited.insert(seed) {
        return region;
    }
    if !buffer.get_checked(&seed).is_some_and(&fillable) {
        debug!("Seed {} is not on a fillable pixel", seed);
        return region;
    }

    let mut pending = VecDeque::new();
    region.insert(seed);
    pending.push_back(seed);

    loop {
        let next = match worklist {
            Worklist::Queue => pending.pop_front(),
            Worklist::Stack => pending.pop_back(),
        };
        let Some(current) = next else { break };

        for neighbor in current.neighbors4() {
            if !buffer.contains(&neighbor) || !visited.insert(neighbor) {
                continue;
            }
            if buffer.get_checked(&neighbor).is_some_and(&fillable) {
                region.insert(neighbor);
                pending.push_back(neighbor);
            }
        }
    }

    debug!("Segmented {} pixels from seed {}", region.len(), seed);
    region
}
