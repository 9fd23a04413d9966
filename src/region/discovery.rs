//! District discovery by grid scanning
//!
//! Used to find seeds for an overlay configuration: every grid point in a
//! scan window that looks like district fill seeds a segmentation, and one
//! visited set is shared across all of them so a district is only
//! segmented once no matter how many grid points fall inside it.

use std::collections::HashSet;

use log::{debug, info};

use super::pixel_set::PixelSet;
use super::segmenter::RegionSegmenter;
use crate::coordinate::{BoundingBox, Coordinate};
use crate::raster::PixelBuffer;
use crate::utils::progress::ProgressTracker;

/// Where and how densely to look for districts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanGrid {
    /// Scan window in source pixels; `None` scans the whole raster
    pub window: Option<BoundingBox>,
    /// Distance between grid points
    pub step: u32,
    /// Candidate seeds must have every channel strictly above this
    pub seed_low: u8,
    /// Candidate seeds must have every channel strictly below this
    pub seed_high: u8,
    /// Regions with fewer pixels are dropped
    pub min_size: usize,
}

impl Default for ScanGrid {
    fn default() -> Self {
        ScanGrid {
            window: None,
            step: 3,
            seed_low: 120,
            seed_high: 230,
            min_size: 200,
        }
    }
}

/// A district found by `discover`
#[derive(Debug, Clone)]
pub struct DiscoveredRegion {
    /// Member pixels (holes not filled)
    pub pixels: PixelSet,
    /// Grid point the region was segmented from
    pub seed: Coordinate,
    /// Mean member position
    pub center: Coordinate,
    pub bbox: BoundingBox,
}

impl DiscoveredRegion {
    pub fn size(&self) -> usize {
        self.pixels.len()
    }
}

/// Find every district reachable from the scan grid
///
/// Results are sorted by center, top to bottom then left to right.
pub fn discover<B: PixelBuffer + ?Sized>(
    buffer: &B,
    segmenter: &RegionSegmenter,
    grid: &ScanGrid,
) -> Vec<DiscoveredRegion> {
    let full = BoundingBox::new(0, 0, buffer.width() as i64 - 1, buffer.height() as i64 - 1);
    let window = match grid.window {
        Some(w) => BoundingBox::new(
            w.min_x.max(full.min_x),
            w.min_y.max(full.min_y),
            w.max_x.min(full.max_x),
            w.max_y.min(full.max_y),
        ),
        None => full,
    };
    if buffer.width() == 0 || buffer.height() == 0 || window.max_x < window.min_x || window.max_y < window.min_y {
        return Vec::new();
    }

    let step = grid.step.max(1) as usize;
    let rows: Vec<i64> = (window.min_y..=window.max_y).step_by(step).collect();
    let progress = ProgressTracker::new(rows.len() as u64, "Scanning for districts");

    let mut visited: HashSet<Coordinate> = HashSet::new();
    let mut regions = Vec::new();

    for y in rows {
        for x in (window.min_x..=window.max_x).step_by(step) {
            let seed = Coordinate::new(x, y);
            if visited.contains(&seed) {
                continue;
            }
            let Some(color) = buffer.get_checked(&seed) else { continue };
            if !color.all_between(grid.seed_low, grid.seed_high) {
                continue;
            }

            let pixels = segmenter.segment_with_visited(buffer, seed, &mut visited);
            if pixels.len() < grid.min_size.max(1) {
                continue;
            }
            // A non-empty set always has a center and a box
            if let (Some(center), Some(bbox)) = (pixels.centroid(), pixels.bounding_box()) {
                debug!("Found region of {} px at {} from seed {}", pixels.len(), center, seed);
                regions.push(DiscoveredRegion { pixels, seed, center, bbox });
            }
        }
        progress.increment(1);
    }
    progress.finish();

    regions.sort_by_key(|r| r.center.row_major_key());
    info!("Discovered {} regions", regions.len());
    regions
}
