//! Color counting and palette comparison

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use super::is_map_color;
use crate::raster::{Color, PixelBuffer};

/// Pixel count per map color
#[derive(Debug, Clone, Default)]
pub struct ColorCensus {
    counts: HashMap<Color, u64>,
}

impl ColorCensus {
    /// Count every map color in one pass over the raster
    pub fn of<B: PixelBuffer + ?Sized>(buffer: &B) -> Self {
        Self::of_filtered(buffer, is_map_color)
    }

    /// Count only colors accepted by `keep`
    pub fn of_filtered<B, F>(buffer: &B, keep: F) -> Self
    where
        B: PixelBuffer + ?Sized,
        F: Fn(Color) -> bool,
    {
        let mut counts = HashMap::new();
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let color = buffer.get(x, y);
                if keep(color) {
                    *counts.entry(color).or_insert(0) += 1;
                }
            }
        }
        debug!("Census found {} distinct colors", counts.len());
        ColorCensus { counts }
    }

    pub fn count(&self, color: &Color) -> u64 {
        self.counts.get(color).copied().unwrap_or(0)
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn colors(&self) -> HashSet<Color> {
        self.counts.keys().copied().collect()
    }

    /// Most common first; ties broken by color for stable output
    pub fn sorted(&self) -> Vec<(Color, u64)> {
        let mut entries: Vec<(Color, u64)> = self.counts.iter().map(|(c, n)| (*c, *n)).collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    /// The most common color accepted by `keep`
    pub fn most_common_where<F: Fn(Color) -> bool>(&self, keep: F) -> Option<(Color, u64)> {
        self.sorted().into_iter().find(|(c, _)| keep(*c))
    }
}

/// Which colors survive from one map version to the next
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorComparison {
    /// Present in both maps, sorted
    pub common: Vec<Color>,
    /// Only in the old map, sorted
    pub only_old: Vec<Color>,
    /// Only in the new map, sorted
    pub only_new: Vec<Color>,
    pub old_total: usize,
    pub new_total: usize,
}

impl ColorComparison {
    /// Share of old colors still present, in percent
    pub fn preservation_rate(&self) -> f64 {
        if self.old_total == 0 {
            0.0
        } else {
            self.common.len() as f64 / self.old_total as f64 * 100.0
        }
    }

    /// A new map with ten times the colors was almost certainly anti-aliased
    pub fn looks_antialiased(&self) -> bool {
        self.new_total > self.old_total * 10
    }
}

/// Compare the map colors of two rasters
pub fn compare<A, B>(old: &A, new: &B) -> ColorComparison
where
    A: PixelBuffer + ?Sized,
    B: PixelBuffer + ?Sized,
{
    let old_colors = ColorCensus::of(old).colors();
    let new_colors = ColorCensus::of(new).colors();

    let sorted = |set: HashSet<&Color>| {
        let mut v: Vec<Color> = set.into_iter().copied().collect();
        v.sort_unstable();
        v
    };

    let comparison = ColorComparison {
        common: sorted(old_colors.intersection(&new_colors).collect()),
        only_old: sorted(old_colors.difference(&new_colors).collect()),
        only_new: sorted(new_colors.difference(&old_colors).collect()),
        old_total: old_colors.len(),
        new_total: new_colors.len(),
    };
    if comparison.looks_antialiased() {
        warn!(
            "New map has {} colors against {} in the old one; it is probably anti-aliased",
            comparison.new_total, comparison.old_total
        );
    }
    comparison
}
