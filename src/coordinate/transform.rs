//! Source-to-target coordinate transformation

use super::point::Coordinate;
use crate::errors::{KitError, KitResult};

/// Half-open rectangle of target pixels `[x0, x1) x [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetBlock {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl TargetBlock {
    /// Grow the block by `amount` pixels on every side
    pub fn expanded(&self, amount: i64) -> Self {
        TargetBlock {
            x0: self.x0 - amount,
            y0: self.y0 - amount,
            x1: self.x1 + amount,
            y1: self.y1 + amount,
        }
    }

    /// Clip the block to a `width x height` raster
    ///
    /// Returns `None` when nothing of the block is left on the canvas.
    pub fn clipped(&self, width: u32, height: u32) -> Option<Self> {
        let block = TargetBlock {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(width as i64),
            y1: self.y1.min(height as i64),
        };
        if block.x0 >= block.x1 || block.y0 >= block.y1 {
            None
        } else {
            Some(block)
        }
    }

    /// Iterate over every pixel of the block in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        (self.y0..self.y1).flat_map(move |y| (self.x0..self.x1).map(move |x| (x, y)))
    }
}

/// Affine transform `target = origin + source * scale`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayTransform {
    /// Target-space position of the source origin
    pub origin: Coordinate,
    /// Uniform scale factor, always positive
    scale: f64,
}

impl OverlayTransform {
    /// Create a transform, rejecting non-positive or non-finite scales
    pub fn new(origin: Coordinate, scale: f64) -> KitResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(KitError::ConfigError(format!(
                "Overlay scale must be a positive number, got {}",
                scale
            )));
        }
        Ok(OverlayTransform { origin, scale })
    }

    /// The scale factor
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a source-space position (possibly fractional) to target space
    fn map_axis(&self, origin: i64, value: i64) -> i64 {
        (origin as f64 + value as f64 * self.scale).floor() as i64
    }

    /// Target block covered by one source pixel
    ///
    /// Neighbouring source pixels map to abutting blocks, so blocks never
    /// overlap and never leave gaps.
    pub fn map_block(&self, c: &Coordinate) -> TargetBlock {
        TargetBlock {
            x0: self.map_axis(self.origin.x, c.x),
            y0: self.map_axis(self.origin.y, c.y),
            x1: self.map_axis(self.origin.x, c.x + 1),
            y1: self.map_axis(self.origin.y, c.y + 1),
        }
    }
}
