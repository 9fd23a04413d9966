//! Hatched region compositing
//!
//! A region is drawn onto the target in three passes, each allowed to
//! overwrite the previous one inside its own footprint:
//!
//! 1. solid fill of every mapped source pixel,
//! 2. 45-degree stripes over the same footprint,
//! 3. a dashed outline along the boundary, one target pixel wider than the
//!    mapped blocks so thin strokes survive upscaling.
//!
//! Target pixels outside the raster are clipped, never written.

use log::debug;

use super::style::StyleSpec;
use crate::coordinate::{OverlayTransform, TargetBlock};
use crate::raster::{Color, PixelBufferMut};
use crate::region::{BoundarySet, PixelSet};

/// Pixel counts written by each pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeStats {
    pub filled: usize,
    pub striped: usize,
    pub outlined: usize,
}

/// Composite one region onto `target`
pub fn composite<T: PixelBufferMut + ?Sized>(
    target: &mut T,
    region: &PixelSet,
    boundary: &BoundarySet,
    transform: &OverlayTransform,
    style: &StyleSpec,
) -> CompositeStats {
    let stats = CompositeStats {
        filled: fill_pass(target, region, transform, style.fill_color),
        striped: stripe_pass(target, region, transform, style),
        outlined: boundary_pass(target, boundary, transform, style),
    };
    debug!(
        "Composited region: {} filled, {} striped, {} outlined",
        stats.filled, stats.striped, stats.outlined
    );
    stats
}

/// Mapped block of a source pixel, clipped to the target
fn clipped_block<T: PixelBufferMut + ?Sized>(target: &T, block: TargetBlock) -> Option<TargetBlock> {
    block.clipped(target.width(), target.height())
}

/// Write `fill` over the mapped block of every region pixel
pub fn fill_pass<T: PixelBufferMut + ?Sized>(
    target: &mut T,
    region: &PixelSet,
    transform: &OverlayTransform,
    fill: Color,
) -> usize {
    let mut written = 0;
    for c in region {
        let Some(block) = clipped_block(target, transform.map_block(c)) else { continue };
        for (x, y) in block.pixels() {
            target.set(x as u32, y as u32, fill);
            written += 1;
        }
    }
    written
}

/// Overwrite stripe pixels within the mapped footprint
pub fn stripe_pass<T: PixelBufferMut + ?Sized>(
    target: &mut T,
    region: &PixelSet,
    transform: &OverlayTransform,
    style: &StyleSpec,
) -> usize {
    if style.stripe_spacing() == 0 || style.stripe_width() == 0 {
        return 0;
    }
    let mut written = 0;
    for c in region {
        let Some(block) = clipped_block(target, transform.map_block(c)) else { continue };
        for (x, y) in block.pixels() {
            if style.is_stripe(x, y) {
                target.set(x as u32, y as u32, style.stripe_color);
                written += 1;
            }
        }
    }
    written
}

/// Draw the dashed outline
///
/// The dash index advances for every boundary pixel, drawn or skipped, so
/// the pattern runs continuously along the row-major order.
pub fn boundary_pass<T: PixelBufferMut + ?Sized>(
    target: &mut T,
    boundary: &BoundarySet,
    transform: &OverlayTransform,
    style: &StyleSpec,
) -> usize {
    let mut written = 0;
    for (index, c) in boundary.iter().enumerate() {
        if !style.is_dash(index) {
            continue;
        }
        let block = transform.map_block(c).expanded(1);
        let Some(block) = clipped_block(target, block) else { continue };
        for (x, y) in block.pixels() {
            target.set(x as u32, y as u32, style.boundary_color);
            written += 1;
        }
    }
    written
}
