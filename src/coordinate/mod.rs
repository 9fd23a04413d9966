//! Pixel coordinate handling
//!
//! This module provides the integer coordinate type shared by source and
//! target rasters, pixel bounding boxes, and the affine transform that maps
//! source space onto target space.

mod bbox;
mod point;
mod transform;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Coordinate;
pub use self::transform::{OverlayTransform, TargetBlock};
