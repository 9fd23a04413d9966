pub mod errors;
pub mod coordinate;
pub mod raster;
pub mod region;
pub mod overlay;
pub mod census;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{OverlayOutcome, RegionKit};

pub use errors::{KitError, KitResult};
pub use coordinate::{BoundingBox, Coordinate, OverlayTransform};
pub use raster::{Color, PixelBuffer, PixelBufferMut};
pub use region::{boundary, fill_holes, segment, BoundarySet, ColorBand, PixelSet, RegionSegmenter};
pub use overlay::{composite, StyleSpec};
pub use config::OverlayConfig;
