//! Raster access for decoded images
//!
//! The core algorithms only need indexed reads (and, for the overlay
//! target, writes) of RGB pixels. Decoding and encoding stay with the
//! `image` crate; see `utils::image_utils`.

mod buffer;
mod color;

pub use buffer::{PixelBuffer, PixelBufferMut};
pub use color::Color;
