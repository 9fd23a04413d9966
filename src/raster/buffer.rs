//! Indexed pixel access traits

use image::RgbImage;

use super::color::Color;
use crate::coordinate::Coordinate;

/// Read-only view of a decoded raster
pub trait PixelBuffer {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Color at `(x, y)`; callers must stay within bounds
    fn get(&self, x: u32, y: u32) -> Color;

    /// Whether a coordinate lies inside the raster
    fn contains(&self, c: &Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width() as i64 && c.y < self.height() as i64
    }

    /// Bounds-checked read
    fn get_checked(&self, c: &Coordinate) -> Option<Color> {
        if self.contains(c) {
            Some(self.get(c.x as u32, c.y as u32))
        } else {
            None
        }
    }
}

/// Writable raster, used as the overlay target
pub trait PixelBufferMut: PixelBuffer {
    /// Overwrite the color at `(x, y)`; callers must stay within bounds
    fn set(&mut self, x: u32, y: u32, color: Color);
}

impl PixelBuffer for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get(&self, x: u32, y: u32) -> Color {
        Color::from(*self.get_pixel(x, y))
    }
}

impl PixelBufferMut for RgbImage {
    fn set(&mut self, x: u32, y: u32, color: Color) {
        self.put_pixel(x, y, color.into());
    }
}
