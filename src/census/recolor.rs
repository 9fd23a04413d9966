//! Gray fill recoloring

use log::info;

use super::color_census::ColorCensus;
use crate::raster::{Color, PixelBuffer, PixelBufferMut};

/// Channels of a gray may differ by at most this much
const GRAY_TOLERANCE: u8 = 5;

/// Most common near-gray map color, if any
pub fn dominant_gray<B: PixelBuffer + ?Sized>(buffer: &B) -> Option<(Color, u64)> {
    ColorCensus::of(buffer).most_common_where(|c| c.is_gray(GRAY_TOLERANCE))
}

/// Replace every pixel exactly equal to `from` with `to`
///
/// Returns the number of pixels changed.
pub fn recolor<B: PixelBufferMut + ?Sized>(buffer: &mut B, from: Color, to: Color) -> usize {
    let mut replaced = 0;
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if buffer.get(x, y) == from {
                buffer.set(x, y, to);
                replaced += 1;
            }
        }
    }
    info!("Recolored {} pixels from {} to {}", replaced, from, to);
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_dominant_gray_ignores_colored_and_white() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        for x in 0..4 {
            img.put_pixel(x, 0, Rgb([200, 10, 10]));
            img.put_pixel(x, 1, Rgb([200, 10, 10]));
        }
        img.put_pixel(0, 2, Rgb([192, 190, 193]));
        img.put_pixel(1, 2, Rgb([192, 190, 193]));
        img.put_pixel(2, 2, Rgb([128, 128, 128]));

        assert_eq!(dominant_gray(&img), Some((Color::new(192, 190, 193), 2)));
    }

    #[test]
    fn test_no_gray_found() {
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        assert_eq!(dominant_gray(&img), None);
    }

    #[test]
    fn test_recolor_exact_matches_only() {
        let mut img = RgbImage::from_pixel(3, 1, Rgb([192, 192, 192]));
        img.put_pixel(2, 0, Rgb([192, 192, 193]));
        let n = recolor(&mut img, Color::new(192, 192, 192), Color::new(255, 218, 185));
        assert_eq!(n, 2);
        assert_eq!(img.get_pixel(0, 0).0, [255, 218, 185]);
        assert_eq!(img.get_pixel(2, 0).0, [192, 192, 193]);
    }
}
