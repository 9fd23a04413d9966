//! Image decoding and encoding
//!
//! Thin wrappers around the `image` crate that attach the file path to
//! codec errors and flatten transparency onto white.

use std::path::Path;

use image::{DynamicImage, RgbImage};
use log::{debug, info};

use crate::errors::{KitError, KitResult};

/// Decode an image as RGB, compositing any alpha channel over white
pub fn load_rgb<P: AsRef<Path>>(path: P) -> KitResult<RgbImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| KitError::DecodeError {
        path: path.display().to_string(),
        source,
    })?;
    info!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(flatten_onto_white(&image))
}

/// Drop transparency by blending every pixel over a white background
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    debug!("Flattening alpha channel onto white");
    let rgba = image.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = pixel[3] as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        rgb.put_pixel(x, y, image::Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }
    rgb
}

/// Encode an RGB image; the format follows the file extension
pub fn save_rgb<P: AsRef<Path>>(image: &RgbImage, path: P) -> KitResult<()> {
    let path = path.as_ref();
    image.save(path).map_err(|source| KitError::EncodeError {
        path: path.display().to_string(),
        source,
    })?;
    info!("Saved {}", path.display());
    Ok(())
}
