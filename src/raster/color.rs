//! RGB color type and parsing

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{KitError, KitResult};

lazy_static! {
    static ref TRIPLE_RE: Regex =
        Regex::new(r"^\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*$").unwrap();
    static ref HEX_RE: Regex =
        Regex::new(r"^\s*#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})\s*$").unwrap();
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// Create a new RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// True when every channel is strictly below `threshold`
    pub fn all_below(&self, threshold: u8) -> bool {
        self.r < threshold && self.g < threshold && self.b < threshold
    }

    /// True when every channel is strictly above `threshold`
    pub fn all_above(&self, threshold: u8) -> bool {
        self.r > threshold && self.g > threshold && self.b > threshold
    }

    /// True when every channel lies strictly between `low` and `high`
    pub fn all_between(&self, low: u8, high: u8) -> bool {
        [self.r, self.g, self.b].iter().all(|&c| c > low && c < high)
    }

    /// True when no two channels differ by more than `tolerance`
    pub fn is_gray(&self, tolerance: u8) -> bool {
        let (r, g, b) = (self.r as i16, self.g as i16, self.b as i16);
        let tol = tolerance as i16;
        (r - g).abs() <= tol && (g - b).abs() <= tol && (r - b).abs() <= tol
    }

    /// Convert to hex string (#rrggbb format)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `"r,g,b"` or `"#rrggbb"`
    pub fn parse(text: &str) -> KitResult<Self> {
        if let Some(caps) = TRIPLE_RE.captures(text) {
            let channel = |i: usize| -> KitResult<u8> {
                caps[i].parse::<u8>().map_err(|_| {
                    KitError::ConfigError(format!("Color channel out of range in '{}'", text))
                })
            };
            return Ok(Color::new(channel(1)?, channel(2)?, channel(3)?));
        }

        if let Some(caps) = HEX_RE.captures(text) {
            // The regex guarantees two hex digits per group
            let channel = |i: usize| u8::from_str_radix(&caps[i], 16).unwrap_or(0);
            return Ok(Color::new(channel(1), channel(2), channel(3)));
        }

        Err(KitError::ConfigError(format!(
            "Invalid color '{}': expected \"r,g,b\" or \"#rrggbb\"",
            text
        )))
    }
}

/// Database format used by the map color mappings: `r,g,b`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Color::new(pixel[0], pixel[1], pixel[2])
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}
