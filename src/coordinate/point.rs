//! Integer pixel coordinate

use std::fmt;

/// A pixel position in a raster
///
/// Coordinates are signed so that neighbours of edge pixels and transformed
/// positions left of or above the origin can be represented before clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Column, growing to the right
    pub x: i64,
    /// Row, growing downwards
    pub y: i64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(x: i64, y: i64) -> Self {
        Coordinate { x, y }
    }

    /// The four edge-adjacent neighbours (left, right, up, down)
    pub fn neighbors4(&self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.x - 1, self.y),
            Coordinate::new(self.x + 1, self.y),
            Coordinate::new(self.x, self.y - 1),
            Coordinate::new(self.x, self.y + 1),
        ]
    }

    /// Sort key for row-major order (by y, then x)
    pub fn row_major_key(&self) -> (i64, i64) {
        (self.y, self.x)
    }

    /// Parse a coordinate from a string (format: "x,y")
    pub fn from_string(coord_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = coord_str.split(',').collect();
        if parts.len() != 2 {
            return Err("Coordinate must have 2 comma-separated values".to_string());
        }

        let x = parts[0].trim().parse::<i64>()
            .map_err(|_| format!("Invalid x value: {}", parts[0].trim()))?;
        let y = parts[1].trim().parse::<i64>()
            .map_err(|_| format!("Invalid y value: {}", parts[1].trim()))?;

        Ok(Coordinate::new(x, y))
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
