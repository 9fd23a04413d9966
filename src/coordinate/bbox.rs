//! Bounding box structure for pixel regions

use super::point::Coordinate;

/// An inclusive pixel bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: i64,
    /// Minimum Y coordinate
    pub min_y: i64,
    /// Maximum X coordinate (inclusive)
    pub max_x: i64,
    /// Maximum Y coordinate (inclusive)
    pub max_y: i64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box enclosing every coordinate, or `None` for an empty input
    pub fn enclosing<'a, I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox::new(first.x, first.y, first.x, first.y);
        for c in iter {
            bbox.min_x = bbox.min_x.min(c.x);
            bbox.min_y = bbox.min_y.min(c.y);
            bbox.max_x = bbox.max_x.max(c.x);
            bbox.max_y = bbox.max_y.max(c.y);
        }
        Some(bbox)
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err("Bounding box must have 4 comma-separated values".to_string());
        }

        let min_x = parts[0].trim().parse::<i64>()
            .map_err(|_| "Invalid min_x value".to_string())?;
        let min_y = parts[1].trim().parse::<i64>()
            .map_err(|_| "Invalid min_y value".to_string())?;
        let max_x = parts[2].trim().parse::<i64>()
            .map_err(|_| "Invalid max_x value".to_string())?;
        let max_y = parts[3].trim().parse::<i64>()
            .map_err(|_| "Invalid max_y value".to_string())?;

        if max_x < min_x || max_y < min_y {
            return Err("Bounding box maximum must not be below its minimum".to_string());
        }

        Ok(BoundingBox::new(min_x, min_y, max_x, max_y))
    }

    /// Number of columns covered
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows covered
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y + 1
    }

    /// Check if this bounding box contains a coordinate
    pub fn contains(&self, c: &Coordinate) -> bool {
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }

    /// Grow the box by `amount` pixels on every side
    pub fn padded(&self, amount: i64) -> Self {
        BoundingBox::new(
            self.min_x - amount,
            self.min_y - amount,
            self.max_x + amount,
            self.max_y + amount,
        )
    }

    /// Dense row-major index of a coordinate inside the box
    ///
    /// The caller must check `contains` first.
    pub fn local_index(&self, c: &Coordinate) -> usize {
        ((c.y - self.min_y) * self.width() + (c.x - self.min_x)) as usize
    }

    /// Number of cells in the box
    pub fn area(&self) -> usize {
        (self.width() * self.height()) as usize
    }
}
