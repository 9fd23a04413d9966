//! Enclosed hole filling
//!
//! Works on a dense grid over the region's bounding box padded by one
//! pixel. The padding ring is never part of the region, so a flood from the
//! ring through non-member cells reaches exactly the complement pixels that
//! can escape the box. Whatever non-member cell is left unreached is
//! enclosed by the region and gets added.

use std::collections::VecDeque;

use log::debug;

use super::pixel_set::PixelSet;
use crate::coordinate::Coordinate;

/// Add every pixel enclosed by `region` to it
///
/// Returns the filled set and the number of pixels added. Only pixels
/// inside the region's bounding box can be added. Running it again on its
/// own output adds nothing.
pub fn fill_holes(mut region: PixelSet) -> (PixelSet, usize) {
    let Some(bbox) = region.bounding_box() else {
        return (region, 0);
    };
    let grid = bbox.padded(1);

    let mut member = vec![false; grid.area()];
    for c in region.iter() {
        member[grid.local_index(c)] = true;
    }

    let mut exterior = vec![false; grid.area()];
    let mut pending = VecDeque::new();

    let border = (grid.min_x..=grid.max_x)
        .flat_map(|x| [Coordinate::new(x, grid.min_y), Coordinate::new(x, grid.max_y)])
        .chain(
            (grid.min_y..=grid.max_y)
                .flat_map(|y| [Coordinate::new(grid.min_x, y), Coordinate::new(grid.max_x, y)]),
        );
    for c in border {
        let idx = grid.local_index(&c);
        if !member[idx] && !exterior[idx] {
            exterior[idx] = true;
            pending.push_back(c);
        }
    }

    while let Some(current) = pending.pop_front() {
        for neighbor in current.neighbors4() {
            if !grid.contains(&neighbor) {
                continue;
            }
            let idx = grid.local_index(&neighbor);
            if member[idx] || exterior[idx] {
                continue;
            }
            exterior[idx] = true;
            pending.push_back(neighbor);
        }
    }

    let mut added = 0;
    for y in bbox.min_y..=bbox.max_y {
        for x in bbox.min_x..=bbox.max_x {
            let c = Coordinate::new(x, y);
            let idx = grid.local_index(&c);
            if !member[idx] && !exterior[idx] {
                region.insert(c);
                added += 1;
            }
        }
    }

    if added > 0 {
        debug!("Filled {} hole pixels inside {}x{} box", added, bbox.width(), bbox.height());
    }
    (region, added)
}
