//! Tests for outline extraction

use super::test_utils::*;
use crate::coordinate::Coordinate;
use crate::region::{boundary, fill_holes, PixelSet, RegionSegmenter};

#[test]
fn test_square_interior_outline() {
    let img = outlined_square();
    let region = RegionSegmenter::default().segment(&img, Coordinate::new(4, 4));
    let (region, holes) = fill_holes(region);
    assert_eq!(holes, 0);

    let outline = boundary(&region);
    // The 4x4 block minus its 2x2 core
    assert_eq!(outline.len(), 12);
    assert_eq!(outline.to_pixel_set(), {
        let core = rect_set(4, 4, 5, 5);
        rect_set(3, 3, 6, 6).iter().copied().filter(|c| !core.contains(c)).collect::<PixelSet>()
    });
}

#[test]
fn test_boundary_is_subset_in_row_major_order() {
    let blob: PixelSet = rect_set(0, 0, 11, 7)
        .iter()
        .copied()
        .filter(|c| (c.x - 6).pow(2) + (c.y - 4).pow(2) <= 16)
        .collect();

    let outline = boundary(&blob);
    assert!(outline.to_pixel_set().is_subset(&blob));

    let ordered: Vec<Coordinate> = outline.iter().copied().collect();
    let mut sorted = ordered.clone();
    sorted.sort_by_key(|c| (c.y, c.x));
    assert_eq!(ordered, sorted);

    for c in blob.iter() {
        let exposed = c.neighbors4().iter().any(|n| !blob.contains(n));
        assert_eq!(outline.contains(c), exposed, "pixel {}", c);
    }
}

#[test]
fn test_unfilled_hole_adds_inner_rim() {
    let holed: PixelSet = rect_set(0, 0, 4, 4)
        .iter()
        .copied()
        .filter(|c| *c != Coordinate::new(2, 2))
        .collect();

    let with_hole = boundary(&holed);
    // Outer ring plus the four pixels around the hole
    assert_eq!(with_hole.len(), 16 + 4);

    let (filled, _) = fill_holes(holed);
    assert_eq!(boundary(&filled).len(), 16);
}

#[test]
fn test_single_pixel_and_empty() {
    let one = set_of(&[(3, 3)]);
    let outline = boundary(&one);
    assert_eq!(outline.len(), 1);
    assert!(outline.contains(&Coordinate::new(3, 3)));

    assert!(boundary(&PixelSet::new()).is_empty());
}
