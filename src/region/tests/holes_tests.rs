//! Tests for enclosed hole filling

use image::Rgb;

use super::test_utils::*;
use crate::coordinate::Coordinate;
use crate::region::{fill_holes, PixelSet, RegionSegmenter};

#[test]
fn test_hollow_square_gets_center() {
    let center = Coordinate::new(2, 2);
    let ring: PixelSet = rect_set(0, 0, 4, 4)
        .iter()
        .copied()
        .filter(|c| *c != center)
        .collect();

    let (filled, added) = fill_holes(ring);
    assert_eq!(added, 1);
    assert!(filled.contains(&center));
    assert_eq!(filled, rect_set(0, 0, 4, 4));
}

#[test]
fn test_ring_with_wide_hole() {
    let ring: PixelSet = rect_set(0, 0, 6, 5)
        .iter()
        .copied()
        .filter(|c| !(c.x >= 2 && c.x <= 4 && c.y >= 2 && c.y <= 3))
        .collect();

    let (filled, added) = fill_holes(ring);
    assert_eq!(added, 6);
    assert_eq!(filled, rect_set(0, 0, 6, 5));
}

#[test]
fn test_open_notch_is_not_a_hole() {
    // Hollow 5x5 outline with a gap in the top edge
    let outline: PixelSet = rect_set(0, 0, 4, 4)
        .iter()
        .copied()
        .filter(|c| !(c.x >= 1 && c.x <= 3 && c.y >= 1 && c.y <= 3))
        .filter(|c| *c != Coordinate::new(2, 0))
        .collect();
    let before = outline.len();

    let (filled, added) = fill_holes(outline);
    assert_eq!(added, 0);
    assert_eq!(filled.len(), before);
}

#[test]
fn test_fill_is_idempotent() {
    let shape: PixelSet = rect_set(0, 0, 9, 9)
        .iter()
        .copied()
        .filter(|c| !matches!((c.x, c.y), (2, 2) | (3, 2) | (7, 6) | (5, 8)))
        .filter(|c| !(c.x == 9 && c.y > 4))
        .collect();

    let (once, added_once) = fill_holes(shape);
    assert_eq!(added_once, 4);
    let (twice, added_twice) = fill_holes(once.clone());
    assert_eq!(added_twice, 0);
    assert_eq!(once, twice);
}

#[test]
fn test_empty_region() {
    let (filled, added) = fill_holes(PixelSet::new());
    assert!(filled.is_empty());
    assert_eq!(added, 0);
}

#[test]
fn test_never_grows_past_bounding_box() {
    let shape: PixelSet = rect_set(10, 20, 15, 24)
        .iter()
        .copied()
        .filter(|c| (c.x + c.y) % 3 != 0 || c.x == 10 || c.x == 15 || c.y == 20 || c.y == 24)
        .collect();
    let bbox = shape.bounding_box().unwrap();

    let (filled, _) = fill_holes(shape);
    assert!(filled.iter().all(|c| bbox.contains(c)));
    assert_eq!(filled.bounding_box(), Some(bbox));
}

#[test]
fn test_repairs_enclave_left_by_segmentation() {
    let mut img = canvas(14, 14, WHITE);
    fill_rect(&mut img, 1, 1, 12, 12, GRAY);
    outline_rect(&mut img, 0, 0, 13, 13, BLACK);
    // Anti-aliased speck and a tiny dark label inside the district
    img.put_pixel(5, 5, Rgb([60, 60, 60]));
    fill_rect(&mut img, 8, 8, 9, 8, BLACK);
    img.put_pixel(3, 9, Rgb([250, 250, 250]));

    let region = RegionSegmenter::default().segment(&img, Coordinate::new(2, 2));
    assert_eq!(region.len(), 144 - 4);

    let (filled, added) = fill_holes(region);
    assert_eq!(added, 4);
    assert_eq!(filled, rect_set(1, 1, 12, 12));
}
