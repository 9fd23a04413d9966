//! Tests for the three compositing passes

use image::RgbImage;

use crate::coordinate::{Coordinate, OverlayTransform};
use crate::overlay::{composite, fill_pass, stripe_pass, CompositeStats, PatternSettings, StyleSpec};
use crate::raster::{Color, PixelBuffer};
use crate::region::tests::test_utils::{rect_set, set_of};
use crate::region::{boundary, BoundarySet, PixelSet};

const FILL: Color = Color::new(0, 190, 180);
const STRIPE: Color = Color::new(0, 140, 130);
const OUTLINE: Color = Color::new(0, 100, 95);

fn white(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Color::WHITE.into())
}

fn style(pattern: PatternSettings) -> StyleSpec {
    StyleSpec::new(FILL, STRIPE, OUTLINE).with_pattern(pattern)
}

fn transform(x: i64, y: i64, scale: f64) -> OverlayTransform {
    OverlayTransform::new(Coordinate::new(x, y), scale).unwrap()
}

#[test]
fn test_fill_maps_pixel_to_scaled_block() {
    let mut target = white(40, 40);
    let written = fill_pass(&mut target, &set_of(&[(0, 0)]), &transform(10, 20, 2.0), FILL);

    assert_eq!(written, 4);
    for (x, y) in [(10, 20), (11, 20), (10, 21), (11, 21)] {
        assert_eq!(target.get(x, y), FILL);
    }
    for (x, y) in [(12, 20), (10, 22), (9, 20), (10, 19)] {
        assert_eq!(target.get(x, y), Color::WHITE);
    }
}

#[test]
fn test_fractional_scale_leaves_no_gaps() {
    let mut target = white(40, 10);
    let row = rect_set(0, 0, 9, 0);
    let written = fill_pass(&mut target, &row, &transform(0, 0, 3.2), FILL);

    // floor(10 * 3.2) = 32 columns, floor(3.2) = 3 rows
    assert_eq!(written, 32 * 3);
    for x in 0..32 {
        assert_eq!(target.get(x, 0), FILL, "column {}", x);
    }
    assert_eq!(target.get(32, 0), Color::WHITE);
}

#[test]
fn test_stripes_follow_target_diagonal() {
    let pattern = PatternSettings {
        stripe_width: 2,
        stripe_spacing: 5,
        ..Default::default()
    };
    let s = style(pattern);
    let t = transform(3, 1, 4.0);

    // Two abutting regions drawn separately share one continuous hatch
    let mut target = white(20, 10);
    let left = set_of(&[(0, 0)]);
    let right = set_of(&[(1, 0)]);
    for region in [&left, &right] {
        fill_pass(&mut target, region, &t, FILL);
        stripe_pass(&mut target, region, &t, &s);
    }

    for y in 1..5 {
        for x in 3..11 {
            let expected = if (x + y) % 5 < 2 { STRIPE } else { FILL };
            assert_eq!(target.get(x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_zero_width_disables_stripes() {
    let pattern = PatternSettings {
        stripe_width: 0,
        ..Default::default()
    };
    let mut target = white(16, 16);
    let region = rect_set(0, 0, 3, 3);
    let written = stripe_pass(&mut target, &region, &transform(0, 0, 4.0), &style(pattern));
    assert_eq!(written, 0);
    assert_eq!(target, white(16, 16));
}

#[test]
fn test_outline_drawn_last_and_widened() {
    let region = rect_set(0, 0, 2, 2);
    let outline = boundary(&region);
    assert_eq!(outline.len(), 8);

    let pattern = PatternSettings {
        stripe_width: 1,
        stripe_spacing: 2,
        dash_on_length: 1,
        dash_off_length: 0,
    };
    let mut target = white(14, 14);
    let stats = composite(&mut target, &region, &outline, &transform(0, 0, 4.0), &style(pattern));

    assert_eq!(stats.filled, 144);
    assert_eq!(stats.striped, 72);

    // Only the middle of the center block escapes the widened outline
    for y in 0..14u32 {
        for x in 0..14u32 {
            let color = target.get(x, y);
            if (5..7).contains(&x) && (5..7).contains(&y) {
                let expected = if (x + y) % 2 < 1 { STRIPE } else { FILL };
                assert_eq!(color, expected, "pixel ({}, {})", x, y);
            } else if x < 13 && y < 13 {
                assert_eq!(color, OUTLINE, "pixel ({}, {})", x, y);
            } else {
                assert_eq!(color, Color::WHITE, "pixel ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_dash_pattern_runs_along_boundary() {
    let pattern = PatternSettings {
        stripe_width: 0,
        stripe_spacing: 0,
        dash_on_length: 4,
        dash_off_length: 3,
    };
    let row = rect_set(0, 0, 9, 0);
    let outline = boundary(&row);
    assert_eq!(outline.len(), 10);

    let mut target = white(48, 16);
    let stats = composite(&mut target, &row, &outline, &transform(0, 4, 4.0), &style(pattern));

    assert_eq!(stats.striped, 0);
    // Seven dashes of 6x6, the first clipped to 5 columns
    assert_eq!(stats.outlined, 30 + 6 * 36);
    for index in 0..10u32 {
        let expected = if index % 7 < 4 { OUTLINE } else { FILL };
        assert_eq!(target.get(index * 4 + 2, 6), expected, "boundary pixel {}", index);
    }
}

#[test]
fn test_writes_outside_target_are_clipped() {
    let mut target = white(4, 4);
    let region = set_of(&[(0, 0), (1, 1), (5, 5)]);
    let written = fill_pass(&mut target, &region, &transform(-3, -3, 2.0), FILL);

    assert_eq!(written, 1);
    assert_eq!(target.get(0, 0), FILL);
    assert_eq!(target.get(1, 1), Color::WHITE);
}

#[test]
fn test_later_region_wins() {
    let t = transform(0, 0, 2.0);
    let flat = PatternSettings {
        stripe_width: 0,
        stripe_spacing: 0,
        dash_on_length: 0,
        dash_off_length: 0,
    };
    let red = StyleSpec::new(Color::new(200, 0, 0), STRIPE, OUTLINE).with_pattern(flat);
    let blue = StyleSpec::new(Color::new(0, 0, 200), STRIPE, OUTLINE).with_pattern(flat);

    let a = rect_set(0, 0, 2, 2);
    let b = rect_set(2, 2, 4, 4);
    let mut target = white(10, 10);
    composite(&mut target, &a, &boundary(&a), &t, &red);
    composite(&mut target, &b, &boundary(&b), &t, &blue);

    assert_eq!(target.get(1, 1), Color::new(200, 0, 0));
    assert_eq!(target.get(4, 4), Color::new(0, 0, 200));
    assert_eq!(target.get(5, 5), Color::new(0, 0, 200));
}

#[test]
fn test_empty_region_changes_nothing() {
    let mut target = white(8, 8);
    let stats = composite(
        &mut target,
        &PixelSet::new(),
        &BoundarySet::default(),
        &transform(0, 0, 2.0),
        &style(PatternSettings::default()),
    );
    assert_eq!(stats, CompositeStats::default());
    assert_eq!(target, white(8, 8));
}
