//! Integration tests for the overlay workflow

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use regionkit::region::{ColorBand, ScanGrid};
use regionkit::{Color, KitError, RegionKit};
use regionkit::utils::logger::Logger;

/// 30x20 source with two gray districts split by a black border
fn write_source(dir: &Path) {
    let mut img = RgbImage::from_pixel(30, 20, Rgb([255, 255, 255]));
    for y in 0..20 {
        for x in 0..30 {
            let color = if x == 0 || y == 0 || x == 29 || y == 19 || x == 15 {
                Rgb([0, 0, 0])
            } else if x < 15 {
                Rgb([150, 150, 150])
            } else {
                Rgb([180, 180, 180])
            };
            img.put_pixel(x, y, color);
        }
    }
    img.save(dir.join("source.png")).unwrap();
}

fn write_target(dir: &Path) {
    RgbImage::from_pixel(80, 60, Rgb([250, 245, 235]))
        .save(dir.join("target.png"))
        .unwrap();
}

const JOB: &str = r#"
source = "source.png"
target = "target.png"
output = "overlay.png"

[transform]
origin = [10, 5]
scale = 2

[[region]]
name = "West"
seed = [5, 5]
preset = "teal"
stripe_width = 0
dash_on = 0
dash_off = 0

[[region]]
name = "East"
seeds = [[20, 5], [25, 15]]
fill = "220,120,50"
stripe = "170,85,30"
boundary = "160,80,30"
"#;

fn pixel(img: &RgbImage, x: u32, y: u32) -> Color {
    Color::from(*img.get_pixel(x, y))
}

#[test]
fn test_overlay_job_from_config_file() {
    let dir = TempDir::new().unwrap();
    write_source(dir.path());
    write_target(dir.path());
    let config_path = dir.path().join("job.toml");
    fs::write(&config_path, JOB).unwrap();

    let record = dir.path().join("record.log");
    let kit = RegionKit::new(Some(record.as_path())).unwrap();
    let outcome = kit.overlay(&config_path, None).unwrap();

    assert_eq!(outcome.output, dir.path().join("overlay.png"));
    assert_eq!(outcome.regions.len(), 2);
    assert_eq!(outcome.regions[0].name, "West");
    assert_eq!(outcome.regions[0].pixels, 14 * 18);
    assert_eq!(outcome.regions[0].stats.striped, 0);
    assert_eq!(outcome.regions[0].stats.outlined, 0);
    assert_eq!(outcome.regions[1].pixels, 13 * 18);

    let out = image::open(&outcome.output).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (80, 60));
    // Source (1, 1) maps to target (12, 7); (3, 3) is clear of stripes and outline
    assert_eq!(pixel(&out, 16, 11), Color::new(0, 190, 180));
    // The border column x = 15 maps to target x = 40..42
    assert_eq!(pixel(&out, 40, 20), Color::new(250, 245, 235));
    // Outside the mapped source
    assert_eq!(pixel(&out, 2, 2), Color::new(250, 245, 235));

    let log = fs::read_to_string(&record).unwrap();
    assert!(log.contains("West"));
    assert!(log.contains("East"));
    assert!(log.contains("overlay.png"));
}

#[test]
fn test_output_override_and_bad_seed() {
    let dir = TempDir::new().unwrap();
    write_source(dir.path());
    write_target(dir.path());
    let config_path = dir.path().join("job.toml");
    let override_path = dir.path().join("elsewhere.png");

    fs::write(&config_path, JOB).unwrap();
    let kit = RegionKit::new(None).unwrap();
    let outcome = kit.overlay(&config_path, Some(override_path.as_path())).unwrap();
    assert_eq!(outcome.output, override_path);
    assert!(override_path.exists());

    fs::write(&config_path, JOB.replace("seed = [5, 5]", "seed = [15, 5]")).unwrap();
    let err = kit.overlay(&config_path, None).unwrap_err();
    assert!(matches!(err, KitError::InvalidSeed { x: 15, y: 5, .. }));
    assert!(!dir.path().join("overlay.png").exists());
}

#[test]
fn test_missing_source_is_decode_error() {
    let dir = TempDir::new().unwrap();
    write_target(dir.path());
    let config_path = dir.path().join("job.toml");
    fs::write(&config_path, JOB).unwrap();

    let err = RegionKit::new(None).unwrap().overlay(&config_path, None).unwrap_err();
    assert!(matches!(err, KitError::DecodeError { .. }));
}

#[test]
fn test_discover_census_and_compare() {
    let dir = TempDir::new().unwrap();
    write_source(dir.path());
    let source = dir.path().join("source.png");
    let kit = RegionKit::new(None).unwrap();

    let grid = ScanGrid { min_size: 50, ..ScanGrid::default() };
    let regions = kit.discover(&source, &grid, ColorBand::default()).unwrap();
    assert_eq!(regions.len(), 2);
    assert!(regions[0].center.x < 15);
    assert!(regions[1].center.x > 15);

    let census = kit.census(&source).unwrap();
    assert_eq!(census.len(), 2);
    assert_eq!(census.count(&Color::new(150, 150, 150)), 14 * 18);

    let recolored = dir.path().join("recolored.png");
    let (gray, replaced) = kit
        .recolor_dominant_gray(&source, &recolored, Color::new(0, 190, 180))
        .unwrap();
    assert_eq!(gray, Color::new(150, 150, 150));
    assert_eq!(replaced, 14 * 18);

    let comparison = kit.compare(&source, &recolored).unwrap();
    assert_eq!(comparison.common, vec![Color::new(180, 180, 180)]);
    assert_eq!(comparison.only_old, vec![Color::new(150, 150, 150)]);
    assert_eq!(comparison.only_new, vec![Color::new(0, 190, 180)]);
    assert_eq!(comparison.preservation_rate(), 50.0);
    assert!(!comparison.looks_antialiased());
}

#[test]
fn test_logger_records_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ops.log");
    let logger = Logger::new(&path).unwrap();
    logger.log("first").unwrap();
    logger.log("second").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    assert!(Logger::disabled().log("dropped").is_ok());
}
