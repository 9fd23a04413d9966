//! Overlay job description
//!
//! Example:
//!
//! ```toml
//! source = "madras.png"
//! target = "princely-states.png"
//! output = "overlay.png"
//!
//! [transform]
//! origin = [2576, 3694]
//! scale = 3.2
//!
//! [[region]]
//! name = "Arcot"
//! seeds = [[330, 534], [318, 573]]
//! preset = "teal"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use toml::Value;

use super::presets::{builtin_presets, read_pattern, Palette};
use super::values::{as_color, as_coordinate, as_f64, as_string, as_u8};
use crate::coordinate::{Coordinate, OverlayTransform};
use crate::errors::{KitError, KitResult};
use crate::overlay::{PatternSettings, StyleSpec};
use crate::raster::Color;
use crate::region::ColorBand;

/// One named region of an overlay job
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSpec {
    pub name: String,
    /// Every seed is segmented separately; the results are merged
    pub seeds: Vec<Coordinate>,
    pub style: StyleSpec,
}

/// A complete overlay job
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Raster the districts are segmented from
    pub source: PathBuf,
    /// Raster the overlay is drawn onto
    pub target: PathBuf,
    /// Where the composited target is written
    pub output: PathBuf,
    pub transform: OverlayTransform,
    pub band: ColorBand,
    /// Composited in this order; later regions win on overlap
    pub regions: Vec<RegionSpec>,
}

impl OverlayConfig {
    /// Load a job from a TOML file
    ///
    /// Relative paths inside the file resolve against its directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> KitResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        info!("Loading overlay configuration from {}", path.display());
        Self::from_str(&content, base_dir)
    }

    /// Parse a job from a TOML string
    pub fn from_str(content: &str, base_dir: &Path) -> KitResult<Self> {
        let toml_value: Value = toml::from_str(content)?;

        let path = |key: &str| -> KitResult<PathBuf> {
            let value = required(&toml_value, key, "")?;
            Ok(base_dir.join(as_string(value, key)?))
        };
        let source = path("source")?;
        let target = path("target")?;
        let output = path("output")?;

        let transform_table = required(&toml_value, "transform", "")?;
        let origin = as_coordinate(required(transform_table, "origin", "transform")?, "transform.origin")?;
        let scale = as_f64(required(transform_table, "scale", "transform")?, "transform.scale")?;
        let transform = OverlayTransform::new(origin, scale)?;

        let mut band = ColorBand::default();
        if let Some(thresholds) = toml_value.get("thresholds") {
            if let Some(v) = thresholds.get("boundary_below") {
                band.boundary_below = as_u8(v, "thresholds.boundary_below")?;
            }
            if let Some(v) = thresholds.get("background_above") {
                band.background_above = as_u8(v, "thresholds.background_above")?;
            }
        }
        if band.boundary_below > band.background_above {
            return Err(KitError::ConfigError(format!(
                "thresholds.boundary_below ({}) must not exceed thresholds.background_above ({})",
                band.boundary_below, band.background_above
            )));
        }

        let defaults = match toml_value.get("defaults") {
            Some(table) => read_pattern(table, builtin_presets().defaults, "defaults")?,
            None => builtin_presets().defaults,
        };

        let region_values = toml_value
            .get("region")
            .and_then(|v| v.as_array())
            .ok_or_else(|| KitError::ConfigError("At least one [[region]] is required".to_string()))?;
        let regions = region_values
            .iter()
            .enumerate()
            .map(|(i, v)| parse_region(v, i, defaults))
            .collect::<KitResult<Vec<_>>>()?;
        if regions.is_empty() {
            return Err(KitError::ConfigError("At least one [[region]] is required".to_string()));
        }

        debug!("Parsed {} regions", regions.len());
        Ok(OverlayConfig {
            source,
            target,
            output,
            transform,
            band,
            regions,
        })
    }
}

fn required<'v>(table: &'v Value, key: &str, context: &str) -> KitResult<&'v Value> {
    table.get(key).ok_or_else(|| {
        if context.is_empty() {
            KitError::ConfigError(format!("Missing '{}'", key))
        } else {
            KitError::ConfigError(format!("Missing '{}.{}'", context, key))
        }
    })
}

fn parse_region(value: &Value, index: usize, defaults: PatternSettings) -> KitResult<RegionSpec> {
    let name = match value.get("name") {
        Some(v) => as_string(v, "region.name")?,
        None => format!("region {}", index + 1),
    };
    let context = format!("region '{}'", name);

    let mut seeds = Vec::new();
    if let Some(v) = value.get("seed") {
        seeds.push(as_coordinate(v, &format!("{}.seed", context))?);
    }
    if let Some(v) = value.get("seeds") {
        let items = v
            .as_array()
            .ok_or_else(|| KitError::ConfigError(format!("{}.seeds must be a list of [x, y] pairs", context)))?;
        for item in items {
            seeds.push(as_coordinate(item, &format!("{}.seeds", context))?);
        }
    }
    if seeds.is_empty() {
        return Err(KitError::ConfigError(format!("{} has no seeds", context)));
    }

    let preset = match value.get("preset") {
        Some(v) => Some(builtin_presets().palette(&as_string(v, &format!("{}.preset", context))?)?),
        None => None,
    };
    let color = |key: &str, from_preset: Option<Palette>, pick: fn(&Palette) -> Color| {
        match value.get(key) {
            Some(v) => as_color(v, &format!("{}.{}", context, key)),
            None => from_preset.as_ref().map(pick).ok_or_else(|| {
                KitError::ConfigError(format!("{} needs '{}' or a preset", context, key))
            }),
        }
    };
    let fill = color("fill", preset, |p| p.fill)?;
    let stripe = color("stripe", preset, |p| p.stripe)?;
    let boundary = color("boundary", preset, |p| p.boundary)?;

    let pattern = read_pattern(value, defaults, &context)?;
    pattern.validate()?;

    Ok(RegionSpec {
        name,
        seeds,
        style: StyleSpec::new(fill, stripe, boundary).with_pattern(pattern),
    })
}
