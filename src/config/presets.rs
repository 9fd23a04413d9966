//! Built-in style presets
//!
//! Presets come from the bundled `styles.toml`, parsed once on first use.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::warn;
use toml::Value;

use super::values::{as_color, as_u32};
use crate::errors::{KitError, KitResult};
use crate::overlay::{PatternSettings, StyleSpec};
use crate::raster::Color;

lazy_static! {
    static ref BUILTIN_PRESETS: StylePresets = {
        let content = include_str!("../../styles.toml");
        StylePresets::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in styles: {}", e);
            StylePresets::default()
        })
    };
}

/// The presets bundled with the crate
pub fn builtin_presets() -> &'static StylePresets {
    &BUILTIN_PRESETS
}

/// Fill, stripe and outline colors of a named style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fill: Color,
    pub stripe: Color,
    pub boundary: Color,
}

/// Named palettes plus the default stripe and dash geometry
#[derive(Debug, Clone, Default)]
pub struct StylePresets {
    pub defaults: PatternSettings,
    pub palettes: HashMap<String, Palette>,
}

impl StylePresets {
    /// Parse presets from a TOML string
    pub fn from_str(content: &str) -> KitResult<Self> {
        let toml_value: Value = toml::from_str(content)?;

        let defaults = match toml_value.get("defaults") {
            Some(table) => read_pattern(table, PatternSettings::default(), "defaults")?,
            None => PatternSettings::default(),
        };
        defaults.validate()?;

        let mut palettes = HashMap::new();
        if let Some(table) = toml_value.get("presets").and_then(|v| v.as_table()) {
            for (name, entry) in table {
                palettes.insert(name.clone(), read_palette(entry, name)?);
            }
        }

        Ok(StylePresets { defaults, palettes })
    }

    /// Look up a palette by name
    pub fn palette(&self, name: &str) -> KitResult<Palette> {
        self.palettes.get(name).copied().ok_or_else(|| {
            let mut known: Vec<&str> = self.palettes.keys().map(String::as_str).collect();
            known.sort_unstable();
            KitError::ConfigError(format!(
                "Unknown style preset '{}' (known: {})",
                name,
                known.join(", ")
            ))
        })
    }

    /// Full style for a named palette with the default geometry
    pub fn style(&self, name: &str) -> KitResult<StyleSpec> {
        let palette = self.palette(name)?;
        Ok(StyleSpec::new(palette.fill, palette.stripe, palette.boundary).with_pattern(self.defaults))
    }
}

fn read_palette(entry: &Value, name: &str) -> KitResult<Palette> {
    let color = |key: &str| -> KitResult<Color> {
        let what = format!("presets.{}.{}", name, key);
        let value = entry
            .get(key)
            .ok_or_else(|| KitError::ConfigError(format!("Missing '{}'", what)))?;
        as_color(value, &what)
    };
    Ok(Palette {
        fill: color("fill")?,
        stripe: color("stripe")?,
        boundary: color("boundary")?,
    })
}

/// Override `base` with whichever pattern keys `table` sets
pub(crate) fn read_pattern(table: &Value, base: PatternSettings, context: &str) -> KitResult<PatternSettings> {
    let mut pattern = base;
    let field = |key: &str| -> KitResult<Option<u32>> {
        table
            .get(key)
            .map(|v| as_u32(v, &format!("{}.{}", context, key)))
            .transpose()
    };
    if let Some(v) = field("stripe_width")? {
        pattern.stripe_width = v;
    }
    if let Some(v) = field("stripe_spacing")? {
        pattern.stripe_spacing = v;
    }
    if let Some(v) = field("dash_on")? {
        pattern.dash_on_length = v;
    }
    if let Some(v) = field("dash_off")? {
        pattern.dash_off_length = v;
    }
    Ok(pattern)
}
