//! Overlay job configuration
//!
//! Jobs are written in TOML and walked by hand into typed structs. Style
//! presets and default stripe/dash settings ship with the crate in
//! `styles.toml`.

mod overlay_config;
mod presets;
mod values;

pub use overlay_config::{OverlayConfig, RegionSpec};
pub use presets::{builtin_presets, StylePresets, Palette};
