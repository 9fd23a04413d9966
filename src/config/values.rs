//! Typed accessors for TOML values

use toml::Value;

use crate::coordinate::Coordinate;
use crate::errors::{KitError, KitResult};
use crate::raster::Color;

fn config_error(what: &str, expected: &str, value: &Value) -> KitError {
    KitError::ConfigError(format!("'{}' must be {}, got {}", what, expected, value))
}

pub fn as_string(value: &Value, what: &str) -> KitResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| config_error(what, "a string", value))
}

pub fn as_u32(value: &Value, what: &str) -> KitResult<u32> {
    value
        .as_integer()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| config_error(what, "a non-negative integer", value))
}

pub fn as_u8(value: &Value, what: &str) -> KitResult<u8> {
    value
        .as_integer()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| config_error(what, "an integer between 0 and 255", value))
}

/// Integers are accepted wherever a float is expected
pub fn as_f64(value: &Value, what: &str) -> KitResult<f64> {
    match value {
        Value::Float(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        _ => Err(config_error(what, "a number", value)),
    }
}

/// `[x, y]`
pub fn as_coordinate(value: &Value, what: &str) -> KitResult<Coordinate> {
    let items = value
        .as_array()
        .filter(|a| a.len() == 2)
        .ok_or_else(|| config_error(what, "an [x, y] pair", value))?;
    let x = items[0].as_integer().ok_or_else(|| config_error(what, "an [x, y] pair", value))?;
    let y = items[1].as_integer().ok_or_else(|| config_error(what, "an [x, y] pair", value))?;
    Ok(Coordinate::new(x, y))
}

/// `"r,g,b"`, `"#rrggbb"` or `[r, g, b]`
pub fn as_color(value: &Value, what: &str) -> KitResult<Color> {
    match value {
        Value::String(s) => Color::parse(s)
            .map_err(|e| KitError::ConfigError(format!("'{}': {}", what, e))),
        Value::Array(items) if items.len() == 3 => {
            let r = as_u8(&items[0], what)?;
            let g = as_u8(&items[1], what)?;
            let b = as_u8(&items[2], what)?;
            Ok(Color::new(r, g, b))
        }
        _ => Err(config_error(what, "a color", value)),
    }
}
