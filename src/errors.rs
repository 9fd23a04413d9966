//! Custom error types for region extraction and overlay rendering

use std::fmt;
use std::io;

/// Errors raised by regionkit operations
#[derive(Debug)]
pub enum KitError {
    /// I/O error
    IoError(io::Error),
    /// The image codec could not read a raster
    DecodeError {
        path: String,
        source: image::ImageError,
    },
    /// The image codec could not write a raster
    EncodeError {
        path: String,
        source: image::ImageError,
    },
    /// A region seed landed on a boundary or background pixel
    InvalidSeed {
        region: String,
        x: i64,
        y: i64,
    },
    /// Malformed overlay configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for KitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitError::IoError(e) => write!(f, "I/O error: {}", e),
            KitError::DecodeError { path, source } => {
                write!(f, "Failed to decode image '{}': {}", path, source)
            }
            KitError::EncodeError { path, source } => {
                write!(f, "Failed to encode image '{}': {}", path, source)
            }
            KitError::InvalidSeed { region, x, y } => write!(
                f,
                "Seed ({}, {}) of region '{}' is not on a fillable pixel",
                x, y, region
            ),
            KitError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            KitError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for KitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KitError::IoError(e) => Some(e),
            KitError::DecodeError { source, .. } | KitError::EncodeError { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<io::Error> for KitError {
    fn from(error: io::Error) -> Self {
        KitError::IoError(error)
    }
}

impl From<toml::de::Error> for KitError {
    fn from(error: toml::de::Error) -> Self {
        KitError::ConfigError(format!("Failed to parse TOML: {}", error))
    }
}

impl From<String> for KitError {
    fn from(msg: String) -> Self {
        KitError::GenericError(msg)
    }
}

/// Result type for regionkit operations
pub type KitResult<T> = Result<T, KitError>;
