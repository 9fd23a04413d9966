//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and image I/O helpers
//! used throughout the application.

pub mod logger;
pub mod image_utils;
pub(crate) mod progress;
