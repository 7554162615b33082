//! Chromaname - dominant color palettes with human-readable names
//!
//! Command-line shell around the `hue-quant` core: config loading, image
//! sampling and report rendering. This library exposes modules for
//! integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
