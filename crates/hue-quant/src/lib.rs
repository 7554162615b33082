//! hue-quant: dominant colors and their names
//!
//! This library reduces the pixels of an image to a handful of
//! representative colors and names each of them after the closest entry of
//! a reference palette.
//!
//! # Quick Start
//!
//! ```
//! use hue_quant::{extract, resolve_palette, ExtractOptions, ReferenceColorTable, Rgb};
//!
//! // Pixels as decoded by the caller, already in RGB order
//! let mut pixels = vec![Rgb::new(250, 128, 114); 60];
//! pixels.extend(vec![Rgb::new(0, 0, 130); 40]);
//!
//! let palette = extract(&pixels, &ExtractOptions::new().k(2)).unwrap();
//! let named = resolve_palette(&palette, ReferenceColorTable::css3()).unwrap();
//!
//! assert_eq!(named[0].name.name(), "salmon");
//! assert_eq!(named[1].name.name(), "navy");
//! assert_eq!(named[0].entry.share, 60.0);
//! ```
//!
//! # Components
//!
//! | Component | Entry point | Depends on |
//! |-----------|-------------|------------|
//! | Palette extractor | [`extract()`], [`PaletteExtractor`] | nothing |
//! | Named-color resolver | [`resolve()`], [`resolve_palette()`] | a [`ColorTable`] |
//! | Reference table | [`ReferenceColorTable::css3()`] | built-in dataset |
//!
//! The two components are independent. The caller runs the extractor first
//! and then resolves each returned centroid.
//!
//! # Determinism
//!
//! Extraction is a pure function of the samples and [`ExtractOptions`]:
//! the same input with the same seed always yields the same palette in the
//! same order, whatever the number of threads. Only the nearest-centroid
//! search is spread across threads (via rayon); every reduction runs in a
//! fixed order.
//!
//! # Distance
//!
//! Both components use plain squared Euclidean distance over the 8-bit RGB
//! channels. There is no perceptual color space involved.
//!
//! # Errors
//!
//! Failures are reported as [`QuantError`]: bad arguments
//! ([`QuantError::InvalidArgument`]), an unusable reference table
//! ([`QuantError::Configuration`]) and a degenerate clustering state
//! ([`QuantError::NumericInstability`]). No function returns a placeholder
//! name in place of an error.

pub mod color;
pub mod error;
pub mod extract;
pub mod names;


pub use color::{PixelSample, Rgb};
pub use error::QuantError;
pub use extract::{
    extract, Cluster, ExtractOptions, PaletteEntry, PaletteExtractor, PaletteResult,
};
pub use names::{
    resolve, resolve_nearest, resolve_palette, ColorTable, NamedColor, NamedPaletteEntry,
    ParseColorError, ReferenceColorTable, ResolvedName, TableError,
};
