//! Color type shared by the extractor and the resolver
//!
//! Everything in this crate works on 8-bit sRGB triples without any
//! color-space conversion: distances are plain squared Euclidean distances
//! in RGB.
//!
//! # Example
//!
//! ```
//! use hue_quant::Rgb;
//!
//! let sample = Rgb::new(200, 10, 10);
//! let red: Rgb = "#ff0000".parse().unwrap();
//! assert_eq!(sample.distance_squared(red), 3225);
//! ```

mod rgb;

pub use rgb::Rgb;

/// A single observed pixel color fed to the extractor.
pub type PixelSample = Rgb;
