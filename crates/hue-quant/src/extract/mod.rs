//! Palette extraction by k-means clustering
//!
//! [`extract`] reduces pixel samples to at most `k` representative colors
//! with their dominance shares. Clustering runs in RGB with squared
//! Euclidean distance, k-means++ seeding, farthest-point reseeding of empty
//! clusters and a fixed number of seeded restarts.
//!
//! # Example
//!
//! ```
//! use hue_quant::{extract, ExtractOptions, Rgb};
//!
//! let samples: Vec<Rgb> = (0..100u8)
//!     .map(|i| if i < 70 { Rgb::new(240, 240, 240) } else { Rgb::new(20, 20, 20) })
//!     .collect();
//!
//! let palette = extract(&samples, &ExtractOptions::new().k(2)).unwrap();
//! assert_eq!(palette.len(), 2);
//! assert!(palette[0].share >= palette[1].share);
//! ```

mod extractor;
mod histogram;
mod kmeans;
mod options;
mod result;
mod seeding;

pub use extractor::{extract, PaletteExtractor};
pub use options::{
    ExtractOptions, DEFAULT_K, DEFAULT_MAX_ITERATIONS, DEFAULT_RESTARTS, DEFAULT_SEED,
};
pub use result::{Cluster, PaletteEntry, PaletteResult};
