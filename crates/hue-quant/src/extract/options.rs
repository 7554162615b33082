//! Extraction options and configuration.
//!
//! This module provides the [`ExtractOptions`] struct controlling the
//! k-means run budget and its seed.

use crate::error::QuantError;

/// Default number of palette colors.
pub const DEFAULT_K: usize = 5;
/// Default seed; the same seed and input always give the same palette.
pub const DEFAULT_SEED: u64 = 42;
/// Default cap on update steps per k-means run.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;
/// Default number of independently seeded k-means runs.
pub const DEFAULT_RESTARTS: usize = 10;

/// Configuration options for palette extraction.
///
/// # Defaults
///
/// - `k`: 5 colors
/// - `seed`: 42
/// - `max_iterations`: 300 update steps per run
/// - `restarts`: 10 runs, the tightest one is kept
///
/// # Example
///
/// ```
/// use hue_quant::ExtractOptions;
///
/// let options = ExtractOptions::new()
///     .k(8)
///     .restarts(3);
/// assert_eq!(options.k, 8);
/// assert_eq!(options.seed, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Number of clusters to extract.
    ///
    /// Capped at the number of distinct sample colors. Must be at least 1.
    ///
    /// Default: `5`
    pub k: usize,

    /// Seed for the k-means++ initialization.
    ///
    /// Restart `r` uses `seed + r` (wrapping).
    ///
    /// Default: `42`
    pub seed: u64,

    /// Maximum number of centroid update steps per run.
    ///
    /// A run also stops as soon as no sample changes cluster.
    ///
    /// Default: `300`
    pub max_iterations: usize,

    /// Number of independently seeded runs. Must be at least 1.
    ///
    /// Default: `10`
    pub restarts: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            seed: DEFAULT_SEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
        }
    }
}

impl ExtractOptions {
    /// Create new extraction options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of clusters.
    #[inline]
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the initialization seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-run iteration cap.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the number of restarts.
    #[inline]
    pub fn restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Check the options without running anything.
    ///
    /// # Errors
    ///
    /// Returns [`QuantError::InvalidArgument`] if `k` or `restarts` is zero.
    pub fn validate(&self) -> Result<(), QuantError> {
        if self.k == 0 {
            return Err(QuantError::invalid_argument("k must be at least 1"));
        }
        if self.restarts == 0 {
            return Err(QuantError::invalid_argument("restarts must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.k, 5);
        assert_eq!(opts.seed, 42);
        assert_eq!(opts.max_iterations, 300);
        assert_eq!(opts.restarts, 10);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ExtractOptions::new(), ExtractOptions::default());
    }

    #[test]
    fn test_builder_chaining() {
        let opts = ExtractOptions::new()
            .k(3)
            .seed(7)
            .max_iterations(20)
            .restarts(2);
        assert_eq!(opts.k, 3);
        assert_eq!(opts.seed, 7);
        assert_eq!(opts.max_iterations, 20);
        assert_eq!(opts.restarts, 2);
    }

    #[test]
    fn test_validate() {
        assert!(ExtractOptions::new().validate().is_ok());
        assert!(ExtractOptions::new().max_iterations(0).validate().is_ok());
        assert!(matches!(
            ExtractOptions::new().k(0).validate(),
            Err(QuantError::InvalidArgument(_))
        ));
        assert!(matches!(
            ExtractOptions::new().restarts(0).validate(),
            Err(QuantError::InvalidArgument(_))
        ));
    }
}
