//! Palette extraction entry points.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::histogram::weighted_points;
use super::kmeans::{self, KMeansRun};
use super::options::ExtractOptions;
use super::result::{Cluster, PaletteResult};
use crate::color::{PixelSample, Rgb};
use crate::error::QuantError;

/// Extract a palette of at most `options.k` representative colors.
///
/// Runs k-means `options.restarts` times with seeds `seed, seed + 1, ...`
/// and keeps the run with the lowest inertia (the first one on ties). The
/// result is fully determined by `samples` and `options`.
///
/// When the samples hold fewer distinct colors than `k`, `k` is capped at
/// that count and a warning is logged; the result then has fewer entries
/// and [`PaletteResult::effective_k`] tells by how much.
///
/// No downscaling happens here. Callers with large images should subsample
/// before calling.
///
/// # Errors
///
/// Returns [`QuantError::InvalidArgument`] if `samples` is empty or if
/// `k` or `restarts` is zero.
///
/// # Example
///
/// ```
/// use hue_quant::{extract, ExtractOptions, Rgb};
///
/// let mut samples = vec![Rgb::new(250, 10, 10); 30];
/// samples.extend(vec![Rgb::new(10, 10, 250); 10]);
///
/// let palette = extract(&samples, &ExtractOptions::new().k(2)).unwrap();
/// assert_eq!(palette[0].cluster.centroid, Rgb::new(250, 10, 10));
/// assert_eq!(palette[0].share, 75.0);
/// assert_eq!(palette[1].cluster.count, 10);
/// ```
pub fn extract(samples: &[PixelSample], options: &ExtractOptions) -> Result<PaletteResult, QuantError> {
    options.validate()?;
    if samples.is_empty() {
        return Err(QuantError::invalid_argument("no pixel samples to cluster"));
    }

    let points = weighted_points(samples);
    let k = options.k.min(points.len());
    if k < options.k {
        tracing::warn!(
            requested = options.k,
            distinct_colors = points.len(),
            "Fewer distinct colors than requested clusters, reducing k"
        );
    }

    let mut best: Option<(usize, KMeansRun)> = None;
    for restart in 0..options.restarts {
        let seed = options.seed.wrapping_add(restart as u64);
        let mut rng = StdRng::seed_from_u64(seed);
        let run = kmeans::run(&points, k, options.max_iterations, &mut rng)?;

        tracing::debug!(
            restart,
            seed,
            inertia = run.inertia,
            iterations = run.iterations,
            reseeds = run.reseeds,
            "k-means run finished"
        );

        let better = best
            .as_ref()
            .map_or(true, |(_, current)| run.inertia < current.inertia);
        if better {
            best = Some((restart, run));
        }
    }

    let (restart, run) = best
        .ok_or_else(|| QuantError::invalid_argument("restarts must be at least 1"))?;

    let clusters = run
        .centroids
        .iter()
        .zip(run.cluster_weights(&points))
        .map(|(&centroid, weight)| Cluster {
            centroid: Rgb::from_f64(centroid),
            count: weight as usize,
        })
        .collect();

    tracing::debug!(
        restart,
        inertia = run.inertia,
        samples = samples.len(),
        distinct_colors = points.len(),
        k,
        "Selected best k-means run"
    );

    Ok(PaletteResult::assemble(
        clusters,
        run.inertia,
        options.k,
        k,
        run.iterations,
    ))
}

/// Reusable palette extractor.
///
/// Wraps [`ExtractOptions`] behind a builder so one configured extractor
/// can be applied to many images.
///
/// # Example
///
/// ```
/// use hue_quant::{PaletteExtractor, Rgb};
///
/// let extractor = PaletteExtractor::new(3).seed(7).restarts(4);
///
/// let samples = vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
/// let palette = extractor.extract(&samples).unwrap();
/// assert_eq!(palette.effective_k(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaletteExtractor {
    options: ExtractOptions,
}

impl PaletteExtractor {
    /// Create an extractor for `k` colors with default budget and seed.
    pub fn new(k: usize) -> Self {
        Self {
            options: ExtractOptions::new().k(k),
        }
    }

    /// Create an extractor from complete options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Set the initialization seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.options = self.options.seed(seed);
        self
    }

    /// Set the per-run iteration cap.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.options = self.options.max_iterations(max_iterations);
        self
    }

    /// Set the number of restarts.
    #[inline]
    pub fn restarts(mut self, restarts: usize) -> Self {
        self.options = self.options.restarts(restarts);
        self
    }

    /// The options this extractor runs with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract a palette from `samples`. See [`extract`].
    pub fn extract(&self, samples: &[PixelSample]) -> Result<PaletteResult, QuantError> {
        extract(samples, &self.options)
    }
}
