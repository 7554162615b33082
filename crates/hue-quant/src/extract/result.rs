//! Extraction output types.

use crate::color::Rgb;

/// A cluster of samples: its rounded centroid and member count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cluster {
    /// Mean color of the members, rounded and clamped to 0..=255
    pub centroid: Rgb,
    /// Number of samples assigned to this cluster
    pub count: usize,
}

/// A cluster and its dominance share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    /// The cluster
    pub cluster: Cluster,
    /// Percentage of all samples in this cluster (0..=100)
    pub share: f64,
}

/// The palette extracted from one set of samples.
///
/// Entries are sorted by descending share; equal shares keep the cluster
/// order of the winning run.
///
/// # Example
///
/// ```
/// use hue_quant::{extract, ExtractOptions, Rgb};
///
/// let samples = vec![Rgb::new(255, 0, 0); 3];
/// let palette = extract(&samples, &ExtractOptions::new().k(1)).unwrap();
///
/// assert_eq!(palette.len(), 1);
/// assert_eq!(palette[0].cluster.centroid, Rgb::new(255, 0, 0));
/// assert_eq!(palette[0].share, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteResult {
    entries: Vec<PaletteEntry>,
    total_samples: usize,
    inertia: f64,
    requested_k: usize,
    effective_k: usize,
    iterations: usize,
}

impl PaletteResult {
    /// Build a result from `(centroid, count)` pairs in cluster order.
    ///
    /// Empty clusters are dropped, the rest are stably sorted by count.
    pub(crate) fn assemble(
        clusters: Vec<Cluster>,
        inertia: f64,
        requested_k: usize,
        effective_k: usize,
        iterations: usize,
    ) -> Self {
        let total_samples: usize = clusters.iter().map(|c| c.count).sum();

        let mut clusters: Vec<Cluster> = clusters.into_iter().filter(|c| c.count > 0).collect();
        // stable: ties keep cluster order
        clusters.sort_by(|a, b| b.count.cmp(&a.count));

        let entries = clusters
            .into_iter()
            .map(|cluster| PaletteEntry {
                cluster,
                share: if total_samples == 0 {
                    0.0
                } else {
                    cluster.count as f64 / total_samples as f64 * 100.0
                },
            })
            .collect();

        Self {
            entries,
            total_samples,
            inertia,
            requested_k,
            effective_k,
            iterations,
        }
    }

    /// Entries, most dominant first.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Iterate over the entries, most dominant first.
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no colors.
    ///
    /// Never true for a result of a successful extraction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of samples the palette was computed from.
    #[inline]
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// Within-cluster sum of squared distances of the winning run.
    ///
    /// Measured against the unrounded centroids.
    #[inline]
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// The `k` the caller asked for.
    #[inline]
    pub fn requested_k(&self) -> usize {
        self.requested_k
    }

    /// The `k` actually clustered with, capped at the distinct color count.
    #[inline]
    pub fn effective_k(&self) -> usize {
        self.effective_k
    }

    /// Update steps performed by the winning run.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Centroid colors, most dominant first.
    pub fn colors(&self) -> Vec<Rgb> {
        self.entries.iter().map(|e| e.cluster.centroid).collect()
    }
}

impl std::ops::Index<usize> for PaletteResult {
    type Output = PaletteEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a PaletteResult {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(v: u8, count: usize) -> Cluster {
        Cluster {
            centroid: Rgb::new(v, v, v),
            count,
        }
    }

    #[test]
    fn test_assemble_sorts_stably_and_drops_empty() {
        let result = PaletteResult::assemble(
            vec![cluster(1, 2), cluster(2, 5), cluster(3, 0), cluster(4, 2), cluster(5, 1)],
            0.0,
            5,
            5,
            1,
        );
        let order: Vec<(u8, usize)> = result
            .iter()
            .map(|e| (e.cluster.centroid.r, e.cluster.count))
            .collect();
        assert_eq!(order, [(2, 5), (1, 2), (4, 2), (5, 1)]);
        assert_eq!(result.total_samples(), 10);
        assert_eq!(result.len(), 4);
        assert_eq!(result.effective_k(), 5);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let result = PaletteResult::assemble(
            vec![cluster(1, 1), cluster(2, 1), cluster(3, 1)],
            0.0,
            3,
            3,
            0,
        );
        let total: f64 = result.iter().map(|e| e.share).sum();
        assert!((total - 100.0).abs() < 1e-6);
        assert!((result[0].share - 100.0 / 3.0).abs() < 1e-9);
    }
}
