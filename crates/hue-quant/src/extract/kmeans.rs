//! One seeded Lloyd k-means run over weighted points.
//!
//! Each iteration assigns every point to its nearest centroid (lowest index
//! on ties) and then moves every centroid to the weighted mean of its
//! members. The run stops when an assignment pass changes nothing or after
//! `max_iterations` update steps. It always ends on an assignment pass, so
//! the returned assignments belong to the returned centroids.

use rand::Rng;
use rayon::prelude::*;

use super::histogram::WeightedPoint;
use super::seeding;
use crate::error::QuantError;

/// Below this many distinct colors the assignment pass stays on one thread.
const PARALLEL_MIN_POINTS: usize = 4096;

/// Squared Euclidean distance between two RGB points.
#[inline]
pub(crate) fn squared_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

/// Index and squared distance of the centroid closest to `color`.
#[inline]
fn nearest_centroid(color: [f64; 3], centroids: &[[f64; 3]]) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &c) in centroids.iter().enumerate() {
        let dist = squared_distance(color, c);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }
    (best_idx, best_dist)
}

/// Final state of one k-means run.
#[derive(Debug, Clone)]
pub(crate) struct KMeansRun {
    /// Unrounded centroids
    pub centroids: Vec<[f64; 3]>,
    /// Cluster index per weighted point
    pub assignments: Vec<usize>,
    /// Weighted sum of squared distances to the assigned centroid
    pub inertia: f64,
    /// Update steps performed
    pub iterations: usize,
    /// Empty clusters reseeded during the run
    pub reseeds: usize,
}

impl KMeansRun {
    /// Total sample weight per cluster.
    pub fn cluster_weights(&self, points: &[WeightedPoint]) -> Vec<u64> {
        let mut weights = vec![0u64; self.centroids.len()];
        for (p, &a) in points.iter().zip(&self.assignments) {
            weights[a] += p.weight;
        }
        weights
    }
}

/// Run k-means once. Requires `1 <= k <= points.len()`.
pub(crate) fn run<R: Rng>(
    points: &[WeightedPoint],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> Result<KMeansRun, QuantError> {
    let mut centroids = seeding::plus_plus(points, k, rng);
    let mut assignments = vec![usize::MAX; points.len()];
    let mut iterations = 0;
    let mut reseeds = 0;

    loop {
        let (changed, inertia) = assign(points, &centroids, &mut assignments);
        if !changed || iterations >= max_iterations {
            return Ok(KMeansRun {
                centroids,
                assignments,
                inertia,
                iterations,
                reseeds,
            });
        }
        reseeds += update(points, &assignments, &mut centroids)?;
        iterations += 1;
    }
}

/// Assignment pass. Returns whether any point moved, and the inertia.
///
/// Nearest centroids may be computed in parallel; the inertia is summed in
/// point order so the result does not depend on thread scheduling.
fn assign(points: &[WeightedPoint], centroids: &[[f64; 3]], assignments: &mut [usize]) -> (bool, f64) {
    let nearest: Vec<(usize, f64)> = if points.len() >= PARALLEL_MIN_POINTS {
        points
            .par_iter()
            .map(|p| nearest_centroid(p.color, centroids))
            .collect()
    } else {
        points
            .iter()
            .map(|p| nearest_centroid(p.color, centroids))
            .collect()
    };

    let mut changed = false;
    let mut inertia = 0.0;
    for ((slot, (idx, dist)), p) in assignments.iter_mut().zip(nearest).zip(points) {
        if *slot != idx {
            *slot = idx;
            changed = true;
        }
        inertia += dist * p.weight as f64;
    }
    (changed, inertia)
}

/// Update pass: move centroids to their members' weighted mean.
///
/// Returns how many empty clusters had to be reseeded.
fn update(
    points: &[WeightedPoint],
    assignments: &[usize],
    centroids: &mut [[f64; 3]],
) -> Result<usize, QuantError> {
    let k = centroids.len();
    let mut sums = vec![[0.0f64; 3]; k];
    let mut weights = vec![0u64; k];

    for (p, &a) in points.iter().zip(assignments) {
        let w = p.weight as f64;
        sums[a][0] += p.color[0] * w;
        sums[a][1] += p.color[1] * w;
        sums[a][2] += p.color[2] * w;
        weights[a] += p.weight;
    }

    let mut empty = Vec::new();
    for (j, centroid) in centroids.iter_mut().enumerate() {
        if weights[j] == 0 {
            empty.push(j);
            continue;
        }
        let w = weights[j] as f64;
        *centroid = [sums[j][0] / w, sums[j][1] / w, sums[j][2] / w];
    }

    if !empty.is_empty() {
        reseed_empty(points, centroids, &weights, &empty)?;
    }
    Ok(empty.len())
}

/// Move each empty centroid onto the point farthest from its nearest
/// surviving centroid. Reseeded centroids count as surviving for the next
/// empty one, so two empty clusters never land on the same point.
fn reseed_empty(
    points: &[WeightedPoint],
    centroids: &mut [[f64; 3]],
    weights: &[u64],
    empty: &[usize],
) -> Result<(), QuantError> {
    let mut surviving: Vec<[f64; 3]> = centroids
        .iter()
        .zip(weights)
        .filter(|(_, &w)| w > 0)
        .map(|(c, _)| *c)
        .collect();

    for &j in empty {
        let mut best_idx = None;
        let mut best_dist = 0.0;
        for (i, p) in points.iter().enumerate() {
            let (_, dist) = nearest_centroid(p.color, &surviving);
            if dist > best_dist {
                best_dist = dist;
                best_idx = Some(i);
            }
        }

        let idx = best_idx.ok_or_else(|| {
            QuantError::NumericInstability(format!(
                "cluster {j} is empty and every sample already sits on a centroid"
            ))
        })?;

        tracing::debug!(
            cluster = j,
            color = %points[idx].rgb,
            distance_squared = best_dist,
            "Reseeded empty cluster"
        );
        centroids[j] = points[idx].color;
        surviving.push(points[idx].color);
    }

    Ok(())
}
