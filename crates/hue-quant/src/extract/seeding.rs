//! k-means++ initialization over weighted points.
//!
//! The first centroid is drawn with probability proportional to point
//! weight, every following one proportional to `weight * D²` where `D` is
//! the distance to the closest centroid chosen so far. Already chosen points
//! have `D = 0`, so the `k` initial centroids are always distinct points.

use rand::Rng;

use super::histogram::WeightedPoint;
use super::kmeans::squared_distance;

/// Pick `k` initial centroids. Requires `1 <= k <= points.len()`.
pub(crate) fn plus_plus<R: Rng>(points: &[WeightedPoint], k: usize, rng: &mut R) -> Vec<[f64; 3]> {
    debug_assert!(k >= 1 && k <= points.len());

    let mut centroids = Vec::with_capacity(k);

    let total_weight: u64 = points.iter().map(|p| p.weight).sum();
    let mut target = rng.gen_range(0..total_weight);
    let mut first = points.len() - 1;
    for (i, p) in points.iter().enumerate() {
        if target < p.weight {
            first = i;
            break;
        }
        target -= p.weight;
    }
    centroids.push(points[first].color);

    let mut nearest: Vec<f64> = points
        .iter()
        .map(|p| squared_distance(p.color, points[first].color))
        .collect();

    while centroids.len() < k {
        let scores: Vec<f64> = points
            .iter()
            .zip(&nearest)
            .map(|(p, &d)| p.weight as f64 * d)
            .collect();
        let total: f64 = scores.iter().sum();

        let chosen = if total > 0.0 {
            pick_weighted(&scores, rng.gen::<f64>() * total)
        } else {
            // only reachable with duplicate points, which the histogram rules out
            nearest
                .iter()
                .position(|&d| d > 0.0)
                .unwrap_or(centroids.len() % points.len())
        };

        let center = points[chosen].color;
        centroids.push(center);
        for (d, p) in nearest.iter_mut().zip(points) {
            *d = d.min(squared_distance(p.color, center));
        }
    }

    centroids
}

/// Index where the running sum of `scores` first exceeds `target`.
///
/// Zero-score entries are never returned; rounding at the tail falls back
/// to the last positive entry.
fn pick_weighted(scores: &[f64], target: f64) -> usize {
    let mut acc = 0.0;
    let mut last_positive = 0;
    for (i, &s) in scores.iter().enumerate() {
        if s <= 0.0 {
            continue;
        }
        last_positive = i;
        acc += s;
        if acc > target {
            return i;
        }
    }
    last_positive
}
