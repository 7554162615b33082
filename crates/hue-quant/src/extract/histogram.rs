//! Collapse raw samples into weighted distinct colors.
//!
//! Photos repeat colors heavily, so k-means runs over one point per
//! distinct color weighted by its sample count. Weighted means and weighted
//! inertia are exactly what the unweighted algorithm computes over the raw
//! samples.

use std::collections::HashMap;

use crate::color::Rgb;

/// One distinct sample color and how many samples carry it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WeightedPoint {
    pub rgb: Rgb,
    pub color: [f64; 3],
    pub weight: u64,
}

/// Distinct colors in first-occurrence order.
///
/// Order matters: seeding and tie-breaks walk this list, and first
/// occurrence keeps it independent of hashing.
pub(crate) fn weighted_points(samples: &[Rgb]) -> Vec<WeightedPoint> {
    let mut index: HashMap<Rgb, usize> = HashMap::new();
    let mut points: Vec<WeightedPoint> = Vec::new();

    for &rgb in samples {
        match index.get(&rgb) {
            Some(&i) => points[i].weight += 1,
            None => {
                index.insert(rgb, points.len());
                points.push(WeightedPoint {
                    rgb,
                    color: rgb.to_f64(),
                    weight: 1,
                });
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order_and_weights() {
        let samples = [
            Rgb::new(9, 9, 9),
            Rgb::new(1, 1, 1),
            Rgb::new(9, 9, 9),
            Rgb::new(5, 5, 5),
            Rgb::new(1, 1, 1),
            Rgb::new(9, 9, 9),
        ];
        let points = weighted_points(&samples);
        let summary: Vec<(Rgb, u64)> = points.iter().map(|p| (p.rgb, p.weight)).collect();
        assert_eq!(
            summary,
            [
                (Rgb::new(9, 9, 9), 3),
                (Rgb::new(1, 1, 1), 2),
                (Rgb::new(5, 5, 5), 1),
            ]
        );
    }

    #[test]
    fn test_weights_sum_to_sample_count() {
        let samples: Vec<Rgb> = (0..1000u32)
            .map(|i| Rgb::new((i % 7) as u8, (i % 3) as u8, 0))
            .collect();
        let points = weighted_points(&samples);
        assert_eq!(points.len(), 21);
        assert_eq!(points.iter().map(|p| p.weight).sum::<u64>(), 1000);
    }

    #[test]
    fn test_empty() {
        assert!(weighted_points(&[]).is_empty());
    }
}
