//! Seeded k-means clustering.
//!
//! Plain Lloyd iteration with Euclidean distance in the transformed
//! feature space. The RNG seed is fixed so repeated runs over identical
//! bytes cluster identically.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fixed RNG seed for centroid initialization.
pub const KMEANS_SEED: u64 = 0;

/// Iteration cap when assignments keep shifting.
const MAX_ITERATIONS: usize = 100;

/// Output of one clustering run.
#[derive(Debug, Clone)]
pub struct Clustering {
    /// Cluster index per input feature vector.
    pub labels: Vec<usize>,
    /// Mean feature vector per cluster.
    pub centroids: Vec<Vec<f64>>,
    /// Member count per cluster.
    pub counts: Vec<usize>,
}

/// Partition `features` into at most `k` clusters.
///
/// The effective cluster count is `min(k, distinct feature vectors)` so a
/// degenerate sample (e.g. a single-color image) still clusters validly.
/// Iterates until assignments are stable or the iteration cap is hit.
/// Returns `None` for an empty feature set.
pub fn cluster(features: &[Vec<f64>], k: usize, seed: u64) -> Option<Clustering> {
    if features.is_empty() || k == 0 {
        return None;
    }

    let distinct = distinct_features(features);
    let k = k.min(distinct.len());

    let mut rng = StdRng::seed_from_u64(seed);
    let chosen = rand::seq::index::sample(&mut rng, distinct.len(), k);
    let mut centroids: Vec<Vec<f64>> = chosen.iter().map(|i| distinct[i].clone()).collect();

    let dim = features[0].len();
    let mut labels = vec![0usize; features.len()];

    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (i, feature) in features.iter().enumerate() {
            let nearest = nearest_centroid(feature, &centroids);
            if labels[i] != nearest {
                labels[i] = nearest;
                changed = true;
            }
        }

        // Recompute centroids as member means; an emptied cluster keeps
        // its previous centroid and ends with a zero count.
        let mut sums = vec![vec![0.0f64; dim]; k];
        let mut counts = vec![0usize; k];
        for (feature, &label) in features.iter().zip(&labels) {
            counts[label] += 1;
            for (sum, value) in sums[label].iter_mut().zip(feature) {
                *sum += value;
            }
        }
        for (cluster, (sum, &count)) in sums.iter().zip(&counts).enumerate() {
            if count > 0 {
                centroids[cluster] = sum.iter().map(|s| s / count as f64).collect();
            }
        }

        if !changed {
            break;
        }
    }

    let mut counts = vec![0usize; k];
    for &label in &labels {
        counts[label] += 1;
    }

    Some(Clustering {
        labels,
        centroids,
        counts,
    })
}

/// Distinct feature vectors in first-occurrence order.
fn distinct_features(features: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let mut seen: HashSet<Vec<u64>> = HashSet::new();
    let mut out = Vec::new();
    for feature in features {
        let bits: Vec<u64> = feature.iter().map(|v| v.to_bits()).collect();
        if seen.insert(bits) {
            out.push(feature.clone());
        }
    }
    out
}

/// Index of the nearest centroid; ties go to the lowest index.
fn nearest_centroid(feature: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let dist = squared_distance(feature, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_color_features() -> Vec<Vec<f64>> {
        let mut features = vec![vec![200.0, 200.0, 200.0]; 70];
        features.extend(vec![vec![220.0, 30.0, 30.0]; 30]);
        features
    }

    #[test]
    fn test_k_clamps_to_distinct_count() {
        let clustering = cluster(&two_color_features(), 5, KMEANS_SEED).expect("clustering");
        assert_eq!(clustering.centroids.len(), 2);
        assert_eq!(clustering.counts.iter().sum::<usize>(), 100);

        let mut counts = clustering.counts.clone();
        counts.sort_unstable();
        assert_eq!(counts, vec![30, 70]);
    }

    #[test]
    fn test_centroids_are_member_means() {
        let clustering = cluster(&two_color_features(), 5, KMEANS_SEED).expect("clustering");
        // With two distinct values the converged centroids are exact.
        let mut centroids = clustering.centroids.clone();
        centroids.sort_by(|a, b| a[0].partial_cmp(&b[0]).expect("ordered"));
        assert_eq!(centroids[0], vec![200.0, 200.0, 200.0]);
        assert_eq!(centroids[1], vec![220.0, 30.0, 30.0]);
    }

    #[test]
    fn test_single_distinct_value_yields_one_cluster() {
        let features = vec![vec![5.0, 5.0, 5.0]; 9];
        let clustering = cluster(&features, 4, KMEANS_SEED).expect("clustering");
        assert_eq!(clustering.centroids.len(), 1);
        assert_eq!(clustering.counts, vec![9]);
        assert!(clustering.labels.iter().all(|&l| l == 0));
    }

    #[test]
    fn test_deterministic_given_seed() {
        let features = (0..60)
            .map(|i| vec![(i % 7) as f64 * 13.0, (i % 5) as f64 * 29.0, (i % 3) as f64 * 47.0])
            .collect::<Vec<_>>();
        let a = cluster(&features, 4, KMEANS_SEED).expect("clustering");
        let b = cluster(&features, 4, KMEANS_SEED).expect("clustering");
        assert_eq!(a.labels, b.labels);
        assert_eq!(a.centroids, b.centroids);
        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert!(cluster(&[], 4, KMEANS_SEED).is_none());
    }
}
