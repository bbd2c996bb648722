//! Cluster scoring and winner selection.
//!
//! Each strategy scores the clusters of one run and picks a winner; ties
//! break to the first cluster in enumeration order. The winner's
//! representative color becomes the extraction result.

use cropcolor_models::HexColor;

use crate::colorspace::{self, HsvPixel};
use crate::kmeans::Clustering;

/// Weight applied to representative saturation in the filtered strategy's
/// score: `count × (1 + 2·saturation)`.
const SATURATION_WEIGHT: f64 = 2.0;

/// Divisor applied to mean saturation (0-100) in the HSV strategy's
/// score: `count × (1 + saturation/50)`.
const HSV_SATURATION_DIVISOR: f64 = 50.0;

/// A scored cluster with its representative color.
///
/// Exists only for the duration of selection; saturation and value are on
/// the 0-100 scale.
#[derive(Debug, Clone)]
pub struct ColorCluster {
    pub rgb: [u8; 3],
    pub member_count: usize,
    pub mean_saturation: f64,
    pub mean_value: f64,
    pub score: f64,
}

/// Count-only scoring: the largest cluster wins.
pub fn select_largest(clustering: &Clustering) -> Option<HexColor> {
    pick_winner(rgb_clusters(clustering, |count, _| count as f64))
}

/// Size-and-vividness scoring: `count × (1 + 2·saturation)`, favoring
/// large *and* vivid clusters over large-but-dull ones.
pub fn select_saturation_weighted(clustering: &Clustering) -> Option<HexColor> {
    pick_winner(rgb_clusters(clustering, |count, saturation| {
        count as f64 * (1.0 + SATURATION_WEIGHT * saturation)
    }))
}

/// HSV scoring: representative from the circular-mean hue and arithmetic
/// mean saturation/value of the cluster members; score
/// `count × (1 + saturation/50)`.
///
/// `pixels` must be the HSV sample the clustering labels index into.
pub fn select_hsv(clustering: &Clustering, pixels: &[HsvPixel]) -> Option<HexColor> {
    debug_assert_eq!(clustering.labels.len(), pixels.len());

    let mut clusters = Vec::with_capacity(clustering.counts.len());
    for (index, &count) in clustering.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        let mut hues = Vec::with_capacity(count);
        let mut saturation_sum = 0.0;
        let mut value_sum = 0.0;
        for (pixel, &label) in pixels.iter().zip(&clustering.labels) {
            if label == index {
                hues.push(pixel.hue);
                saturation_sum += pixel.saturation;
                value_sum += pixel.value;
            }
        }

        let hue = circular_mean_hue(&hues);
        let saturation = saturation_sum / count as f64;
        let value = value_sum / count as f64;
        let rgb = colorspace::hsv_to_rgb(hue, saturation, value);

        clusters.push(ColorCluster {
            rgb,
            member_count: count,
            mean_saturation: saturation,
            mean_value: value,
            score: count as f64 * (1.0 + saturation / HSV_SATURATION_DIVISOR),
        });
    }

    pick_winner(clusters)
}

/// Circular mean of hue angles in degrees, normalized to `[0, 360)`.
///
/// Uses `atan2` over averaged sin/cos so hues straddling the 0°/360°
/// boundary average to a nearby hue instead of the arithmetic midpoint.
pub fn circular_mean_hue(hues: &[f64]) -> f64 {
    let n = hues.len() as f64;
    let (sin_sum, cos_sum) = hues.iter().fold((0.0f64, 0.0f64), |(s, c), hue| {
        let rad = hue.to_radians();
        (s + rad.sin(), c + rad.cos())
    });
    (sin_sum / n).atan2(cos_sum / n).to_degrees().rem_euclid(360.0)
}

/// Build scored clusters for the RGB strategies: representative = centroid
/// rounded to integer RGB.
fn rgb_clusters(
    clustering: &Clustering,
    score: impl Fn(usize, f64) -> f64,
) -> Vec<ColorCluster> {
    clustering
        .centroids
        .iter()
        .zip(&clustering.counts)
        .filter(|(_, &count)| count > 0)
        .map(|(centroid, &count)| {
            let rgb = centroid_to_rgb(centroid);
            let hsv = colorspace::rgb_to_hsv(rgb);
            ColorCluster {
                rgb,
                member_count: count,
                mean_saturation: hsv.saturation,
                mean_value: hsv.value,
                score: score(count, hsv.saturation / 100.0),
            }
        })
        .collect()
}

fn centroid_to_rgb(centroid: &[f64]) -> [u8; 3] {
    [
        centroid[0].round().clamp(0.0, 255.0) as u8,
        centroid[1].round().clamp(0.0, 255.0) as u8,
        centroid[2].round().clamp(0.0, 255.0) as u8,
    ]
}

/// Maximum-score cluster; ties break to the first in enumeration order.
fn pick_winner(clusters: Vec<ColorCluster>) -> Option<HexColor> {
    let mut best: Option<&ColorCluster> = None;
    for cluster in &clusters {
        if best.map_or(true, |b| cluster.score > b.score) {
            best = Some(cluster);
        }
    }
    best.map(|c| HexColor::from_rgb(c.rgb[0], c.rgb[1], c.rgb[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clustering(centroids: Vec<Vec<f64>>, counts: Vec<usize>, labels: Vec<usize>) -> Clustering {
        Clustering {
            labels,
            centroids,
            counts,
        }
    }

    #[test]
    fn test_circular_mean_wraps_at_zero() {
        let mean = circular_mean_hue(&[2.0, 358.0]);
        let wrapped = mean.min(360.0 - mean);
        assert!(wrapped < 1e-6, "mean {} not near 0/360", mean);
    }

    #[test]
    fn test_circular_mean_plain_angles() {
        let mean = circular_mean_hue(&[80.0, 100.0]);
        assert!((mean - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_largest_cluster_wins_by_count() {
        let c = clustering(
            vec![vec![200.0, 200.0, 200.0], vec![220.0, 30.0, 30.0]],
            vec![70, 30],
            vec![],
        );
        assert_eq!(select_largest(&c), Some(HexColor::from_rgb(200, 200, 200)));
    }

    #[test]
    fn test_ties_break_to_first_cluster() {
        let c = clustering(
            vec![vec![10.0, 10.0, 10.0], vec![20.0, 20.0, 20.0]],
            vec![50, 50],
            vec![],
        );
        assert_eq!(select_largest(&c), Some(HexColor::from_rgb(10, 10, 10)));
    }

    #[test]
    fn test_saturation_weighting_overcomes_size() {
        // 70% light gray vs 30% vivid red: saturation weighting flips the
        // winner relative to count-only scoring.
        let c = clustering(
            vec![vec![200.0, 200.0, 200.0], vec![220.0, 30.0, 30.0]],
            vec![15750, 6750],
            vec![],
        );
        assert_eq!(select_largest(&c), Some(HexColor::from_rgb(200, 200, 200)));
        assert_eq!(
            select_saturation_weighted(&c),
            Some(HexColor::from_rgb(220, 30, 30))
        );
    }

    #[test]
    fn test_centroids_round_to_nearest_integer() {
        let c = clustering(vec![vec![10.4, 10.5, 254.6]], vec![1], vec![]);
        assert_eq!(select_largest(&c), Some(HexColor::from_rgb(10, 11, 255)));
    }

    #[test]
    fn test_hsv_selection_uses_circular_mean() {
        // One cluster of reddish hues straddling 0°/360°.
        let pixels = vec![
            HsvPixel { hue: 2.0, saturation: 80.0, value: 90.0 },
            HsvPixel { hue: 358.0, saturation: 80.0, value: 90.0 },
        ];
        let c = clustering(vec![vec![0.0; 4]], vec![2], vec![0, 0]);
        let hex = select_hsv(&c, &pixels).expect("winner");
        let [r, g, b] = hex.rgb();
        // A red, not the cyan an arithmetic 180° mean would produce.
        assert!(r > 150 && g < 80 && b < 80, "got ({}, {}, {})", r, g, b);
    }

    #[test]
    fn test_hsv_score_prefers_vivid_cluster() {
        // 6 dull pixels vs 4 vivid ones; vividness wins.
        let mut pixels = vec![HsvPixel { hue: 120.0, saturation: 5.0, value: 60.0 }; 6];
        pixels.extend(vec![HsvPixel { hue: 10.0, saturation: 90.0, value: 80.0 }; 4]);
        let labels = vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1];
        let c = clustering(vec![vec![0.0; 4], vec![1.0; 4]], vec![6, 4], labels);
        let hex = select_hsv(&c, &pixels).expect("winner");
        let [r, g, b] = hex.rgb();
        assert!(r > g && r > b, "expected reddish, got ({}, {}, {})", r, g, b);
    }

    #[test]
    fn test_empty_cluster_set_selects_nothing() {
        let c = clustering(vec![], vec![], vec![]);
        assert_eq!(select_largest(&c), None);
        assert_eq!(select_hsv(&c, &[]), None);
    }
}
