//! Extraction strategies and per-image orchestration.
//!
//! A strategy is a fixed composition of loader, filters, transform,
//! clustering and scoring, selected once per batch run. Per URL the
//! pipeline progresses fetch → decode → cluster → resolve, with one
//! attempt and no retries.

use cropcolor_models::{HexColor, StrategyKind};

use crate::colorspace::{self, HsvPixel};
use crate::error::{EngineError, EngineResult};
use crate::filter;
use crate::kmeans;
use crate::loader;
use crate::score;

/// Feature space used for clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Identity: cluster raw `(R, G, B)`.
    Rgb,
    /// 4-dimensional hue-circular HSV encoding.
    HsvCircular,
}

/// Descriptor of one extraction strategy.
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    pub kind: StrategyKind,
    /// Apply the extreme-luminance filter before clustering.
    pub filter_enabled: bool,
    pub color_space: ColorSpace,
    /// Configured cluster count, clamped to the distinct sample size.
    pub k: usize,
    /// Fixed working resolution the decoded image is down-sampled to.
    pub resize: (u32, u32),
}

impl Strategy {
    /// Cluster raw RGB at 120×120 with k=4; the largest cluster wins.
    pub fn plain() -> Self {
        Self {
            kind: StrategyKind::Plain,
            filter_enabled: false,
            color_space: ColorSpace::Rgb,
            k: 4,
            resize: (120, 120),
        }
    }

    /// Drop extreme pixels, cluster RGB at 150×150 with k=5, weight
    /// cluster size by representative saturation.
    pub fn filtered() -> Self {
        Self {
            kind: StrategyKind::Filtered,
            filter_enabled: true,
            color_space: ColorSpace::Rgb,
            k: 5,
            resize: (150, 150),
        }
    }

    /// Drop extreme and low-saturation pixels, cluster hue-circular HSV
    /// features at 150×150 with k=5.
    pub fn hsv_circular() -> Self {
        Self {
            kind: StrategyKind::HsvCircular,
            filter_enabled: true,
            color_space: ColorSpace::HsvCircular,
            k: 5,
            resize: (150, 150),
        }
    }

    /// The strategy for a parsed identifier.
    pub fn for_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Plain => Self::plain(),
            StrategyKind::Filtered => Self::filtered(),
            StrategyKind::HsvCircular => Self::hsv_circular(),
        }
    }
}

/// Extract the dominant color from encoded image bytes.
///
/// Deterministic: identical bytes and an identical strategy produce an
/// identical hex code across repeated runs.
pub fn extract(bytes: &[u8], strategy: &Strategy) -> EngineResult<HexColor> {
    let pixels = loader::decode_pixels(bytes, strategy.resize)?;

    let sample = if strategy.filter_enabled {
        filter::reject_extremes(&pixels)
    } else {
        pixels
    };

    let selected = match strategy.color_space {
        ColorSpace::Rgb => {
            let features = colorspace::rgb_features(&sample);
            let clustering = kmeans::cluster(&features, strategy.k, kmeans::KMEANS_SEED)
                .ok_or(EngineError::Degenerate)?;
            match strategy.kind {
                StrategyKind::Plain => score::select_largest(&clustering),
                _ => score::select_saturation_weighted(&clustering),
            }
        }
        ColorSpace::HsvCircular => {
            let hsv: Vec<HsvPixel> = sample.iter().map(|p| colorspace::rgb_to_hsv(*p)).collect();
            let hsv = filter::reject_low_saturation(&hsv);
            let features = colorspace::hsv_features(&hsv);
            let clustering = kmeans::cluster(&features, strategy.k, kmeans::KMEANS_SEED)
                .ok_or(EngineError::Degenerate)?;
            score::select_hsv(&clustering, &hsv)
        }
    };

    selected.ok_or(EngineError::Degenerate)
}
