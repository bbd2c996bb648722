//! Color space transformation.
//!
//! RGB strategies cluster raw `(R, G, B)` values. The HSV strategy
//! converts pixels to HSV and encodes hue as a weighted `(cos, sin)` pair
//! so that clustering distances respect the wraparound at 0°/360°; raw
//! hue values would incorrectly separate near-identical reddish hues
//! straddling the boundary.

use palette::{FromColor, Hsv, Srgb};

use crate::loader::Rgb8;

/// Weight applied to the hue cosine/sine feature terms.
const HUE_WEIGHT: f64 = 2.0;
/// Divisor scaling saturation into the 0-2 feature range.
const SATURATION_SCALE: f64 = 50.0;
/// Divisor scaling value into the 0-1 feature range.
const VALUE_SCALE: f64 = 100.0;

/// A pixel in HSV: hue in degrees `[0, 360)`, saturation and value in
/// `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvPixel {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// Convert an RGB triple to HSV.
pub fn rgb_to_hsv(pixel: Rgb8) -> HsvPixel {
    let [r, g, b] = pixel;
    let hsv = Hsv::from_color(Srgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ));
    HsvPixel {
        hue: hsv.hue.into_positive_degrees() as f64,
        saturation: hsv.saturation as f64 * 100.0,
        value: hsv.value as f64 * 100.0,
    }
}

/// Convert HSV (degrees / 0-100 / 0-100) back to an RGB triple.
/// Components are truncated to 8 bits.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb8 {
    let rgb = Srgb::from_color(Hsv::new(
        hue as f32,
        (saturation / 100.0) as f32,
        (value / 100.0) as f32,
    ));
    [
        channel_to_u8(rgb.red),
        channel_to_u8(rgb.green),
        channel_to_u8(rgb.blue),
    ]
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

/// Saturation of one RGB triple on the 0-1 scale.
pub fn rgb_saturation(pixel: Rgb8) -> f64 {
    let [r, g, b] = pixel;
    let hsv = Hsv::from_color(Srgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ));
    hsv.saturation as f64
}

/// Identity features for RGB clustering: `(R, G, B)` in `[0, 255]`.
pub fn rgb_features(pixels: &[Rgb8]) -> Vec<Vec<f64>> {
    pixels
        .iter()
        .map(|p| vec![p[0] as f64, p[1] as f64, p[2] as f64])
        .collect()
}

/// Hue-circular features: `(cos(H)·2, sin(H)·2, S/50, V/100)`.
///
/// The ×2 hue weight and the S/50, V/100 scaling are fixed empirical
/// weights controlling the relative influence of hue, saturation and
/// brightness on cluster shape.
pub fn hsv_features(pixels: &[HsvPixel]) -> Vec<Vec<f64>> {
    pixels
        .iter()
        .map(|p| {
            let rad = p.hue.to_radians();
            vec![
                rad.cos() * HUE_WEIGHT,
                rad.sin() * HUE_WEIGHT,
                p.saturation / SATURATION_SCALE,
                p.value / VALUE_SCALE,
            ]
        })
        .collect()
}
