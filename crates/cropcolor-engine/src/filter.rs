//! Pixel filtering with a degenerate-sample fallback.
//!
//! Two independent filters share one fallback rule: when fewer than 10%
//! of the input pixels survive, the filter result is discarded and the
//! full input is kept, so clustering never runs on a near-empty sample
//! (e.g. a fully monochrome image). Exactly 10% retained keeps the
//! filtered set.

use crate::colorspace::HsvPixel;
use crate::loader::Rgb8;

/// Channel threshold for the extreme-luminance filter: pixels with all
/// channels below it are near-black, all channels above `255 - it` are
/// near-white.
const EXTREME_CHANNEL_THRESHOLD: u8 = 20;

/// Minimum saturation (0-100 scale) a pixel must have to survive the
/// low-saturation filter.
const MIN_SATURATION: f64 = 15.0;

/// Whether a pixel is near-black or near-white, presumed background.
fn is_extreme(pixel: &Rgb8) -> bool {
    let [r, g, b] = *pixel;
    let low = EXTREME_CHANNEL_THRESHOLD;
    let high = 255 - EXTREME_CHANNEL_THRESHOLD;
    (r < low && g < low && b < low) || (r > high && g > high && b > high)
}

/// Retain the pixels matching `keep`, falling back to the full input when
/// fewer than 10% survive.
pub fn retain_with_fallback<T: Clone>(input: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    let retained: Vec<T> = input.iter().filter(|item| keep(item)).cloned().collect();
    if retained.len() * 10 < input.len() {
        input.to_vec()
    } else {
        retained
    }
}

/// Drop near-black and near-white pixels.
pub fn reject_extremes(pixels: &[Rgb8]) -> Vec<Rgb8> {
    retain_with_fallback(pixels, |p| !is_extreme(p))
}

/// Drop low-saturation (grayish) pixels. HSV strategy only, applied after
/// the color-space transform.
pub fn reject_low_saturation(pixels: &[HsvPixel]) -> Vec<HsvPixel> {
    retain_with_fallback(pixels, |p| p.saturation >= MIN_SATURATION)
}
