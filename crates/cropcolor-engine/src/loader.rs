//! Image decoding and normalization.
//!
//! Every decoded image is coerced to opaque RGB and down-sampled to the
//! strategy's fixed working resolution before clustering. The resample is
//! an accuracy/cost trade-off; downstream stages tolerate its artifacts.

use image::imageops::FilterType;
use image::{RgbImage, RgbaImage};

use crate::error::{EngineError, EngineResult};

/// One pixel as an 8-bit RGB triple.
pub type Rgb8 = [u8; 3];

/// Decode encoded bytes into an opaque RGB pixel sample at
/// `(width, height)`.
///
/// An alpha channel is composited over an opaque white background with an
/// alpha-weighted blend, so translucent regions resolve to a definite
/// color instead of leaking into clustering. Palette and grayscale modes
/// are coerced to 3-channel RGB. Images already at the target size skip
/// the resample.
pub fn decode_pixels(bytes: &[u8], (width, height): (u32, u32)) -> EngineResult<Vec<Rgb8>> {
    let decoded = image::load_from_memory(bytes).map_err(|e| EngineError::decode(e.to_string()))?;

    let rgb = if decoded.color().has_alpha() {
        composite_over_white(&decoded.to_rgba8())
    } else {
        decoded.to_rgb8()
    };

    let resized = if rgb.dimensions() == (width, height) {
        rgb
    } else {
        image::imageops::resize(&rgb, width, height, FilterType::Triangle)
    };

    Ok(resized.pixels().map(|p| p.0).collect())
}

/// Alpha-weighted blend over an opaque white background.
fn composite_over_white(rgba: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let [r, g, b, a] = src.0;
        dst.0 = [blend(r, a), blend(g, a), blend(b, a)];
    }
    out
}

fn blend(channel: u8, alpha: u8) -> u8 {
    let fg = channel as u32 * alpha as u32;
    let bg = 255u32 * (255 - alpha as u32);
    ((fg + bg + 127) / 255) as u8
}
