//! Image preprocessing
//!
//! Downsamples a decoded image to a bounded working resolution. Resampling
//! is nearest-neighbor so hard edges survive for gradient detection.

use image::{DynamicImage, GenericImageView, RgbaImage, imageops};

/// Longest side of the working image, in pixels
pub const PREVIEW_TARGET: u32 = 360;

/// The downsampled pixel buffer every later pipeline stage operates on.
/// Produced once per loaded image and replaced wholesale on the next load.
#[derive(Debug, Clone)]
pub struct WorkingImage {
    pub preview: RgbaImage,
    pub width: u32,
    pub height: u32,
}

/// Build a [`WorkingImage`] from a decoded image.
///
/// The scale factor is `min(1, PREVIEW_TARGET / max(w, h))`; output
/// dimensions are rounded and floored at 1 so zero-area inputs cannot occur.
pub fn prepare_image(img: &DynamicImage) -> WorkingImage {
    let (w, h) = img.dimensions();
    let max_dim = w.max(h);

    let scale = if max_dim > PREVIEW_TARGET {
        PREVIEW_TARGET as f64 / max_dim as f64
    } else {
        1.0
    };

    let pw = ((w as f64 * scale).round() as u32).max(1);
    let ph = ((h as f64 * scale).round() as u32).max(1);

    let preview = imageops::resize(&img.to_rgba8(), pw, ph, imageops::FilterType::Nearest);

    WorkingImage {
        preview,
        width: pw,
        height: ph,
    }
}
