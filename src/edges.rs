//! Edge detection
//!
//! A simplified Canny-style detector over the working image:
//! luminance map, 3x3 Sobel gradients, 4-direction non-maximum suppression,
//! then a double threshold with single-hop hysteresis linking. A weak pixel
//! is promoted only when directly adjacent to a strong pixel; promotion does
//! not chain through other weak pixels.
//!
//! Output order is strong edges first, then promoted weak edges, each in
//! scan discovery order. The rasterizer's stride sampling walks this order,
//! so it must stay deterministic.

use image::RgbaImage;
use std::collections::HashSet;

/// Ordered linear pixel indices into the working image
pub type EdgeSet = Vec<usize>;

/// Per-pixel gradient magnitude and direction, zero on the 1-pixel border.
/// Stored at f32 precision; magnitude is `sqrt(gx^2 + gy^2) / 4`.
#[derive(Debug, Clone)]
pub struct GradientField {
    pub magnitude: Vec<f32>,
    pub direction: Vec<f32>,
}

/// Compute the luminance map: `0.3 R + 0.59 G + 0.11 B`, truncated to u8.
pub fn luma(image: &RgbaImage) -> Vec<u8> {
    image
        .pixels()
        .map(|p| {
            let [r, g, b, _] = p.0;
            (0.3 * r as f64 + 0.59 * g as f64 + 0.11 * b as f64) as u8
        })
        .collect()
}

/// Sobel gradients over a luminance map. Border pixels are left at zero.
pub fn sobel_gradients(gray: &[u8], width: u32, height: u32) -> GradientField {
    let w = width as usize;
    let h = height as usize;
    let mut magnitude = vec![0.0f32; w * h];
    let mut direction = vec![0.0f32; w * h];

    if w < 3 || h < 3 {
        return GradientField {
            magnitude,
            direction,
        };
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let g = |yy: usize, xx: usize| gray[yy * w + xx] as f64;

            let gx = g(y - 1, x + 1) + 2.0 * g(y, x + 1) + g(y + 1, x + 1)
                - (g(y - 1, x - 1) + 2.0 * g(y, x - 1) + g(y + 1, x - 1));
            let gy = g(y - 1, x - 1) + 2.0 * g(y - 1, x) + g(y - 1, x + 1)
                - (g(y + 1, x - 1) + 2.0 * g(y + 1, x) + g(y + 1, x + 1));

            let idx = y * w + x;
            magnitude[idx] = ((gx * gx + gy * gy).sqrt() / 4.0) as f32;
            direction[idx] = gy.atan2(gx) as f32;
        }
    }

    GradientField {
        magnitude,
        direction,
    }
}

/// High/low thresholds for the given sensitivity and detail level.
/// `detail_level` 1 leaves the threshold untouched; 30 scales it to 25%.
/// `high` never drops below 1 and `low` is always `0.4 * high`.
pub fn thresholds(edge_threshold: f64, detail_level: u32) -> (f64, f64) {
    let factor = 1.0 - (detail_level as f64 - 1.0) / 29.0 * 0.75;
    let high = (edge_threshold * factor).max(1.0);
    let low = high * 0.4;
    (high, low)
}

/// Quantize a gradient angle (radians) into a 0/45/90/135 degree bucket.
fn quantize_direction(direction: f32) -> u32 {
    let deg = (direction as f64 * 180.0 / std::f64::consts::PI + 180.0) % 180.0;
    if !(22.5..157.5).contains(&deg) {
        0
    } else if deg < 67.5 {
        45
    } else if deg < 112.5 {
        90
    } else {
        135
    }
}

/// Promote weak candidates that touch a strong edge in their 8-neighborhood.
/// Single hop only: a weak pixel next to another (promoted) weak pixel stays out.
fn link_weak_edges(strong: &[usize], weak: &[usize], width: usize) -> Vec<usize> {
    let strong_set: HashSet<usize> = strong.iter().copied().collect();
    let mut promoted = Vec::new();

    for &idx in weak {
        let y = (idx / width) as i64;
        let x = (idx % width) as i64;
        'neighbors: for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n_idx = ((y + dy) * width as i64 + (x + dx)) as usize;
                if strong_set.contains(&n_idx) {
                    promoted.push(idx);
                    break 'neighbors;
                }
            }
        }
    }

    promoted
}

/// Detect edge pixels in a working image.
///
/// Returns all strong-edge indices followed by all promoted weak-edge
/// indices, in discovery order. A uniform image yields an empty set.
pub fn detect_edges(preview: &RgbaImage, edge_threshold: f64, detail_level: u32) -> EdgeSet {
    let w = preview.width() as usize;
    let h = preview.height() as usize;
    if w < 3 || h < 3 {
        return Vec::new();
    }

    let gray = luma(preview);
    let grad = sobel_gradients(&gray, preview.width(), preview.height());
    let (high, low) = thresholds(edge_threshold, detail_level);

    let mut strong = Vec::new();
    let mut weak = Vec::new();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let idx = y * w + x;
            let mag = grad.magnitude[idx];
            if mag as f64 <= low {
                continue;
            }

            // Compare against the two neighbors along the quantized direction
            let (n1, n2) = match quantize_direction(grad.direction[idx]) {
                0 => (grad.magnitude[idx - 1], grad.magnitude[idx + 1]),
                45 => (grad.magnitude[idx + w - 1], grad.magnitude[idx - w + 1]),
                90 => (grad.magnitude[idx - w], grad.magnitude[idx + w]),
                _ => (grad.magnitude[idx + w + 1], grad.magnitude[idx - w - 1]),
            };

            if mag >= n1 && mag >= n2 {
                if mag as f64 >= high {
                    strong.push(idx);
                } else {
                    weak.push(idx);
                }
            }
        }
    }

    let promoted = link_weak_edges(&strong, &weak, w);

    let mut edges = strong;
    edges.extend(promoted);
    edges
}
