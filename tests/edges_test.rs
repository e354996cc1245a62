//! Integration tests for edge detection
//!
//! Builds deterministic test images with known patterns and checks the
//! detector's documented properties: empty output on uniform input,
//! determinism, threshold ordering, NMS local maximality, and the
//! strong-before-weak output order.

use image::{Rgba, RgbaImage};
use pixel_edge::edges::{detect_edges, luma, sobel_gradients, thresholds};

fn solid_image(width: u32, height: u32, value: u8) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
}

/// Checkerboard of 2x2 blocks; single-pixel checkers cancel under Sobel
fn block_checkerboard(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let v = if (x / 2 + y / 2) % 2 == 0 { 255 } else { 0 };
            img.put_pixel(x, y, Rgba([v, v, v, 255]));
        }
    }
    img
}

/// Deterministic noise image from a small LCG
fn noise_image(size: u32, mut seed: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            let v = (seed >> 16) as u8;
            img.put_pixel(x, y, Rgba([v, v, v, 255]));
        }
    }
    img
}

// ============================================================================
// Uniform input
// ============================================================================

#[test]
fn test_uniform_image_yields_empty_edge_set() {
    for size in [3, 4, 7, 32] {
        for value in [0, 128, 255] {
            let img = solid_image(size, size, value);
            assert!(
                detect_edges(&img, 30.0, 1).is_empty(),
                "size {} value {}",
                size,
                value
            );
        }
    }
}

#[test]
fn test_uniform_image_empty_for_any_parameters() {
    let img = solid_image(5, 5, 77);
    for threshold in [0.5, 1.0, 30.0, 255.0] {
        for detail in [1, 15, 30] {
            assert!(detect_edges(&img, threshold, detail).is_empty());
        }
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_detection_is_deterministic() {
    let img = noise_image(24, 42);
    let first = detect_edges(&img, 30.0, 5);
    for _ in 0..3 {
        assert_eq!(detect_edges(&img, 30.0, 5), first);
    }
}

#[test]
fn test_checkerboard_has_edges() {
    let img = block_checkerboard(8);
    assert!(!detect_edges(&img, 30.0, 1).is_empty());
}

// ============================================================================
// Threshold ordering
// ============================================================================

#[test]
fn test_high_threshold_dominates_low() {
    for threshold in [0.1, 0.5, 1.0, 10.0, 30.0, 100.0, 255.0] {
        for detail in 1..=30 {
            let (high, low) = thresholds(threshold, detail);
            assert!(high >= 1.0, "threshold {} detail {}", threshold, detail);
            assert!(high >= low, "threshold {} detail {}", threshold, detail);
            assert!((low - high * 0.4).abs() < 1e-12);
        }
    }
}

#[test]
fn test_detail_level_lowers_threshold_monotonically() {
    let mut previous = f64::INFINITY;
    for detail in 1..=30 {
        let (high, _) = thresholds(100.0, detail);
        assert!(high <= previous, "detail {}", detail);
        previous = high;
    }
    // Full range: factor runs from 1.0 down to 0.25
    assert_eq!(thresholds(100.0, 1).0, 100.0);
    assert_eq!(thresholds(100.0, 30).0, 25.0);
}

// ============================================================================
// NMS local maximality
// ============================================================================

/// Map a gradient direction to its 0/45/90/135 bucket, as documented
fn direction_bucket(direction: f32) -> u32 {
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

#[test]
fn test_every_edge_is_a_directional_local_maximum() {
    let img = noise_image(20, 7);
    let w = img.width() as usize;
    let grad = sobel_gradients(&luma(&img), img.width(), img.height());

    let edges = detect_edges(&img, 20.0, 10);
    assert!(!edges.is_empty(), "noise image should produce edges");

    for idx in edges {
        let mag = grad.magnitude[idx];
        let (n1, n2) = match direction_bucket(grad.direction[idx]) {
            0 => (grad.magnitude[idx - 1], grad.magnitude[idx + 1]),
            45 => (grad.magnitude[idx + w - 1], grad.magnitude[idx - w + 1]),
            90 => (grad.magnitude[idx - w], grad.magnitude[idx + w]),
            _ => (grad.magnitude[idx + w + 1], grad.magnitude[idx - w - 1]),
        };
        assert!(mag >= n1 && mag >= n2, "index {} is not a local maximum", idx);
    }
}

// ============================================================================
// Output ordering
// ============================================================================

#[test]
fn test_strong_edges_precede_promoted_weak_edges() {
    let img = noise_image(20, 99);
    let grad = sobel_gradients(&luma(&img), img.width(), img.height());
    let (high, low) = thresholds(20.0, 10);

    let edges = detect_edges(&img, 20.0, 10);
    assert!(!edges.is_empty());

    // Once the first below-high entry appears, no later entry may reach high
    let mut seen_weak = false;
    for idx in edges {
        let mag = grad.magnitude[idx] as f64;
        assert!(mag > low, "index {} below the low threshold", idx);
        if mag >= high {
            assert!(!seen_weak, "strong edge after a promoted weak edge");
        } else {
            seen_weak = true;
        }
    }
}

#[test]
fn test_edges_are_interior_and_unique() {
    let img = noise_image(16, 3);
    let w = img.width() as usize;
    let h = img.height() as usize;

    let edges = detect_edges(&img, 10.0, 15);
    let mut seen = std::collections::HashSet::new();
    for &idx in &edges {
        let x = idx % w;
        let y = idx / w;
        assert!(x >= 1 && x < w - 1, "x on border");
        assert!(y >= 1 && y < h - 1, "y on border");
        assert!(seen.insert(idx), "duplicate index {}", idx);
    }
}
