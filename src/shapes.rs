//! Shape collection
//!
//! Walks the edge set with the configured stride and turns each sampled
//! edge pixel into drawable primitives. This is the single source of truth
//! for shape geometry: the raster canvas and the SVG document both consume
//! the `Vec<Shape>` produced here.

use crate::config::{RenderConfig, StyleMode};
use crate::geometry::{CanvasTransform, shape_placement};

/// Ring color for the filled style
pub const RING_COLOR: &str = "#000000";

/// Smallest inner-disc radius still worth drawing
const MIN_INNER_RADIUS: f64 = 0.4;

/// A drawable primitive with its fill color (normalized hex)
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        size: f64,
        fill: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
}

/// Ring width for the filled style. Interpolates between 7% and 110% of the
/// disc radius as `outline_thickness` runs from 1 to 10.
pub fn ring_stroke_width(base_radius: f64, outline_thickness: f64) -> f64 {
    let max_stroke = base_radius * 1.1;
    let min_stroke = base_radius * 0.07;
    min_stroke + (max_stroke - min_stroke) * (outline_thickness - 1.0) / 9.0
}

/// Collect the shapes for every `step`-th entry of the edge set.
///
/// The stride samples the edge list by position, not by spatial cell, so
/// the output depends on edge ordering (strong before promoted weak).
pub fn collect_shapes(
    edges: &[usize],
    preview_width: u32,
    transform: &CanvasTransform,
    config: &RenderConfig,
) -> Vec<Shape> {
    let step = config.grid_size.max(1) as usize;
    let w = preview_width as usize;
    let mut shapes = Vec::with_capacity(edges.len() / step + 1);

    for &index in edges.iter().step_by(step) {
        let x = (index % w) as u32;
        let y = (index / w) as u32;
        let p = shape_placement(x, y, transform, config.grid_size, config.line_thickness);

        match config.style_mode {
            StyleMode::Square => {
                shapes.push(Shape::Rect {
                    x: p.draw_x,
                    y: p.draw_y,
                    size: p.rect_size,
                    fill: config.foreground_color.clone(),
                });
            }
            StyleMode::Circle => {
                shapes.push(Shape::Circle {
                    cx: p.draw_x + p.rect_size / 2.0,
                    cy: p.draw_y + p.rect_size / 2.0,
                    r: p.rect_size / 2.0,
                    fill: config.foreground_color.clone(),
                });
            }
            StyleMode::Filled => {
                let cx = p.draw_x + p.rect_size / 2.0;
                let cy = p.draw_y + p.rect_size / 2.0;
                let base_radius = p.rect_size / 2.0;
                let stroke = ring_stroke_width(base_radius, config.outline_thickness);
                let inner_radius = (base_radius - stroke).max(0.0);

                shapes.push(Shape::Circle {
                    cx,
                    cy,
                    r: base_radius,
                    fill: RING_COLOR.to_string(),
                });
                if inner_radius > MIN_INNER_RADIUS {
                    shapes.push(Shape::Circle {
                        cx,
                        cy,
                        r: inner_radius,
                        fill: config.foreground_color.clone(),
                    });
                }
            }
        }
    }

    shapes
}
