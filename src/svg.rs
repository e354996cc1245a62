//! Vector output adapter
//!
//! Serializes collected shapes as a self-contained SVG document. Geometry
//! comes from the same `Vec<Shape>` as the raster path; the only difference
//! is the 2-decimal coordinate rounding of the text format.

use crate::shapes::Shape;

/// Format a coordinate with 2 decimal places, treating -0 as 0
fn f(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{:.2}", n)
}

/// Convert a shape to an SVG element string
pub fn shape_to_svg_element(shape: &Shape) -> String {
    match shape {
        Shape::Rect { x, y, size, fill } => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            f(*x),
            f(*y),
            f(*size),
            f(*size),
            fill
        ),
        Shape::Circle { cx, cy, r, fill } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            f(*cx),
            f(*cy),
            f(*r),
            fill
        ),
    }
}

/// Assemble the full SVG document: fixed viewport, background via a style
/// attribute, then one element per shape.
pub fn assemble_svg(width: u32, height: u32, background: &str, shapes: &[Shape]) -> String {
    let elements: String = shapes.iter().map(shape_to_svg_element).collect();

    format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" style="background:{background}">{elements}</svg>"#
    )
}
