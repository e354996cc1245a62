//! Shape placement geometry
//!
//! Pure functions mapping working-image pixel coordinates onto a destination
//! canvas. Both the raster and the SVG output paths go through these, so the
//! two can never disagree about where a shape lands.

/// Uniform scale plus centering offset (and pan) for one destination canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub uniform_scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Fit a working image of `(pw, ph)` into a `(width, height)` canvas,
/// preserving aspect ratio and centering, then apply the pan offset.
pub fn canvas_transform(
    width: f64,
    height: f64,
    pw: u32,
    ph: u32,
    pan_x: f64,
    pan_y: f64,
) -> CanvasTransform {
    let uniform_scale = (width / pw as f64).min(height / ph as f64);
    CanvasTransform {
        uniform_scale,
        offset_x: (width - pw as f64 * uniform_scale) / 2.0 + pan_x,
        offset_y: (height - ph as f64 * uniform_scale) / 2.0 + pan_y,
    }
}

/// Where one shape goes and how big it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub draw_x: f64,
    pub draw_y: f64,
    pub rect_size: f64,
}

/// Placement for the edge pixel at `(x, y)` in the working image.
///
/// The shape's nominal size is `uniform_scale * grid_size`, grown by the
/// line-thickness factor and re-centered so thicker shapes stay put.
pub fn shape_placement(
    x: u32,
    y: u32,
    transform: &CanvasTransform,
    grid_size: u32,
    line_thickness: f64,
) -> Placement {
    let base_size = transform.uniform_scale * grid_size as f64;
    let thickness_factor = 1.0 + (line_thickness - 1.0) * 0.25;
    let rect_size = base_size * thickness_factor;
    let thickness_offset = (rect_size - base_size) / 2.0;

    Placement {
        draw_x: transform.offset_x + x as f64 * transform.uniform_scale - thickness_offset,
        draw_y: transform.offset_y + y as f64 * transform.uniform_scale - thickness_offset,
        rect_size,
    }
}
