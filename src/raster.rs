//! Raster output adapter
//!
//! Draws collected shapes onto an RGBA canvas and encodes it to PNG bytes.
//! Coverage rule: a pixel is painted when its center lies inside the shape.

use crate::config::parse_hex_rgb;
use crate::shapes::Shape;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Build an opaque canvas prefilled with the background color.
pub fn background_canvas(width: u32, height: u32, background: &str) -> Result<RgbaImage, String> {
    let [r, g, b] = parse_hex_rgb(background)?;
    Ok(RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255])))
}

/// Draw every shape onto the canvas, in order.
pub fn draw_shapes(canvas: &mut RgbaImage, shapes: &[Shape]) -> Result<(), String> {
    for shape in shapes {
        match shape {
            Shape::Rect { x, y, size, fill } => {
                let [r, g, b] = parse_hex_rgb(fill)?;
                fill_rect(canvas, *x, *y, *size, Rgba([r, g, b, 255]));
            }
            Shape::Circle { cx, cy, r, fill } => {
                let [cr, cg, cb] = parse_hex_rgb(fill)?;
                fill_circle(canvas, *cx, *cy, *r, Rgba([cr, cg, cb, 255]));
            }
        }
    }
    Ok(())
}

/// Encode the canvas as PNG into an in-memory byte buffer.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, String> {
    let mut bytes = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| format!("Failed to encode PNG: {}", e))?;
    Ok(bytes)
}

fn fill_rect(canvas: &mut RgbaImage, x: f64, y: f64, size: f64, color: Rgba<u8>) {
    if size <= 0.0 {
        return;
    }
    let (w, h) = canvas.dimensions();
    let x0 = x.floor().max(0.0) as u32;
    let y0 = y.floor().max(0.0) as u32;
    let x1 = ((x + size).ceil().max(0.0) as u32).min(w);
    let y1 = ((y + size).ceil().max(0.0) as u32).min(h);

    for py in y0..y1 {
        for px in x0..x1 {
            let cx = px as f64 + 0.5;
            let cy = py as f64 + 0.5;
            if cx >= x && cx < x + size && cy >= y && cy < y + size {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

fn fill_circle(canvas: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
    if radius <= 0.0 {
        return;
    }
    let (w, h) = canvas.dimensions();
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil().max(0.0) as u32).min(w);
    let y1 = ((cy + radius).ceil().max(0.0) as u32).min(h);
    let r2 = radius * radius;

    for py in y0..y1 {
        for px in x0..x1 {
            let dx = px as f64 + 0.5 - cx;
            let dy = py as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: Rgba<u8> = Rgba([255, 109, 0, 255]);
    const BG: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn test_background_canvas() {
        let canvas = background_canvas(4, 3, "#FF6D00").unwrap();
        assert_eq!(canvas.dimensions(), (4, 3));
        assert!(canvas.pixels().all(|p| *p == FG));
    }

    #[test]
    fn test_background_canvas_rejects_bad_color() {
        assert!(background_canvas(4, 3, "#xyzxyz").is_err());
    }

    #[test]
    fn test_fill_rect_pixel_aligned() {
        let mut canvas = RgbaImage::from_pixel(4, 4, BG);
        fill_rect(&mut canvas, 1.0, 1.0, 2.0, FG);
        for y in 0..4 {
            for x in 0..4 {
                let inside = (1..3).contains(&x) && (1..3).contains(&y);
                assert_eq!(*canvas.get_pixel(x, y) == FG, inside, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_rect_clips_to_canvas() {
        let mut canvas = RgbaImage::from_pixel(2, 2, BG);
        fill_rect(&mut canvas, -5.0, -5.0, 20.0, FG);
        assert!(canvas.pixels().all(|p| *p == FG));
    }

    #[test]
    fn test_fill_circle_center_and_corners() {
        let mut canvas = RgbaImage::from_pixel(5, 5, BG);
        fill_circle(&mut canvas, 2.5, 2.5, 2.0, FG);
        // Center painted, far corners outside the radius
        assert_eq!(*canvas.get_pixel(2, 2), FG);
        assert_eq!(*canvas.get_pixel(0, 0), BG);
        assert_eq!(*canvas.get_pixel(4, 4), BG);
        // Cardinal extremes sit exactly on the radius; boundary is inclusive
        assert_eq!(*canvas.get_pixel(2, 0), FG);
        assert_eq!(*canvas.get_pixel(0, 2), FG);
    }

    #[test]
    fn test_degenerate_shapes_draw_nothing() {
        let mut canvas = RgbaImage::from_pixel(3, 3, BG);
        fill_rect(&mut canvas, 1.0, 1.0, 0.0, FG);
        fill_circle(&mut canvas, 1.5, 1.5, 0.0, FG);
        assert!(canvas.pixels().all(|p| *p == BG));
    }

    #[test]
    fn test_draw_shapes_order_overpaints() {
        let mut canvas = RgbaImage::from_pixel(4, 4, BG);
        let shapes = vec![
            Shape::Rect {
                x: 0.0,
                y: 0.0,
                size: 4.0,
                fill: "#000000".to_string(),
            },
            Shape::Circle {
                cx: 2.0,
                cy: 2.0,
                r: 1.0,
                fill: "#FF6D00".to_string(),
            },
        ];
        draw_shapes(&mut canvas, &shapes).unwrap();
        // Later shapes paint over earlier ones
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(2, 2), FG);
    }

    #[test]
    fn test_encode_png_round_trip() {
        let canvas = RgbaImage::from_pixel(3, 2, FG);
        let bytes = encode_png(&canvas).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(*decoded.get_pixel(1, 1), FG);
    }
}
