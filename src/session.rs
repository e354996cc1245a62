//! Render orchestration
//!
//! Owns the mutable pipeline state: the active working image, the render
//! configuration, the pan offset, the cached edge set, and the export
//! in-flight flag. All processing functions it calls are pure; this is the
//! only place state lives.
//!
//! The edge cache holds at most one edge set, valid for the current
//! (image, edge_threshold, detail_level) combination. Changing any of those
//! clears it; grid size, thickness, colors, style, and pan do not.

use crate::config::{DEMO_COLOR, RenderConfig, StyleMode, normalize_hex_color};
use crate::edges::{EdgeSet, detect_edges};
use crate::geometry::canvas_transform;
use crate::prepare::{WorkingImage, prepare_image};
use crate::raster;
use crate::shapes::{Shape, collect_shapes};
use crate::svg;
use image::DynamicImage;

/// Fixed export canvas width
pub const EXPORT_WIDTH: u32 = 2880;
/// Fixed export canvas height
pub const EXPORT_HEIGHT: u32 = 3840;

/// Interactive rendering session: one image, one config, one edge cache.
#[derive(Debug, Default)]
pub struct Session {
    image: Option<WorkingImage>,
    config: RenderConfig,
    pan_x: f64,
    pan_y: f64,
    cached_edges: Option<EdgeSet>,
    exporting: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn image(&self) -> Option<&WorkingImage> {
        self.image.as_ref()
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    /// True while an export is in flight; further export requests are no-ops.
    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// True when the current edge set is cached (test/introspection hook).
    pub fn edges_cached(&self) -> bool {
        self.cached_edges.is_some()
    }

    /// Replace the active image. Resets the edge cache and the pan offset.
    pub fn load_image(&mut self, img: &DynamicImage) {
        self.image = Some(prepare_image(img));
        self.cached_edges = None;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Restore default parameters and drop the image, cache, and pan.
    pub fn reset(&mut self) {
        let exporting = self.exporting;
        *self = Self::default();
        self.exporting = exporting;
    }

    pub fn set_grid_size(&mut self, value: u32) {
        self.config.grid_size = value.max(1);
    }

    /// Detection sensitivity. Invalidates the edge cache.
    pub fn set_edge_threshold(&mut self, value: f64) {
        self.config.edge_threshold = value.max(f64::MIN_POSITIVE);
        self.cached_edges = None;
    }

    /// Detail level, clamped to 1..=30. Invalidates the edge cache.
    pub fn set_detail_level(&mut self, value: u32) {
        self.config.detail_level = value.clamp(1, 30);
        self.cached_edges = None;
    }

    pub fn set_line_thickness(&mut self, value: f64) {
        self.config.line_thickness = value.max(1.0);
    }

    pub fn set_outline_thickness(&mut self, value: f64) {
        self.config.outline_thickness = value.clamp(1.0, 10.0);
    }

    pub fn set_background_color(&mut self, color: &str) -> Result<(), String> {
        self.config.background_color = normalize_hex_color(color)?;
        Ok(())
    }

    pub fn set_foreground_color(&mut self, color: &str) -> Result<(), String> {
        self.config.foreground_color = normalize_hex_color(color)?;
        Ok(())
    }

    /// Switch the shape style. The filled style preselects its demo
    /// foreground color; the caller may override it afterwards.
    pub fn set_style_mode(&mut self, mode: StyleMode) {
        self.config.style_mode = mode;
        if mode == StyleMode::Filled {
            self.config.foreground_color = DEMO_COLOR.to_string();
        }
    }

    /// Accumulate a drag delta. Preview-only; export ignores pan.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    fn ensure_edges(&mut self) {
        if self.cached_edges.is_none()
            && let Some(image) = &self.image
        {
            self.cached_edges = Some(detect_edges(
                &image.preview,
                self.config.edge_threshold,
                self.config.detail_level,
            ));
        }
    }

    /// Shapes for an interactive preview canvas of the given size, honoring
    /// the current pan offset. Empty when no image is loaded.
    pub fn render_preview(&mut self, width: f64, height: f64) -> Vec<Shape> {
        self.ensure_edges();
        let (Some(image), Some(edges)) = (self.image.as_ref(), self.cached_edges.as_ref()) else {
            return Vec::new();
        };
        let transform = canvas_transform(
            width,
            height,
            image.width,
            image.height,
            self.pan_x,
            self.pan_y,
        );
        collect_shapes(edges, image.width, &transform, &self.config)
    }

    /// Shapes for the fixed export canvas, always centered at zero pan.
    fn export_shapes(&mut self) -> Vec<Shape> {
        self.ensure_edges();
        let (Some(image), Some(edges)) = (self.image.as_ref(), self.cached_edges.as_ref()) else {
            return Vec::new();
        };
        let transform = canvas_transform(
            EXPORT_WIDTH as f64,
            EXPORT_HEIGHT as f64,
            image.width,
            image.height,
            0.0,
            0.0,
        );
        collect_shapes(edges, image.width, &transform, &self.config)
    }

    /// Export the current rendering as PNG bytes at 2880x3840.
    ///
    /// Returns `Ok(None)` when no image is loaded or another export is in
    /// flight. The in-flight flag is released on success and on failure.
    pub fn export_png(&mut self) -> Result<Option<Vec<u8>>, String> {
        if self.image.is_none() || self.exporting {
            return Ok(None);
        }
        self.exporting = true;
        let result = self.export_png_locked();
        self.exporting = false;
        result.map(Some)
    }

    fn export_png_locked(&mut self) -> Result<Vec<u8>, String> {
        let shapes = self.export_shapes();
        let mut canvas = raster::background_canvas(
            EXPORT_WIDTH,
            EXPORT_HEIGHT,
            &self.config.background_color,
        )?;
        raster::draw_shapes(&mut canvas, &shapes)?;
        raster::encode_png(&canvas)
    }

    /// Export the current rendering as an SVG document at 2880x3840.
    ///
    /// Returns `None` when no image is loaded or another export is in flight.
    pub fn export_svg(&mut self) -> Option<String> {
        if self.image.is_none() || self.exporting {
            return None;
        }
        self.exporting = true;
        let shapes = self.export_shapes();
        let document = svg::assemble_svg(
            EXPORT_WIDTH,
            EXPORT_HEIGHT,
            &self.config.background_color,
            &shapes,
        );
        self.exporting = false;
        Some(document)
    }
}
