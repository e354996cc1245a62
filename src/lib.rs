//! # pixel-edge
//!
//! A Rust library for stylized pixel-art edge rendering.
//!
//! ## Pipeline
//!
//! 1. Downsample a decoded image to a bounded working resolution
//! 2. Detect edges: luminance, Sobel gradients, non-maximum suppression,
//!    double threshold with single-hop hysteresis linking
//! 3. Render each sampled edge pixel as a square, circle, or ringed dot
//! 4. Export as a 2880x3840 PNG or an equivalent SVG document
//!
//! ## Example
//!
//! ```rust,ignore
//! use pixel_edge::Session;
//!
//! let img = image::open("input.png").unwrap();
//! let mut session = Session::new();
//! session.load_image(&img);
//! let svg = session.export_svg().unwrap();
//! std::fs::write("output.svg", svg).unwrap();
//! ```

pub mod config;
pub mod edges;
pub mod geometry;
pub mod prepare;
pub mod raster;
pub mod session;
pub mod shapes;
pub mod svg;

// Re-export commonly used items
pub use config::{RenderConfig, StyleMode};
pub use edges::{EdgeSet, detect_edges};
pub use prepare::{WorkingImage, prepare_image};
pub use session::{EXPORT_HEIGHT, EXPORT_WIDTH, Session};
pub use shapes::{Shape, collect_shapes};
