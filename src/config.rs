//! Render configuration and color handling
//!
//! Holds the knobs exposed by the control surface (CLI flags) and the
//! hex-color utilities shared by the raster and vector output paths.

use std::str::FromStr;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_FOREGROUND_COLOR: &str = "#000000";
/// Foreground preselected when switching to the filled (ringed dot) style.
pub const DEMO_COLOR: &str = "#FF6D00";

/// Shape family used to render each sampled edge pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMode {
    /// Axis-aligned filled square
    Square,
    /// Filled circle
    Circle,
    /// Black disc with an inner foreground disc (ringed dot)
    Filled,
}

impl FromStr for StyleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(StyleMode::Square),
            "circle" => Ok(StyleMode::Circle),
            "filled" => Ok(StyleMode::Filled),
            other => Err(format!(
                "Unknown style '{}': expected square, circle or filled",
                other
            )),
        }
    }
}

/// All rendering parameters. Mutated only by the control surface; the
/// processing pipeline reads it.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Sampling stride through the edge list and nominal shape size (>= 1)
    pub grid_size: u32,
    /// Edge detection sensitivity (> 0)
    pub edge_threshold: f64,
    /// Scales the effective threshold (1..=30)
    pub detail_level: u32,
    /// Square/circle size multiplier (>= 1)
    pub line_thickness: f64,
    /// Ring width control for the filled style (1..=10)
    pub outline_thickness: f64,
    /// Normalized uppercase #RRGGBB
    pub background_color: String,
    /// Normalized uppercase #RRGGBB
    pub foreground_color: String,
    pub style_mode: StyleMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            edge_threshold: 30.0,
            detail_level: 1,
            line_thickness: 1.0,
            outline_thickness: 5.0,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            foreground_color: DEFAULT_FOREGROUND_COLOR.to_string(),
            style_mode: StyleMode::Square,
        }
    }
}

/// Normalize a hex color to uppercase `#RRGGBB`.
/// Accepts `#RGB` shorthand (each digit doubled) and a missing `#` prefix.
pub fn normalize_hex_color(input: &str) -> Result<String, String> {
    let trimmed = input.trim().trim_start_matches('#');

    let expanded: String = match trimmed.len() {
        3 => trimmed.chars().flat_map(|c| [c, c]).collect(),
        6 => trimmed.to_string(),
        _ => return Err(format!("Invalid hex color '{}'", input)),
    };

    if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color '{}'", input));
    }

    Ok(format!("#{}", expanded.to_ascii_uppercase()))
}

/// Parse a normalized hex color into RGB channel bytes.
pub fn parse_hex_rgb(hex: &str) -> Result<[u8; 3], String> {
    let normalized = normalize_hex_color(hex)?;
    let digits = &normalized[1..];

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| format!("Invalid hex color '{}': {}", hex, e))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Pick a readable overlay color for text shown on top of `background`.
/// Uses relative luminance with a 0.5 cut.
pub fn readable_text_color(background: &str) -> Result<&'static str, String> {
    let [r, g, b] = parse_hex_rgb(background)?;
    let lum = (0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64) / 255.0;
    Ok(if lum > 0.5 {
        "rgba(0,0,0,0.35)"
    } else {
        "rgba(255,255,255,0.68)"
    })
}
