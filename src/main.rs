use clap::Parser;
use pixel_edge::{Session, StyleMode, config};
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

/// Render an image as stylized pixel-art edges and export it as PNG or SVG.
#[derive(Parser)]
#[command(name = "pixel-edge", version)]
struct Args {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Output file; defaults to pixel-art-<timestamp>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format: png or svg
    #[arg(long, default_value = "png")]
    format: String,

    /// Sampling stride and nominal shape size (>= 1)
    #[arg(long, default_value_t = 10)]
    grid_size: u32,

    /// Edge detection sensitivity (> 0)
    #[arg(long, default_value_t = 30.0)]
    edge_threshold: f64,

    /// Detail level, 1..=30
    #[arg(long, default_value_t = 1)]
    detail_level: u32,

    /// Square/circle size multiplier (>= 1)
    #[arg(long, default_value_t = 1.0)]
    line_thickness: f64,

    /// Ring width for the filled style, 1..=10
    #[arg(long, default_value_t = 5.0)]
    outline_thickness: f64,

    /// Background color (#RRGGBB or #RGB)
    #[arg(long, default_value = "#FFFFFF")]
    background: String,

    /// Foreground color (#RRGGBB or #RGB); the filled style defaults to its
    /// own accent color unless this is given
    #[arg(long)]
    foreground: Option<String>,

    /// Shape style: square, circle or filled
    #[arg(long, default_value = "square")]
    style: StyleMode,
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn main() {
    let args = Args::parse();

    let img = match image::open(&args.input) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Error reading image '{}': {}", args.input.display(), e);
            process::exit(2);
        }
    };

    let mut session = Session::new();
    session.load_image(&img);
    session.set_grid_size(args.grid_size);
    session.set_edge_threshold(args.edge_threshold);
    session.set_detail_level(args.detail_level);
    session.set_line_thickness(args.line_thickness);
    session.set_outline_thickness(args.outline_thickness);
    session.set_style_mode(args.style);

    if let Err(e) = session.set_background_color(&args.background) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    if let Some(foreground) = &args.foreground
        && let Err(e) = session.set_foreground_color(foreground)
    {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let (bytes, extension) = match args.format.as_str() {
        "png" => match session.export_png() {
            Ok(Some(bytes)) => (bytes, "png"),
            Ok(None) => {
                eprintln!("Error: nothing to export");
                process::exit(3);
            }
            Err(e) => {
                eprintln!("Error exporting PNG: {}", e);
                process::exit(3);
            }
        },
        "svg" => match session.export_svg() {
            Some(document) => (document.into_bytes(), "svg"),
            None => {
                eprintln!("Error: nothing to export");
                process::exit(3);
            }
        },
        other => {
            eprintln!("Error: unknown format '{}': expected png or svg", other);
            process::exit(1);
        }
    };

    let output_path = args.output.unwrap_or_else(|| {
        PathBuf::from(format!("pixel-art-{}.{}", timestamp_millis(), extension))
    });

    match fs::write(&output_path, &bytes) {
        Ok(_) => {
            println!(
                "Successfully rendered '{}' to '{}'",
                args.input.display(),
                output_path.display()
            );
            if let Ok(overlay) = config::readable_text_color(&session.config().background_color) {
                println!("Suggested overlay text color: {}", overlay);
            }
        }
        Err(e) => {
            eprintln!(
                "Error writing output file '{}': {}",
                output_path.display(),
                e
            );
            process::exit(4);
        }
    }
}
