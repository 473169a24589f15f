use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use testchart::canvas::{Bpp, Canvas};
use testchart::decode::decoder::find_coordinates;
use testchart::pattern::grid;
use testchart::pattern::radial::{radial, RadialOptions};

mod write_png;

/// Test chart generation and decoding CLI
#[derive(Parser)]
#[command(name = "testchart", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a chart as PNG
    Generate {
        /// Pattern to draw: radial, grid
        #[arg(long, default_value = "grid")]
        pattern: String,
        /// Radial chart side length in pixels
        #[arg(long, default_value_t = 1024)]
        size: u32,
        /// Grayscale radial chart instead of chroma rings
        #[arg(long)]
        grayscale: bool,
        /// Output file path
        #[arg(short, long, default_value = "chart.png")]
        output: String,
    },
    /// Decode grid coordinates from an image and print a JSON report
    Decode {
        /// Input image (PNG or JPEG)
        image: String,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate { pattern, size, grayscale, output } => {
            cmd_generate(&pattern, size, grayscale, &output)
        }
        Command::Decode { image, pretty } => cmd_decode(&image, pretty),
    }
}

fn cmd_generate(pattern: &str, size: u32, grayscale: bool, output: &str) -> Result<()> {
    let canvas = match pattern {
        "radial" => radial(RadialOptions { size, color: !grayscale }),
        "grid" => grid::grid(),
        other => anyhow::bail!("unknown pattern: {other} (expected radial or grid)"),
    };
    write_png::write_canvas(Path::new(output), &canvas)?;
    println!("wrote {}x{} chart to {output}", canvas.width, canvas.height);
    Ok(())
}

fn cmd_decode(path: &str, pretty: bool) -> Result<()> {
    let canvas = load_image(path)?;
    let report = find_coordinates(&canvas);
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

fn load_image(path: &str) -> Result<Canvas> {
    let img = image::open(path)
        .with_context(|| format!("failed to open image: {path}"))?
        .into_rgba8();

    let width = img.width();
    let height = img.height();
    Ok(Canvas::from_buf(width, height, Bpp::Rgba, img.into_raw())?)
}
