//! PNG output for canvases.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use testchart::canvas::{Bpp, Canvas};

/// Write a canvas as an 8-bit PNG, grayscale or RGBA to match its layout.
pub fn write_canvas(path: &Path, canvas: &Canvas) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(match canvas.bpp {
        Bpp::Gray => png::ColorType::Grayscale,
        Bpp::Rgba => png::ColorType::Rgba,
    });
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .context("failed to write PNG header")?;
    writer
        .write_image_data(&canvas.buf)
        .context("failed to write PNG image data")?;
    Ok(())
}
