use std::f64::consts::PI;

use crate::canvas::{Bpp, Canvas, Rgb};

/// Options for the radial chart.
#[derive(Debug, Clone, Copy)]
pub struct RadialOptions {
    /// Output is size × size pixels.
    pub size: u32,
    /// Phase-shifted chroma rings (RGBA) instead of plain luminance (grayscale).
    pub color: bool,
}

impl Default for RadialOptions {
    fn default() -> Self {
        Self { size: 1024, color: true }
    }
}

/// Draw the radial frequency chart (the "Jähne pattern").
///
/// Luminance follows a sinusoid of squared radial distance, sweeping the
/// full spatial-frequency range toward the corners. Only the top-left
/// quadrant is computed; the other three are mirror writes of the same
/// value, so the output is exactly 4-fold symmetric. The mirror of column 0
/// falls one pixel outside the canvas and is clipped.
pub fn radial(options: RadialOptions) -> Canvas {
    let bpp = if options.color { Bpp::Rgba } else { Bpp::Gray };
    let mut canvas = Canvas::new(options.size, options.size, bpp);

    let w = options.size as i32;
    let h = options.size as i32;
    let center_x = options.size as f64 / 2.0;
    let center_y = options.size as f64 / 2.0;
    let f = 0.5;

    for y in 0..=center_y as i32 {
        let dy = y as f64 - center_y;
        for x in 0..=center_x as i32 {
            let dx = x as f64 - center_x;
            let o = f * (dx * dx / options.size as f64 + dy * dy / options.size as f64);

            let lum = (127.0 * ((o * PI).sin() + 1.0)) as u8;
            let color = if options.color {
                let g = (127.0 * ((o * 2.0 * PI + 2.0 * PI / 3.0).sin() + 1.0)) as u8;
                let b = (127.0 * ((o * 4.0 * PI + 4.0 * PI / 3.0).sin() + 1.0)) as u8;
                Rgb::new(lum, g, b)
            } else {
                Rgb::gray(lum)
            };

            canvas.put_pixel(x, y, color);
            canvas.put_pixel(w - x, y, color);
            canvas.put_pixel(w - x, h - y, color);
            canvas.put_pixel(x, h - y, color);
        }
    }

    canvas
}
