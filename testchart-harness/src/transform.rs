/// Raw-buffer stand-ins for the external codec's crop and scale paths.
use serde::{Deserialize, Serialize};
use testchart::canvas::Canvas;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("crop {x},{y} {w}x{h} leaves the {src_w}x{src_h} source")]
    CropOutOfRange {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        src_w: u32,
        src_h: u32,
    },

    #[error("target dimensions must be nonzero")]
    EmptyTarget,
}

/// Crop rectangle in source pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Scaler selection, fast against smooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleMode {
    /// Nearest-neighbor point sampling.
    Nearest,
    /// Box average over the source footprint of each target pixel.
    Box,
}

/// Copy an exact pixel window out of the source.
///
/// The window must lie fully inside the source; the codec this stands in
/// for rejects out-of-range crops rather than clamping them.
pub fn crop(src: &Canvas, rect: CropRect) -> Result<Canvas, TransformError> {
    if rect.width == 0 || rect.height == 0 {
        return Err(TransformError::EmptyTarget);
    }
    if rect.x as u64 + rect.width as u64 > src.width as u64
        || rect.y as u64 + rect.height as u64 > src.height as u64
    {
        return Err(TransformError::CropOutOfRange {
            x: rect.x,
            y: rect.y,
            w: rect.width,
            h: rect.height,
            src_w: src.width,
            src_h: src.height,
        });
    }

    let bpp = src.bpp.bytes();
    let mut out = Canvas::new(rect.width, rect.height, src.bpp);
    for y in 0..rect.height {
        let src_off = ((rect.y + y) as usize * src.width as usize + rect.x as usize) * bpp;
        let dst_off = y as usize * rect.width as usize * bpp;
        let n = rect.width as usize * bpp;
        out.buf[dst_off..dst_off + n].copy_from_slice(&src.buf[src_off..src_off + n]);
    }
    Ok(out)
}

/// Resample the source to `width` × `height`.
pub fn scale(
    src: &Canvas,
    mode: ScaleMode,
    width: u32,
    height: u32,
) -> Result<Canvas, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::EmptyTarget);
    }

    let bpp = src.bpp.bytes();
    let mut out = Canvas::new(width, height, src.bpp);

    match mode {
        ScaleMode::Nearest => {
            for ty in 0..height {
                let sy = (ty as u64 * src.height as u64 / height as u64) as usize;
                for tx in 0..width {
                    let sx = (tx as u64 * src.width as u64 / width as u64) as usize;
                    let src_off = (sy * src.width as usize + sx) * bpp;
                    let dst_off = (ty as usize * width as usize + tx as usize) * bpp;
                    out.buf[dst_off..dst_off + bpp]
                        .copy_from_slice(&src.buf[src_off..src_off + bpp]);
                }
            }
        }
        ScaleMode::Box => {
            for ty in 0..height {
                let y0 = (ty as u64 * src.height as u64 / height as u64) as usize;
                let y1 = (((ty + 1) as u64 * src.height as u64 / height as u64) as usize)
                    .max(y0 + 1);
                for tx in 0..width {
                    let x0 = (tx as u64 * src.width as u64 / width as u64) as usize;
                    let x1 = (((tx + 1) as u64 * src.width as u64 / width as u64) as usize)
                        .max(x0 + 1);

                    let mut sums = [0u64; 4];
                    for sy in y0..y1 {
                        for sx in x0..x1 {
                            let off = (sy * src.width as usize + sx) * bpp;
                            for c in 0..bpp {
                                sums[c] += u64::from(src.buf[off + c]);
                            }
                        }
                    }
                    let count = ((y1 - y0) * (x1 - x0)) as u64;
                    let dst_off = (ty as usize * width as usize + tx as usize) * bpp;
                    for c in 0..bpp {
                        out.buf[dst_off + c] = (sums[c] / count) as u8;
                    }
                }
            }
        }
    }
    Ok(out)
}
