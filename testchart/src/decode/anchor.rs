use crate::canvas::Canvas;
use crate::layout::{ANCHOR_B_MIN, ANCHOR_RG_MAX};

/// Locate the first anchor pixel in row-major order.
///
/// The anchor is the near-pure-blue locating pixel each cell carries near
/// its top-left corner. Lossy transforms smear the exact channel values, so
/// the match is a band, not an equality test.
pub fn find_anchor(canvas: &Canvas) -> Option<(u32, u32)> {
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let px = canvas.rgb(x, y);
            if px.r <= ANCHOR_RG_MAX && px.g <= ANCHOR_RG_MAX && px.b >= ANCHOR_B_MIN {
                return Some((x, y));
            }
        }
    }
    None
}
