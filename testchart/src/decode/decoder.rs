use smallvec::SmallVec;

use crate::canvas::Canvas;
use crate::layout::{ANCHOR_OFFSET, CELL_SIZE};

use super::anchor::find_anchor;
use super::cell::parse_coordinates;
use super::edges::find_edges;

/// Outcome of one decode pass.
///
/// Absent data is `None`, never an error: the decoder's job is to describe
/// how much of a buffer survived a transform, and partial recovery is an
/// ordinary, inspectable result. `left`/`top` are pixel offsets from their
/// borders; `right`/`bottom` are distances from the right/bottom borders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateReport {
    /// Smallest and largest grid column decoded.
    pub cells_x: Option<(u32, u32)>,
    /// Smallest and largest grid row decoded.
    pub cells_y: Option<(u32, u32)>,
    pub left: Option<u32>,
    pub top: Option<u32>,
    pub right: Option<u32>,
    pub bottom: Option<u32>,
}

/// Decode a (possibly degraded) grid chart: locate an anchor, detect the
/// stripe bounds, then walk the cells and reconstruct their embedded
/// indices.
///
/// The walk treats the first inconsistency as the decoding frontier: a cell
/// that fails to parse, or repeats a coordinate already claimed by another
/// cell, ends the scan and the report covers what was decoded up to there.
pub fn find_coordinates(canvas: &Canvas) -> CoordinateReport {
    let mut report = CoordinateReport::default();

    let Some(anchor) = find_anchor(canvas) else {
        return report;
    };

    let edges = find_edges(canvas, anchor);
    report.top = edges.top;
    report.left = edges.left;
    report.right = edges.right.map(|r| canvas.width.saturating_sub(r));
    report.bottom = edges.bottom.map(|b| canvas.height.saturating_sub(b));

    // The cell walk is bounded by the detected bottom and right stripes;
    // without both there is no decodable window and the report carries the
    // edges alone.
    let (Some(y_end), Some(x_end)) = (edges.bottom, edges.right) else {
        return report;
    };

    let mut rows: SmallVec<[u8; 18]> = SmallVec::new();
    let mut cols: SmallVec<[u8; 18]> = SmallVec::new();
    let mut cols_done = false;
    let mut escape = false;

    let mut y = anchor.1;
    while y <= y_end {
        // A cell reaching more than a stripe width past the border has lost
        // its payload; stop the walk there.
        if y + (CELL_SIZE - ANCHOR_OFFSET) > canvas.height {
            break;
        }
        let mut row_done = false;
        let mut x = anchor.0;
        while x <= x_end {
            if x + (CELL_SIZE - ANCHOR_OFFSET) > canvas.width {
                break;
            }
            let coord = parse_coordinates(canvas, x, y);
            let (Some(cx), Some(cy)) = (coord.x, coord.y) else {
                escape = true;
                break;
            };

            if !cols_done {
                if cols.contains(&cx) {
                    escape = true;
                    break;
                }
                cols.push(cx);
            } else if !cols.contains(&cx) {
                escape = true;
                break;
            }

            if !row_done {
                if rows.contains(&cy) {
                    escape = true;
                    break;
                }
                rows.push(cy);
                row_done = true;
            } else if !rows.contains(&cy) {
                escape = true;
                break;
            }

            x += CELL_SIZE;
        }
        cols_done = true;
        if escape {
            break;
        }
        y += CELL_SIZE;
    }

    report.cells_x = range_of(&cols);
    report.cells_y = range_of(&rows);
    report
}

fn range_of(values: &[u8]) -> Option<(u32, u32)> {
    let min = values.iter().min()?;
    let max = values.iter().max()?;
    Some((u32::from(*min), u32::from(*max)))
}
