use std::collections::BTreeMap;

use crate::canvas::{Canvas, Rgb};
use crate::layout::{CELL_SIZE, EDGE_WIDTH, LEADING_BAND, TRAILING_BAND};

/// Bin width of the projection histograms, matching the stripe width.
const BIN_WIDTH: usize = EDGE_WIDTH as usize;
/// Votes a bin needs before it can displace the current candidate.
const MIN_VOTES: u32 = 150;
/// How many occupied bins from each extremum are considered.
const SEARCH_BINS: usize = 15;

/// Pixel offsets of the boundary stripes that delimit the decodable grid.
///
/// All four are measured from the top/left of the image; the decoder's
/// report converts `bottom` and `right` to border distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeOffsets {
    pub top: Option<u32>,
    pub bottom: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
}

/// Which extremum a histogram is scanned from.
#[derive(Clone, Copy)]
enum Side {
    Min,
    Max,
}

fn in_band(px: Rgb, band: (u8, u8)) -> bool {
    let (lo, hi) = band;
    px.r >= lo && px.r <= hi && px.g >= lo && px.g <= hi && px.b >= lo && px.b <= hi
}

/// Vote every pixel of the scan region into 4-px column and row bins,
/// classified by the leading and trailing stripe bands, then pick one bin
/// per edge.
///
/// The scan origin is pulled back one stripe width from the anchor so a
/// partially visible first cell still lands in the histograms; when the
/// anchor sits closer to the border than that, it wraps forward a full cell
/// instead.
pub fn find_edges(canvas: &Canvas, anchor: (u32, u32)) -> EdgeOffsets {
    let mut x_start = anchor.0 as i64 - EDGE_WIDTH as i64;
    if x_start < 0 {
        x_start += CELL_SIZE as i64;
    }
    let mut y_start = anchor.1 as i64 - EDGE_WIDTH as i64;
    if y_start < 0 {
        y_start += CELL_SIZE as i64;
    }
    let x_start = x_start as u32;
    let y_start = y_start as u32;

    let mut v_leading: BTreeMap<u32, u32> = BTreeMap::new();
    let mut v_trailing: BTreeMap<u32, u32> = BTreeMap::new();
    let mut h_leading: BTreeMap<u32, u32> = BTreeMap::new();
    let mut h_trailing: BTreeMap<u32, u32> = BTreeMap::new();

    let mut y_index = 0u32;
    for (y2, y) in (y_start..canvas.height).enumerate() {
        let mut x_index = 0u32;
        for (x2, x) in (x_start..canvas.width).enumerate() {
            let px = canvas.rgb(x, y);
            if in_band(px, LEADING_BAND) {
                *h_leading.entry(x_index).or_insert(0) += 1;
                *v_leading.entry(y_index).or_insert(0) += 1;
            }
            if in_band(px, TRAILING_BAND) {
                *h_trailing.entry(x_index).or_insert(0) += 1;
                *v_trailing.entry(y_index).or_insert(0) += 1;
            }
            if x2 % BIN_WIDTH == 0 && x2 != 0 {
                x_index += 1;
            }
        }
        if y2 % BIN_WIDTH == 0 && y2 != 0 {
            y_index += 1;
        }
    }

    EdgeOffsets {
        top: pick_bin(&v_leading, Side::Min, y_start),
        bottom: pick_bin(&v_trailing, Side::Max, y_start),
        left: pick_bin(&h_leading, Side::Min, x_start),
        right: pick_bin(&h_trailing, Side::Max, x_start),
    }
}

/// The first occupied bin from the scan extremum is the default candidate;
/// a later bin within the search window takes over only with more than
/// `MIN_VOTES` votes and a strictly higher count than the incumbent.
fn pick_bin(bins: &BTreeMap<u32, u32>, side: Side, offset: u32) -> Option<u32> {
    let keys: Vec<u32> = match side {
        Side::Min => bins.keys().copied().take(SEARCH_BINS).collect(),
        Side::Max => bins.keys().rev().copied().take(SEARCH_BINS).collect(),
    };

    let mut best: Option<u32> = None;
    for &bin in &keys {
        match best {
            None => best = Some(bin),
            Some(current) => {
                if bins[&bin] > MIN_VOTES && bins[&bin] > bins[&current] {
                    best = Some(bin);
                }
            }
        }
    }

    let toward_max = match side {
        Side::Min => 0,
        Side::Max => BIN_WIDTH as u32,
    };
    best.map(|bin| bin * BIN_WIDTH as u32 + toward_max + offset)
}
