//! Geometry and shade constants of the coordinate-grid scheme.
//!
//! These values are the wire format shared by the generator and the decoder;
//! a buffer drawn with one set and decoded with another will not round-trip.

/// Cell pitch in pixels; a cell's grid index is its pixel origin / 60.
pub const CELL_SIZE: u32 = 60;
/// Width of each boundary stripe.
pub const EDGE_WIDTH: u32 = 4;
/// Payload offset from the cell origin, both axes.
pub const PAYLOAD_OFFSET: u32 = 6;
/// Side length of the square payload region.
pub const PAYLOAD_SIZE: u32 = 48;
/// Width of one coordinate column block; the payload holds two, cx then cy.
pub const BLOCK_WIDTH: u32 = 24;
/// Height of one redundant sub-block; three per column block.
pub const SUB_BLOCK_HEIGHT: u32 = 16;
/// Channel scale factor of each sub-block, top to bottom.
pub const SUB_BLOCK_SCALES: [u8; 3] = [2, 4, 6];

/// Shade of the stripe drawn immediately before a cell boundary.
pub const TRAILING_SHADE: u8 = 96;
/// Shade of the stripe drawn at a cell boundary.
pub const LEADING_SHADE: u8 = 112;
/// Intensity band the decoder accepts as a leading stripe.
pub const LEADING_BAND: (u8, u8) = (106, 126);
/// Intensity band the decoder accepts as a trailing stripe.
pub const TRAILING_BAND: (u8, u8) = (85, 105);

/// Locating pixel offset from the cell origin, both axes.
pub const ANCHOR_OFFSET: u32 = 4;
/// Radius of the white ring drawn around each cell origin.
pub const RING_RADIUS: i32 = 6;
/// Anchor classification: r and g at most this value.
pub const ANCHOR_RG_MAX: u8 = 60;
/// Anchor classification: b at least this value.
pub const ANCHOR_B_MIN: u8 = 200;
