pub mod grid;
pub mod radial;
