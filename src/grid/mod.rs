//! The addressable grid store.
//!
//! 64 single-trit cells addressed by (x, y, z), each axis in 0..=3:
//! - [`Coord`] - A possibly out-of-range position
//! - [`TritGrid`] - The bounds-checked store itself

pub mod coord;
pub mod store;

pub use coord::{Coord, CoordParseError, GridError, AXIS_LEN};
pub use store::{DenseGrid, TritGrid, GRID_SIZE};
