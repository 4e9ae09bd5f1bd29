//! Unbalanced ternary primitives.
//!
//! This module provides the core types for working with base-3 digits:
//! - [`Trit`] - A single ternary digit (0, 1, 2)
//! - [`Row`] - A 4-trit number, one x-row of the grid
//! - [`alu`] - Pure logic and carry arithmetic over trits and rows

mod trit;
mod row;
pub mod alu;

pub use trit::{Trit, InvalidTrit};
pub use row::Row;
pub use alu::{add, subtract, add_rows};
