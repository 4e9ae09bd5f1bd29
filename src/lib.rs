//! # tricube
//!
//! A conceptual ternary processor: a 4×4×4 grid of trits (0, 1, 2) driven by
//! a fixed set of logic and carry-arithmetic operations.
//!
//! Each user action is one step: pick an operation and up to three
//! coordinates, read the operands, compute, write the result back and record
//! a one-line description in a short operation log.

pub mod ternary;
pub mod grid;
pub mod engine;
pub mod config;
pub mod script;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use ternary::{Trit, Row};
pub use grid::{Coord, GridError, TritGrid};
pub use engine::{execute, Engine, EngineError, Operation, OperationLog, OperationRecord};
pub use config::{ConfigError, EngineConfig};
pub use script::{parse_script, Command, ScriptError};
