//! The operation engine.
//!
//! Ties the ALU to the grid:
//! - [`Operation`] - The closed set of eleven operations
//! - [`dispatch`] - Read operands, compute, write results, describe
//! - [`OperationLog`] - The last few descriptions
//! - [`Engine`] - Grid + log + RNG, driven one step at a time

pub mod op;
pub mod dispatch;
pub mod log;
pub mod session;

pub use op::{Arity, Operation, Output};
pub use dispatch::{execute, execute_named, perform, OperationRecord};
pub use log::{OperationLog, DEFAULT_LOG_CAPACITY};
pub use session::{Engine, EngineError};
