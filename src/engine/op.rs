//! The operation vocabulary.
//!
//! Each operation knows how many operand cells it reads and how many cells it
//! may write, so the dispatcher can match on a closed set instead of strings.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::engine::EngineError;

/// How many operand cells an operation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// Reads operand 1 only.
    Unary,
    /// Reads operand 1 and operand 2.
    Binary,
    /// Reads the whole x-row of operand 1 and of operand 2.
    Rows,
}

/// How many cells an operation writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// The result cell.
    Cell,
    /// The result cell and, when it exists, the carry/borrow cell next to it.
    CellWithCarry,
    /// All four cells of the result row.
    Row,
}

/// One of the eleven grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    // ==================== Unary ====================

    /// `2 - a`
    Not,
    /// `(a + 1) mod 3`
    Cycle,

    // ==================== Binary logic ====================

    /// `min(a, b)`
    And,
    /// `max(a, b)`
    Or,
    /// `(a + b) mod 3`
    Xor,
    /// `NOT(AND(a, b))`
    Nand,
    /// `NOT(OR(a, b))`
    Nor,
    /// `a` if `a == b`, else 1
    Consensus,

    // ==================== Arithmetic ====================

    /// Single-digit add, carry stored one cell up the x-axis.
    Add,
    /// Single-digit subtract, borrow stored one cell up the x-axis.
    Sub,
    /// Four-digit ripple-carry add of two x-rows.
    MultiAdd,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Operation; 11] = [
        Operation::Not,
        Operation::Cycle,
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::Nand,
        Operation::Nor,
        Operation::Consensus,
        Operation::Add,
        Operation::Sub,
        Operation::MultiAdd,
    ];

    /// The canonical identifier, e.g. `"MULTI_ADD"`.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Not => "NOT",
            Operation::Cycle => "CYCLE",
            Operation::And => "AND",
            Operation::Or => "OR",
            Operation::Xor => "XOR",
            Operation::Nand => "NAND",
            Operation::Nor => "NOR",
            Operation::Consensus => "CONSENSUS",
            Operation::Add => "ADD",
            Operation::Sub => "SUB",
            Operation::MultiAdd => "MULTI_ADD",
        }
    }

    pub const fn arity(self) -> Arity {
        match self {
            Operation::Not | Operation::Cycle => Arity::Unary,
            Operation::MultiAdd => Arity::Rows,
            _ => Arity::Binary,
        }
    }

    pub const fn output(self) -> Output {
        match self {
            Operation::Add | Operation::Sub => Output::CellWithCarry,
            Operation::MultiAdd => Output::Row,
            _ => Output::Cell,
        }
    }

    /// True if the operation reads operand 2.
    #[inline]
    pub const fn uses_second_operand(self) -> bool {
        !matches!(self.arity(), Arity::Unary)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_uppercase().replace('-', "_");
        let op = match name.as_str() {
            "NOT" => Operation::Not,
            "CYCLE" => Operation::Cycle,
            "AND" => Operation::And,
            "OR" => Operation::Or,
            "XOR" => Operation::Xor,
            "NAND" => Operation::Nand,
            "NOR" => Operation::Nor,
            "CONSENSUS" => Operation::Consensus,
            "ADD" => Operation::Add,
            "SUB" | "SUBTRACT" => Operation::Sub,
            "MULTI_ADD" => Operation::MultiAdd,
            _ => return Err(EngineError::UnknownOperation(s.trim().to_string())),
        };
        Ok(op)
    }
}
