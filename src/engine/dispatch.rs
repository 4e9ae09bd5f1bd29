//! Operation dispatch.
//!
//! [`execute`] is the single entry point: it reads operands from the grid,
//! runs the ALU, writes the result cell(s) back and returns a description of
//! what happened. Every read and bounds check happens before the first write,
//! so a call that fails leaves the grid exactly as it was.

use std::fmt;
use crate::engine::{Arity, EngineError, Operation, Output};
use crate::grid::{Coord, TritGrid};
use crate::ternary::{alu, Row, Trit};
use tracing::debug;

/// What one call to [`perform`] computed and where it wrote it.
///
/// Its `Display` output is the description string kept in the operation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRecord {
    /// NOT or CYCLE.
    Unary {
        op: Operation,
        a: Trit,
        result: Trit,
        at: Coord,
    },
    /// AND, OR, XOR, NAND, NOR or CONSENSUS.
    Binary {
        op: Operation,
        a: Trit,
        b: Trit,
        result: Trit,
        at: Coord,
    },
    /// Single-digit ADD or SUB.
    Arith {
        op: Operation,
        a: Trit,
        b: Trit,
        result: Trit,
        at: Coord,
        /// Carry for ADD, borrow for SUB.
        flag: Trit,
        /// Where the flag was written; `None` when the result sits at x = 3.
        flag_cell: Option<Coord>,
    },
    /// Ripple-carry add of two rows.
    MultiAdd {
        digits: Row,
        overflow: Trit,
        /// Any coordinate on the result row.
        row: Coord,
    },
}

impl OperationRecord {
    pub fn operation(&self) -> Operation {
        match self {
            OperationRecord::Unary { op, .. }
            | OperationRecord::Binary { op, .. }
            | OperationRecord::Arith { op, .. } => *op,
            OperationRecord::MultiAdd { .. } => Operation::MultiAdd,
        }
    }

    /// The cell the result digit went to; any cell of the row for MULTI_ADD.
    pub fn target(&self) -> Coord {
        match self {
            OperationRecord::Unary { at, .. }
            | OperationRecord::Binary { at, .. }
            | OperationRecord::Arith { at, .. } => *at,
            OperationRecord::MultiAdd { row, .. } => *row,
        }
    }

    /// Every (cell, value) pair the operation writes, in write order.
    pub fn writes(&self) -> Vec<(Coord, Trit)> {
        match self {
            OperationRecord::Unary { result, at, .. } | OperationRecord::Binary { result, at, .. } => {
                vec![(*at, *result)]
            }
            OperationRecord::Arith { result, at, flag, flag_cell, .. } => {
                let mut cells = vec![(*at, *result)];
                cells.extend(flag_cell.map(|cell| (cell, *flag)));
                cells
            }
            OperationRecord::MultiAdd { digits, row, .. } => digits
                .trits()
                .iter()
                .zip(0..)
                .map(|(&digit, x)| (row.with_x(x), digit))
                .collect(),
        }
    }

    /// Carry, borrow or overflow, for the arithmetic operations.
    pub fn carry(&self) -> Option<Trit> {
        match self {
            OperationRecord::Arith { flag, .. } => Some(*flag),
            OperationRecord::MultiAdd { overflow, .. } => Some(*overflow),
            _ => None,
        }
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationRecord::Unary { op, a, result, .. } => {
                write!(f, "{op}: {op}({a}) = {result}")
            }
            OperationRecord::Binary { op, a, b, result, .. } => {
                write!(f, "{op}: {a} {op} {b} = {result}")
            }
            OperationRecord::Arith { op, a, b, result, flag, flag_cell, .. } => {
                let (sign, flag_name) = match op {
                    Operation::Sub => ('-', "borrow"),
                    _ => ('+', "carry"),
                };
                write!(f, "{op}: {a} {sign} {b} = {result} ({flag_name}: {flag})")?;
                if let Some(cell) = flag_cell {
                    write!(f, " → {cell}={flag}")?;
                }
                Ok(())
            }
            OperationRecord::MultiAdd { digits, overflow, .. } => {
                write!(f, "{}: ", Operation::MultiAdd)?;
                for (i, digit) in digits.trits().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[{i}]={digit}")?;
                }
                write!(f, " overflow={overflow}")
            }
        }
    }
}

/// Run `op` against the grid and describe the outcome.
///
/// `operand2` is not read by the unary operations. MULTI_ADD only uses the
/// y and z axes of each coordinate.
pub fn execute(
    op: Operation,
    operand1: Coord,
    operand2: Coord,
    result: Coord,
    grid: &mut TritGrid,
) -> Result<String, EngineError> {
    perform(op, operand1, operand2, result, grid).map(|record| record.to_string())
}

/// Like [`execute`], but takes the operation identifier as text.
pub fn execute_named(
    name: &str,
    operand1: Coord,
    operand2: Coord,
    result: Coord,
    grid: &mut TritGrid,
) -> Result<String, EngineError> {
    execute(name.parse()?, operand1, operand2, result, grid)
}

/// Run `op` against the grid, returning the structured record.
///
/// The operation's arity decides which cells are read and its output shape
/// decides which cells are written. Nothing is written until every read has
/// succeeded and the result coordinate is known to be in range.
pub fn perform(
    op: Operation,
    operand1: Coord,
    operand2: Coord,
    result: Coord,
    grid: &mut TritGrid,
) -> Result<OperationRecord, EngineError> {
    debug!(%op, %operand1, %operand2, %result, "executing");

    let record = match op.arity() {
        Arity::Unary => {
            let a = grid.get(operand1)?;
            OperationRecord::Unary { op, a, result: unary_gate(op, a), at: result }
        }

        Arity::Binary => {
            let a = grid.get(operand1)?;
            let b = grid.get(operand2)?;
            match op.output() {
                Output::CellWithCarry => {
                    let (value, flag) = match op {
                        Operation::Sub => alu::subtract(a, b, Trit::Low),
                        _ => alu::add(a, b, Trit::Low),
                    };
                    OperationRecord::Arith {
                        op,
                        a,
                        b,
                        result: value,
                        at: result,
                        flag,
                        flag_cell: result.carry_target(),
                    }
                }
                _ => OperationRecord::Binary { op, a, b, result: binary_gate(op, a, b), at: result },
            }
        }

        Arity::Rows => {
            // Rows are picked by y and z, but every coordinate must still be valid.
            operand1.index()?;
            operand2.index()?;
            let row_a = grid.row(operand1)?;
            let row_b = grid.row(operand2)?;
            let (digits, overflow) = alu::add_rows(&row_a, &row_b);

            if !overflow.is_zero() {
                debug!(%row_a, %row_b, %overflow, "row addition overflowed");
            }
            OperationRecord::MultiAdd { digits, overflow, row: result }
        }
    };

    result.index()?;
    if let OperationRecord::Arith { flag, flag_cell: None, .. } = record {
        debug!(%op, %flag, "flag dropped at the x = 3 edge");
    }
    for (cell, value) in record.writes() {
        grid.set_trit(cell, value)?;
    }

    Ok(record)
}

fn unary_gate(op: Operation, a: Trit) -> Trit {
    match op {
        Operation::Cycle => alu::cycle(a),
        _ => alu::not(a),
    }
}

fn binary_gate(op: Operation, a: Trit, b: Trit) -> Trit {
    match op {
        Operation::And => alu::and(a, b),
        Operation::Or => alu::or(a, b),
        Operation::Xor => alu::xor(a, b),
        Operation::Nand => alu::nand(a, b),
        Operation::Nor => alu::nor(a, b),
        _ => alu::consensus(a, b),
    }
}
