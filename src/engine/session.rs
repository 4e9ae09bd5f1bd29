//! The engine session.
//!
//! An [`Engine`] owns one grid, one operation log and the random source used
//! to populate the grid. It is driven by a single caller, one step at a time.

use crate::config::EngineConfig;
use crate::engine::{dispatch, Operation, OperationLog, OperationRecord};
use crate::grid::{Coord, GridError, TritGrid};
use crate::ternary::Trit;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, info};

/// A grid, its operation log, and the RNG behind reset.
pub struct Engine {
    grid: TritGrid,
    log: OperationLog,
    rng: StdRng,
    /// Successful steps since creation or the last reset.
    steps: u64,
}

impl Engine {
    /// Create an engine with a randomly populated grid and an empty log.
    pub fn new(config: &EngineConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = TritGrid::random(&mut rng);
        info!(seed = ?config.seed, log_capacity = config.log_capacity, "engine created");

        Self {
            grid,
            log: OperationLog::with_capacity(config.log_capacity),
            rng,
            steps: 0,
        }
    }

    /// Create an engine around an existing grid.
    pub fn with_grid(grid: TritGrid, config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            grid,
            log: OperationLog::with_capacity(config.log_capacity),
            rng,
            steps: 0,
        }
    }

    /// Execute one operation and log its description.
    ///
    /// Returns the description that was appended. A failed step changes
    /// neither the grid nor the log.
    pub fn step(
        &mut self,
        op: Operation,
        operand1: Coord,
        operand2: Coord,
        result: Coord,
    ) -> Result<&str, EngineError> {
        let record = self.step_record(op, operand1, operand2, result)?;
        debug!(
            op = %record.operation(),
            at = %record.target(),
            steps = self.steps,
            carry = ?record.carry(),
            "step complete"
        );
        Ok(self.log.latest().unwrap_or_default())
    }

    /// Execute one operation and log it, returning the structured record.
    pub fn step_record(
        &mut self,
        op: Operation,
        operand1: Coord,
        operand2: Coord,
        result: Coord,
    ) -> Result<OperationRecord, EngineError> {
        let record = dispatch::perform(op, operand1, operand2, result, &mut self.grid)?;
        self.log.append(record.to_string());
        self.steps += 1;
        Ok(record)
    }

    /// Like [`Engine::step`], but takes the operation identifier as text.
    pub fn step_named(
        &mut self,
        name: &str,
        operand1: Coord,
        operand2: Coord,
        result: Coord,
    ) -> Result<&str, EngineError> {
        let op: Operation = name.parse()?;
        self.step(op, operand1, operand2, result)
    }

    /// Repopulate the grid at random and clear the log.
    pub fn reset(&mut self) {
        self.grid.randomize(&mut self.rng);
        self.log.clear();
        self.steps = 0;
        debug!("engine reset");
    }

    /// Advance a single cell by CYCLE without logging it.
    pub fn cycle_cell(&mut self, coord: Coord) -> Result<Trit, EngineError> {
        Ok(self.grid.cycle_cell(coord)?)
    }

    pub fn grid(&self) -> &TritGrid {
        &self.grid
    }

    /// Direct access to the grid, for callers that seed cells by hand.
    pub fn grid_mut(&mut self) -> &mut TritGrid {
        &mut self.grid
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("steps", &self.steps)
            .field("log_len", &self.log.len())
            .field("grid", &self.grid)
            .finish()
    }
}

/// Errors that can occur while executing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}
