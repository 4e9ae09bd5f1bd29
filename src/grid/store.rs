//! The 4×4×4 trit store.
//!
//! Every one of the 64 cells always holds a valid trit; there is no empty
//! state. A fresh grid is populated uniformly at random.

use crate::grid::{Coord, GridError, AXIS_LEN};
use crate::ternary::{Row, Trit};
use rand::Rng;
use serde::{Serialize, Deserialize};
use tracing::debug;

/// The number of cells in the grid.
pub const GRID_SIZE: usize = 64;

/// Dense external representation, indexed `[z][y][x]`.
pub type DenseGrid = [[[u8; 4]; 4]; 4];

/// The addressable trit store.
///
/// Serializes as the dense `[z][y][x]` array of digits.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DenseGrid", from = "DenseGrid")]
pub struct TritGrid {
    cells: Vec<Trit>,
}

impl TritGrid {
    /// Create a grid with every cell set to zero.
    pub fn zeroed() -> Self {
        Self {
            cells: vec![Trit::Low; GRID_SIZE],
        }
    }

    /// Create a grid with every cell drawn uniformly from {0, 1, 2}.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut grid = Self::zeroed();
        grid.randomize(rng);
        grid
    }

    /// Create a grid from cells in linear order (`x + 4y + 16z`).
    pub fn from_cells(cells: [Trit; GRID_SIZE]) -> Self {
        Self { cells: cells.to_vec() }
    }

    /// Create a grid from the dense `[z][y][x]` form, reducing each value mod 3.
    pub fn from_dense(dense: &DenseGrid) -> Self {
        let mut grid = Self::zeroed();
        for (index, cell) in grid.cells.iter_mut().enumerate() {
            let c = Coord::from_index(index);
            *cell = Trit::from_value(dense[c.z as usize][c.y as usize][c.x as usize] as i64);
        }
        grid
    }

    /// Read the trit at `coord`.
    #[inline]
    pub fn get(&self, coord: Coord) -> Result<Trit, GridError> {
        Ok(self.cells[coord.index()?])
    }

    /// Store `value mod 3` at `coord`.
    #[inline]
    pub fn set(&mut self, coord: Coord, value: i64) -> Result<(), GridError> {
        self.set_trit(coord, Trit::from_value(value))
    }

    /// Store a trit at `coord`.
    #[inline]
    pub fn set_trit(&mut self, coord: Coord, value: Trit) -> Result<(), GridError> {
        let index = coord.index()?;
        self.cells[index] = value;
        Ok(())
    }

    /// Advance one cell to its successor (0 → 1 → 2 → 0), returning the new value.
    pub fn cycle_cell(&mut self, coord: Coord) -> Result<Trit, GridError> {
        let index = coord.index()?;
        self.cells[index] = self.cells[index].cycle();
        Ok(self.cells[index])
    }

    /// Overwrite every cell with an independent uniform trit.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = Trit::ALL[rng.gen_range(0..Trit::ALL.len())];
        }
        debug!(cells = GRID_SIZE, "grid randomized");
    }

    /// Read the x-row at (y, z) of `coord` as a 4-digit number.
    ///
    /// The x axis of `coord` is ignored.
    pub fn row(&self, coord: Coord) -> Result<Row, GridError> {
        let mut trits = [Trit::Low; Row::WIDTH];
        for (x, trit) in (0..AXIS_LEN).zip(trits.iter_mut()) {
            *trit = self.get(coord.with_x(x))?;
        }
        Ok(Row::from_trits(trits))
    }

    /// Write a row into the x-row at (y, z) of `coord`.
    pub fn write_row(&mut self, coord: Coord, row: &Row) -> Result<(), GridError> {
        // Validate the whole row before touching any cell.
        coord.with_x(0).index()?;
        for (x, &trit) in (0..AXIS_LEN).zip(row.trits()) {
            self.set_trit(coord.with_x(x), trit)?;
        }
        Ok(())
    }

    /// Iterate `(coord, trit)` pairs in linear order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Trit)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &t)| (Coord::from_index(i), t))
    }

    /// The cells in linear order.
    pub fn cells(&self) -> &[Trit] {
        &self.cells
    }

    /// Dense `[z][y][x]` copy of the grid.
    pub fn to_dense(&self) -> DenseGrid {
        let mut dense = [[[0u8; 4]; 4]; 4];
        for (c, t) in self.iter() {
            dense[c.z as usize][c.y as usize][c.x as usize] = t.to_u8();
        }
        dense
    }

    /// Count of cells holding each value, indexed by digit.
    pub fn histogram(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for t in &self.cells {
            counts[t.to_u8() as usize] += 1;
        }
        counts
    }
}

impl Default for TritGrid {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<DenseGrid> for TritGrid {
    fn from(dense: DenseGrid) -> Self {
        Self::from_dense(&dense)
    }
}

impl From<TritGrid> for DenseGrid {
    fn from(grid: TritGrid) -> Self {
        grid.to_dense()
    }
}

impl std::fmt::Debug for TritGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [low, mid, high] = self.histogram();
        f.debug_struct("TritGrid")
            .field("low", &low)
            .field("mid", &mid)
            .field("high", &high)
            .field("total_cells", &GRID_SIZE)
            .finish()
    }
}
