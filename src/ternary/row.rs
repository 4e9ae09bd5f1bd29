//! Fixed-width ternary rows.
//!
//! A [`Row`] is the 4 trits found along the x-axis of the grid at a fixed
//! (y, z). Read as a base-3 number it has its least significant digit at
//! x = 0, giving a value range of 0 to 80.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::ternary::Trit;

/// A 4-trit unsigned base-3 number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Row {
    /// Trits stored from least significant (index 0) to most significant (index 3)
    trits: [Trit; 4],
}

impl Row {
    /// Number of trits in a row.
    pub const WIDTH: usize = 4;

    /// Largest representable value: 80 (all digits 2).
    pub const MAX: u32 = 80;

    /// Create a row of zeros.
    #[inline]
    pub const fn zero() -> Self {
        Self { trits: [Trit::Low; 4] }
    }

    /// Create a row from an array of trits (LSB first).
    #[inline]
    pub const fn from_trits(trits: [Trit; 4]) -> Self {
        Self { trits }
    }

    /// Create a row from raw digits (LSB first), reducing each modulo 3.
    pub fn from_digits(digits: [u8; 4]) -> Self {
        Self { trits: digits.map(|d| Trit::from_value(d as i64)) }
    }

    /// Get the underlying trit array.
    #[inline]
    pub const fn trits(&self) -> &[Trit; 4] {
        &self.trits
    }

    /// Get a single trit by index (0 = LSB), or `None` past the last digit.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Trit> {
        self.trits.get(index).copied()
    }

    /// Create from an integer, keeping only the low 4 base-3 digits.
    pub fn from_u32(mut value: u32) -> Self {
        let mut trits = [Trit::Low; 4];
        for trit in trits.iter_mut() {
            *trit = Trit::from_value((value % 3) as i64);
            value /= 3;
        }
        Self { trits }
    }

    /// Numeric value of the row.
    pub fn to_u32(&self) -> u32 {
        self.trits
            .iter()
            .rev()
            .fold(0, |acc, t| acc * 3 + t.to_u8() as u32)
    }

    /// Digits as plain integers (LSB first).
    pub fn digits(&self) -> [u8; 4] {
        self.trits.map(Trit::to_u8)
    }

    /// Check if every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.trits.iter().all(|t| t.is_zero())
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({} = {})", self, self.to_u32())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0t")?;
        for trit in self.trits.iter().rev() {
            write!(f, "{}", trit)?;
        }
        Ok(())
    }
}
