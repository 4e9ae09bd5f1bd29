//! Single unbalanced ternary digit (trit).
//!
//! A trit holds one of three values: 0, 1 or 2. The three levels are named
//! after their role in the logic gates:
//! - `Low`  = 0 (the absorbing value of AND)
//! - `Mid`  = 1 (the neutral value returned by CONSENSUS on disagreement)
//! - `High` = 2 (the absorbing value of OR)

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single unbalanced ternary digit.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Trit {
    /// Zero (0)
    #[default]
    Low = 0,
    /// One (1)
    Mid = 1,
    /// Two (2)
    High = 2,
}

impl Trit {
    /// All possible trit values in ascending order.
    pub const ALL: [Trit; 3] = [Trit::Low, Trit::Mid, Trit::High];

    /// Create a trit from any integer, reducing it modulo 3.
    ///
    /// Negative values wrap the Euclidean way, so `-1` becomes `High`.
    #[inline]
    pub const fn from_value(value: i64) -> Self {
        match value.rem_euclid(3) {
            0 => Trit::Low,
            1 => Trit::Mid,
            _ => Trit::High,
        }
    }

    /// Create a trit from a raw digit, rejecting anything above 2.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Trit::Low),
            1 => Some(Trit::Mid),
            2 => Some(Trit::High),
            _ => None,
        }
    }

    /// Numeric value of the digit.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Inversion: `2 - t`. Swaps Low and High, keeps Mid.
    #[inline]
    pub const fn not(self) -> Self {
        match self {
            Trit::Low => Trit::High,
            Trit::Mid => Trit::Mid,
            Trit::High => Trit::Low,
        }
    }

    /// Minimum (ternary AND).
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        if self.to_u8() <= other.to_u8() { self } else { other }
    }

    /// Maximum (ternary OR).
    #[inline]
    pub const fn or(self, other: Self) -> Self {
        if self.to_u8() >= other.to_u8() { self } else { other }
    }

    /// Modular sum: `(a + b) mod 3`.
    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        Trit::from_value((self.to_u8() + other.to_u8()) as i64)
    }

    /// AND followed by NOT.
    #[inline]
    pub const fn nand(self, other: Self) -> Self {
        self.and(other).not()
    }

    /// OR followed by NOT.
    #[inline]
    pub const fn nor(self, other: Self) -> Self {
        self.or(other).not()
    }

    /// Consensus - returns the value if both inputs agree, else Mid.
    #[inline]
    pub const fn consensus(self, other: Self) -> Self {
        if self.to_u8() == other.to_u8() { self } else { Trit::Mid }
    }

    /// Successor in Z3: `(t + 1) mod 3`.
    #[inline]
    pub const fn cycle(self) -> Self {
        match self {
            Trit::Low => Trit::Mid,
            Trit::Mid => Trit::High,
            Trit::High => Trit::Low,
        }
    }

    /// Full adder: adds `self + other + carry_in`, returns (digit, carry_out).
    ///
    /// With a carry-in of 0 or 1 the carry-out is always 0 or 1.
    #[inline]
    pub const fn full_add(self, other: Self, carry_in: Self) -> (Self, Self) {
        let sum = (self.to_u8() + other.to_u8() + carry_in.to_u8()) as i64;
        (Trit::from_value(sum), Trit::from_value(sum.div_euclid(3)))
    }

    /// Full subtractor: `self - other - borrow_in`, returns (digit, borrow_out).
    ///
    /// A negative difference borrows one unit of 3 from the next position.
    #[inline]
    pub const fn full_sub(self, other: Self, borrow_in: Self) -> (Self, Self) {
        let diff = self.to_u8() as i64 - other.to_u8() as i64 - borrow_in.to_u8() as i64;
        (Trit::from_value(diff), Trit::from_value(-diff.div_euclid(3)))
    }

    /// Returns true if this trit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::Low)
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::Low => write!(f, "Low"),
            Trit::Mid => write!(f, "Mid"),
            Trit::High => write!(f, "High"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

impl std::ops::Not for Trit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Trit::not(self)
    }
}

impl From<Trit> for u8 {
    fn from(trit: Trit) -> Self {
        trit.to_u8()
    }
}

impl TryFrom<u8> for Trit {
    type Error = InvalidTrit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Trit::from_u8(value).ok_or(InvalidTrit(value))
    }
}

/// A raw digit that is not in {0, 1, 2}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid trit value: {0} (must be 0, 1, or 2)")]
pub struct InvalidTrit(pub u8);
