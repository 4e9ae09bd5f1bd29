//! Grid coordinates.

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Cells along each axis.
pub const AXIS_LEN: i32 = 4;

/// A position in the grid.
///
/// Axes are signed so that anything a caller can type is representable;
/// only (x, y, z) with every axis in 0..=3 addresses a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// True if every axis lies in 0..=3.
    #[inline]
    pub const fn in_bounds(&self) -> bool {
        (self.x >= 0 && self.x < AXIS_LEN)
            && (self.y >= 0 && self.y < AXIS_LEN)
            && (self.z >= 0 && self.z < AXIS_LEN)
    }

    /// Linear cell index: `x + 4y + 16z`.
    pub fn index(&self) -> Result<usize, GridError> {
        if !self.in_bounds() {
            return Err(GridError::OutOfRange(*self));
        }
        Ok((self.x + AXIS_LEN * self.y + AXIS_LEN * AXIS_LEN * self.z) as usize)
    }

    /// Inverse of [`Coord::index`]. Indices past the end wrap around.
    pub const fn from_index(index: usize) -> Self {
        let len = AXIS_LEN as usize;
        let index = index % (len * len * len);
        Self {
            x: (index % len) as i32,
            y: ((index / len) % len) as i32,
            z: (index / (len * len)) as i32,
        }
    }

    /// The same coordinate moved to another x position.
    #[inline]
    pub const fn with_x(&self, x: i32) -> Self {
        Self { x, y: self.y, z: self.z }
    }

    /// The next-more-significant cell on the x-axis, if the grid has one.
    pub fn carry_target(&self) -> Option<Coord> {
        let next = self.with_x(self.x.saturating_add(1));
        next.in_bounds().then_some(next)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.x, self.y, self.z)
    }
}

/// Parse `x,y,z` (optionally wrapped in brackets).
impl std::str::FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(CoordParseError::WrongArity(parts.len()));
        }

        let mut axes = [0i32; 3];
        for (axis, part) in axes.iter_mut().zip(&parts) {
            *axis = part
                .parse()
                .map_err(|_| CoordParseError::InvalidAxis(part.to_string()))?;
        }

        Ok(Coord::new(axes[0], axes[1], axes[2]))
    }
}

/// Errors that can occur during grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// At least one axis is outside 0..=3.
    #[error("coordinate {0} out of range (each axis must be 0-3)")]
    OutOfRange(Coord),
}

/// Errors from parsing a coordinate string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordParseError {
    #[error("expected 3 comma-separated axes, found {0}")]
    WrongArity(usize),

    #[error("invalid axis value '{0}'")]
    InvalidAxis(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for i in 0..64 {
            assert_eq!(Coord::from_index(i).index(), Ok(i));
        }
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(Coord::new(1, 0, 0).index(), Ok(1));
        assert_eq!(Coord::new(0, 1, 0).index(), Ok(4));
        assert_eq!(Coord::new(0, 0, 1).index(), Ok(16));
        assert_eq!(Coord::new(3, 3, 3).index(), Ok(63));
    }

    #[test]
    fn test_bounds() {
        for c in [
            Coord::new(4, 0, 0),
            Coord::new(0, 4, 0),
            Coord::new(0, 0, 4),
            Coord::new(-1, 0, 0),
            Coord::new(0, -1, 3),
        ] {
            assert_eq!(c.index(), Err(GridError::OutOfRange(c)));
        }
    }

    #[test]
    fn test_carry_target() {
        assert_eq!(Coord::new(0, 2, 1).carry_target(), Some(Coord::new(1, 2, 1)));
        assert_eq!(Coord::new(3, 2, 1).carry_target(), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("1,2,3".parse::<Coord>(), Ok(Coord::new(1, 2, 3)));
        assert_eq!("[0, 1, 2]".parse::<Coord>(), Ok(Coord::new(0, 1, 2)));
        assert_eq!("-1,0,0".parse::<Coord>(), Ok(Coord::new(-1, 0, 0)));
        assert_eq!("1,2".parse::<Coord>(), Err(CoordParseError::WrongArity(2)));
        assert!(matches!("1,x,3".parse::<Coord>(), Err(CoordParseError::InvalidAxis(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(3, 0, 2).to_string(), "[3,0,2]");
    }
}
