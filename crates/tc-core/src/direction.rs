//! Compass directions.
//!
//! The canonical order is clockwise starting at North: `N=0, E=1, S=2, W=3`.
//! Every per-direction array in the workspace (head-of-line tokens, flow
//! counters) is indexed with [`Direction::index`], and the quadrant geometry
//! in [`crate::geometry`] is defined relative to the same rotation.

use std::fmt;
use std::str::FromStr;

use crate::TcError;

/// One of the four approaches to the intersection.
///
/// A car's direction is its heading: a car with origin `North` drives
/// northbound through the intersection unless it turns.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Number of directions.  Sizes every per-direction array.
    pub const COUNT: usize = 4;

    /// All directions in canonical (clockwise) order.
    pub const ALL: [Direction; Self::COUNT] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    /// Position in the canonical order, for direct array indexing.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`][Self::index]; wraps modulo 4.
    #[inline]
    pub fn from_index(i: usize) -> Direction {
        Self::ALL[i % Self::COUNT]
    }

    /// The direction 90° clockwise from `self`.
    #[inline]
    pub fn clockwise(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    /// The direction 90° counter-clockwise from `self`.
    #[inline]
    pub fn counter_clockwise(self) -> Direction {
        Self::from_index(self.index() + 3)
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        Self::from_index(self.index() + 2)
    }

    /// Arrow glyph used in console narration (`^ > v <`).
    pub fn glyph(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East  => '>',
            Direction::South => 'v',
            Direction::West  => '<',
        }
    }

    /// Single-letter label (`N E S W`), used in CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East  => "E",
            Direction::South => "S",
            Direction::West  => "W",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TcError;

    /// Accepts `N`/`E`/`S`/`W`, the full names (any case), or the arrow
    /// glyphs `^ > v <`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" | "^" => Ok(Direction::North),
            "e" | "east"  | ">" => Ok(Direction::East),
            "s" | "south" | "v" => Ok(Direction::South),
            "w" | "west"  | "<" => Ok(Direction::West),
            other => Err(TcError::Parse(format!(
                "invalid direction {other:?}: expected N/E/S/W, a compass name, or one of ^ > v <"
            ))),
        }
    }
}
