//! Intersection geometry: quadrants, turn classification, and path lookup.
//!
//! # Layout
//!
//! ```text
//!              N
//!        +----+----+
//!        | NW | NE |
//!   W    +----+----+    E
//!        | SW | SE |
//!        +----+----+
//!              S
//! ```
//!
//! Quadrants are numbered `NW=0, NE=1, SE=2, SW=3`, which follows the same
//! clockwise rotation as [`Direction`].  A car heading in direction `d`
//! enters through quadrant `(d + 1) mod 4` and every further quadrant on its
//! path is the next one in that rotation:
//!
//! | Turn     | Quadrants held                       |
//! |----------|--------------------------------------|
//! | Right    | entry                                |
//! | Straight | entry, entry+1                       |
//! | Left     | entry, entry+1, entry+2              |
//!
//! Northbound therefore holds `[NE]`, `[NE, SE]`, or `[NE, SE, SW]`.

use std::fmt;

use crate::Direction;

// ── Quadrant ──────────────────────────────────────────────────────────────────

/// One of the four exclusively-held sub-regions of the intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    pub const COUNT: usize = 4;

    pub const ALL: [Quadrant; Self::COUNT] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// Numeric id.  This is also the global lock order.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Quadrant {
        Self::ALL[i % Self::COUNT]
    }

    /// The two directions whose edges border this quadrant, in clockwise order.
    pub fn bordering(self) -> [Direction; 2] {
        match self {
            Quadrant::NorthWest => [Direction::West, Direction::North],
            Quadrant::NorthEast => [Direction::North, Direction::East],
            Quadrant::SouthEast => [Direction::East, Direction::South],
            Quadrant::SouthWest => [Direction::South, Direction::West],
        }
    }

    /// The quadrant a car heading in `direction` enters first.
    #[inline]
    pub fn entry_for(direction: Direction) -> Quadrant {
        Self::from_index(direction.index() + 1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::NorthWest => "NW",
            Quadrant::NorthEast => "NE",
            Quadrant::SouthEast => "SE",
            Quadrant::SouthWest => "SW",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Turn ──────────────────────────────────────────────────────────────────────

/// Manoeuvre class derived from a car's origin and target headings.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Left,
    Straight,
    Right,
}

impl Turn {
    /// Classify the manoeuvre from `origin` heading to `target` heading.
    ///
    /// A 90° clockwise change is a right turn, 90° counter-clockwise a left
    /// turn.  Keeping the heading, or reversing it, drives straight through.
    pub fn between(origin: Direction, target: Direction) -> Turn {
        if target == origin.clockwise() {
            Turn::Right
        } else if target == origin.counter_clockwise() {
            Turn::Left
        } else {
            Turn::Straight
        }
    }

    /// Number of quadrants the manoeuvre occupies.
    #[inline]
    pub fn quadrant_count(self) -> usize {
        match self {
            Turn::Right    => 1,
            Turn::Straight => 2,
            Turn::Left     => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Turn::Left     => "left",
            Turn::Straight => "straight",
            Turn::Right    => "right",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── QuadrantPath ──────────────────────────────────────────────────────────────

/// The quadrants one crossing occupies, in the order the car drives through
/// them.  At most three; stored inline so paths are `Copy`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct QuadrantPath {
    quads: [Quadrant; 3],
    len:   u8,
}

impl QuadrantPath {
    #[inline]
    pub fn as_slice(&self) -> &[Quadrant] {
        &self.quads[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`: every manoeuvre occupies at least one quadrant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Quadrant> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn contains(&self, quadrant: Quadrant) -> bool {
        self.as_slice().contains(&quadrant)
    }

    /// `true` if the two paths share at least one quadrant.
    pub fn overlaps(&self, other: &QuadrantPath) -> bool {
        self.iter().any(|q| other.contains(q))
    }

    /// Quadrant ids in traversal order, for handing to a lock set.
    pub fn indices(&self) -> Vec<usize> {
        self.iter().map(Quadrant::index).collect()
    }
}

impl fmt::Display for QuadrantPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, q) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(q.as_str())?;
        }
        f.write_str("]")
    }
}

// ── Geometry resolver ─────────────────────────────────────────────────────────

/// Quadrants a car heading `origin` occupies when performing `turn`.
///
/// Pure and total: every `(Direction, Turn)` pair has exactly one path.
pub fn quadrant_path(origin: Direction, turn: Turn) -> QuadrantPath {
    let entry = Quadrant::entry_for(origin).index();
    let quads = [0, 1, 2].map(|step| Quadrant::from_index(entry + step));
    QuadrantPath { quads, len: turn.quadrant_count() as u8 }
}
