//! Ship templates and placed ship instances.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::GameError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Coordinates covered by a ship of `size` anchored at (`row`, `col`).
    /// No bounds checking is done here.
    pub fn cells(self, row: usize, col: usize, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }
}

/// Roster entry: ship name, length and how many of them to place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    pub name: String,
    pub size: usize,
    pub count: usize,
}

impl ShipSpec {
    /// A roster entry of `count` ships, each `size` cells long.
    pub fn new(name: &str, size: usize, count: usize) -> Self {
        Self {
            name: name.to_string(),
            size,
            count,
        }
    }

    /// Number of grid cells all instances of this spec occupy.
    pub fn total_cells(&self) -> usize {
        self.size * self.count
    }
}

impl fmt::Display for ShipSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.size, self.count)
    }
}

/// Parses `NAME:SIZE:COUNT`, e.g. `Patrol-boat:2:2`.
impl FromStr for ShipSpec {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GameError::InvalidConfig(alloc::format!("malformed ship entry '{}'", s));
        let mut parts = s.rsplitn(3, ':');
        let count = parts.next().ok_or_else(malformed)?.trim();
        let size = parts.next().ok_or_else(malformed)?.trim();
        let name = parts.next().ok_or_else(malformed)?.trim();
        if name.is_empty() {
            return Err(malformed());
        }
        Ok(ShipSpec {
            name: name.to_string(),
            size: size.parse().map_err(|_| malformed())?,
            count: count.parse().map_err(|_| malformed())?,
        })
    }
}

/// Anchor and orientation for one ship of roster entry `spec_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub spec_index: usize,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// A ship placed on the board, tracking how many of its segments were hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipInstance {
    spec_index: usize,
    name: String,
    orientation: Orientation,
    cells: Vec<(usize, usize)>,
    hits: usize,
}

impl ShipInstance {
    pub fn new(spec: &ShipSpec, placement: Placement) -> Self {
        let cells = placement
            .orientation
            .cells(placement.row, placement.col, spec.size)
            .collect();
        Self {
            spec_index: placement.spec_index,
            name: spec.name.clone(),
            orientation: placement.orientation,
            cells,
            hits: 0,
        }
    }

    /// Index of the roster entry this ship was built from.
    pub fn spec_index(&self) -> usize {
        self.spec_index
    }

    /// Roster name, shared by every instance of the spec.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied coordinates, ordered from the anchor outward.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Number of segments.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if one of the ship's segments sits at (row, col).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Count a hit on one of this ship's segments. The caller guarantees
    /// each segment is reported at most once.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.contains(row, col) && self.hits < self.cells.len() {
            self.hits += 1;
            true
        } else {
            false
        }
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.cells.len()
    }
}
