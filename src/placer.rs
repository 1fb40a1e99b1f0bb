//! Random ship placement with a one-cell separation between ships.

use alloc::string::String;
use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::common::{Cell, GameError};
use crate::config::{DEFAULT_PLACEMENT_BUDGET, DEFAULT_PLACEMENT_RESTARTS};
use crate::grid::Grid;
use crate::ship::{Orientation, Placement, ShipInstance, ShipSpec};

/// Returns `true` if a ship of `size` anchored at (`row`, `col`) fits on
/// the grid and neither it nor the ring of cells around it touches a ship.
pub fn can_place(grid: &Grid, size: usize, row: usize, col: usize, orientation: Orientation) -> bool {
    let n = grid.size();
    if size == 0 || row >= n || col >= n {
        return false;
    }
    let fits = match orientation {
        Orientation::Horizontal => size <= n - col,
        Orientation::Vertical => size <= n - row,
    };
    if !fits {
        return false;
    }
    // Scan the ship's bounding box grown by one cell on every side.
    let (rows, cols) = match orientation {
        Orientation::Horizontal => (1, size),
        Orientation::Vertical => (size, 1),
    };
    let r0 = row.saturating_sub(1);
    let c0 = col.saturating_sub(1);
    let r1 = (row + rows).min(n - 1);
    let c1 = (col + cols).min(n - 1);
    for r in r0..=r1 {
        for c in c0..=c1 {
            if grid.is_occupied(r, c).unwrap_or(false) {
                return false;
            }
        }
    }
    true
}

/// Lays out a roster on a grid by rejection sampling.
///
/// Each ship gets `budget` random anchors. If a ship runs out, the whole
/// fleet is laid out again from the starting grid, up to `restarts` times.
#[derive(Debug, Clone, Copy)]
pub struct ShipPlacer {
    budget: usize,
    restarts: usize,
}

impl Default for ShipPlacer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEMENT_BUDGET)
    }
}

impl ShipPlacer {
    /// `budget` is the number of random anchors tried per ship.
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            restarts: DEFAULT_PLACEMENT_RESTARTS,
        }
    }

    /// Returns a random valid placement for roster entry `spec_index`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        grid: &Grid,
        roster: &[ShipSpec],
        spec_index: usize,
    ) -> Result<Placement, GameError> {
        let spec = roster.get(spec_index).ok_or_else(|| {
            GameError::InvalidConfig(alloc::format!("no roster entry {}", spec_index))
        })?;
        let n = grid.size();
        if n == 0 || spec.size == 0 || spec.size > n {
            return Err(GameError::InvalidPlacementConfiguration {
                ship: spec.name.clone(),
                attempts: 0,
            });
        }
        for attempt in 1..=self.budget {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..n);
            let col = rng.random_range(0..n);
            if can_place(grid, spec.size, row, col, orientation) {
                debug!(
                    "placed {} at ({}, {}) {:?} after {} attempt(s)",
                    spec.name, row, col, orientation, attempt
                );
                return Ok(Placement {
                    spec_index,
                    row,
                    col,
                    orientation,
                });
            }
        }
        Err(GameError::InvalidPlacementConfiguration {
            ship: spec.name.clone(),
            attempts: self.budget,
        })
    }

    /// Place every instance of every roster entry onto `grid`, which is
    /// expected to start empty. Ships are marked [`Cell::Ship`] as they go.
    /// On error `grid` is left as it was passed in.
    pub fn place_fleet<R: Rng>(
        &self,
        rng: &mut R,
        grid: &mut Grid,
        roster: &[ShipSpec],
    ) -> Result<Vec<ShipInstance>, GameError> {
        let start = grid.clone();
        let mut last_err = None;
        for round in 1..=self.restarts {
            match self.try_place_fleet(rng, grid, roster) {
                Ok(ships) => return Ok(ships),
                Err(err) => {
                    *grid = start.clone();
                    // a ship longer than the board won't fit next round either
                    if let GameError::InvalidPlacementConfiguration { attempts: 0, .. } = err {
                        return Err(err);
                    }
                    debug!("fleet layout round {} failed: {}", round, err);
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or(GameError::InvalidPlacementConfiguration {
            ship: String::new(),
            attempts: self.budget,
        }))
    }

    fn try_place_fleet<R: Rng>(
        &self,
        rng: &mut R,
        grid: &mut Grid,
        roster: &[ShipSpec],
    ) -> Result<Vec<ShipInstance>, GameError> {
        let mut ships = Vec::with_capacity(roster.iter().map(|s| s.count).sum());
        for (spec_index, spec) in roster.iter().enumerate() {
            for _ in 0..spec.count {
                let placement = self.random_placement(rng, grid, roster, spec_index)?;
                ships.push(place(grid, spec, placement)?);
            }
        }
        Ok(ships)
    }
}

/// Validate `placement` against the adjacency rule and mark it on `grid`.
pub fn place(grid: &mut Grid, spec: &ShipSpec, placement: Placement) -> Result<ShipInstance, GameError> {
    if !can_place(grid, spec.size, placement.row, placement.col, placement.orientation) {
        return Err(GameError::InvalidPlacement {
            ship: spec.name.clone(),
        });
    }
    let ship = ShipInstance::new(spec, placement);
    for &(r, c) in ship.cells() {
        grid.set_state(r, c, Cell::Ship)?;
    }
    Ok(ship)
}
