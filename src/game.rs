use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::{
    common::{AttackResult, Cell, GameError, GameStatus},
    config::GameConfig,
    grid::Grid,
    placer::{self, ShipPlacer},
    ship::{Placement, ShipInstance, ShipSpec},
};

/// A single cell transition, reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub cell: Cell,
}

/// Segments of a ship that were never hit, revealed when the game is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct UnrevealedShip {
    pub name: String,
    pub cells: Vec<(usize, usize)>,
}

/// Hooks a presentation layer implements to follow a game.
pub trait GameObserver {
    /// A cell changed state.
    fn cell_changed(&mut self, _change: CellChange) {}

    /// A ship has just been sunk.
    fn ship_sunk(&mut self, _ship: &ShipInstance) {}

    /// The game reached `Won` or `Lost`. `unrevealed` is empty on a win.
    fn game_over(&mut self, _status: GameStatus, _unrevealed: &[UnrevealedShip]) {}
}

impl GameObserver for () {}

impl GameObserver for Vec<CellChange> {
    fn cell_changed(&mut self, change: CellChange) {
        self.push(change);
    }
}

/// Game state plus the rules that resolve attacks against it.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    roster: Vec<ShipSpec>,
    ships: Vec<ShipInstance>,
    remaining: Vec<usize>,
    row_hints: Vec<usize>,
    col_hints: Vec<usize>,
    attempts_remaining: u32,
    status: GameStatus,
}

impl Game {
    /// Start a game with a randomly placed fleet.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let mut grid = Grid::new(config.board_size);
        let ships = ShipPlacer::new(config.placement_budget).place_fleet(rng, &mut grid, &config.roster)?;
        Self::start(config, grid, ships)
    }

    /// Start a game from explicit placements. Every roster instance must be
    /// covered exactly once.
    pub fn with_placements(config: &GameConfig, placements: &[Placement]) -> Result<Self, GameError> {
        config.validate()?;
        let mut grid = Grid::new(config.board_size);
        let mut placed = alloc::vec![0usize; config.roster.len()];
        let mut ships = Vec::with_capacity(placements.len());
        for &placement in placements {
            let spec = config.roster.get(placement.spec_index).ok_or_else(|| {
                GameError::InvalidConfig(alloc::format!("no roster entry {}", placement.spec_index))
            })?;
            placed[placement.spec_index] += 1;
            ships.push(placer::place(&mut grid, spec, placement)?);
        }
        for (spec, &n) in config.roster.iter().zip(&placed) {
            if n != spec.count {
                return Err(GameError::InvalidConfig(alloc::format!(
                    "expected {} placement(s) of {}, got {}",
                    spec.count,
                    spec.name,
                    n
                )));
            }
        }
        Self::start(config, grid, ships)
    }

    fn start(config: &GameConfig, grid: Grid, ships: Vec<ShipInstance>) -> Result<Self, GameError> {
        let n = grid.size();
        let row_hints: Vec<usize> = (0..n).map(|r| grid.row_ship_count(r)).collect::<Result<_, _>>()?;
        let col_hints: Vec<usize> = (0..n).map(|c| grid.col_ship_count(c)).collect::<Result<_, _>>()?;
        info!(
            "new game: {}x{} board, {} ship(s), {} attempt(s)",
            n,
            n,
            ships.len(),
            config.max_attempts
        );
        Ok(Self {
            grid,
            remaining: config.roster.iter().map(|s| s.count).collect(),
            roster: config.roster.clone(),
            ships,
            row_hints,
            col_hints,
            attempts_remaining: config.max_attempts,
            status: GameStatus::Ongoing,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ships(&self) -> &[ShipInstance] {
        &self.ships
    }

    pub fn roster(&self) -> &[ShipSpec] {
        &self.roster
    }

    /// Current phase of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Misses left before the game is lost.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Ship cells per row as laid out at the start of the game.
    pub fn row_hints(&self) -> &[usize] {
        &self.row_hints
    }

    /// Ship cells per column as laid out at the start of the game.
    pub fn col_hints(&self) -> &[usize] {
        &self.col_hints
    }

    /// Ships still afloat per roster entry, in roster order. Entries whose
    /// count reached zero are left out.
    pub fn remaining_ships(&self) -> Vec<(&str, usize)> {
        self.roster
            .iter()
            .zip(&self.remaining)
            .filter(|(_, n)| **n > 0)
            .map(|(spec, &n)| (spec.name.as_str(), n))
            .collect()
    }

    /// Sum of ships still afloat across the roster.
    pub fn ships_remaining(&self) -> usize {
        self.remaining.iter().sum()
    }

    /// Unhit segments of every ship that is not sunk.
    pub fn unrevealed(&self) -> Vec<UnrevealedShip> {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk())
            .map(|s| UnrevealedShip {
                name: String::from(s.name()),
                cells: s
                    .cells()
                    .iter()
                    .copied()
                    .filter(|&(r, c)| self.grid.get(r, c) != Ok(Cell::Hit))
                    .collect(),
            })
            .collect()
    }

    /// Fire at (row, col) without observing intermediate changes.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<AttackResult, GameError> {
        self.attack_with(row, col, &mut ())
    }

    /// Fire at (row, col), reporting every cell change, sink and the end of
    /// the game to `observer`.
    pub fn attack_with<O: GameObserver + ?Sized>(
        &mut self,
        row: usize,
        col: usize,
        observer: &mut O,
    ) -> Result<AttackResult, GameError> {
        let cell = self.grid.get(row, col)?;
        match self.status {
            GameStatus::Won => return Ok(AttackResult::Won),
            GameStatus::Lost => return Ok(AttackResult::Lost),
            GameStatus::Ongoing => {}
        }
        match cell {
            Cell::Hit | Cell::Miss | Cell::MissRing => {
                debug!("({}, {}) already resolved as {:?}", row, col, cell);
                Ok(AttackResult::AlreadyResolved)
            }
            Cell::Empty => {
                self.set(row, col, Cell::Miss, observer)?;
                self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
                debug!("miss at ({}, {}), {} attempt(s) left", row, col, self.attempts_remaining);
                if self.attempts_remaining == 0 {
                    self.finish(GameStatus::Lost, observer);
                    Ok(AttackResult::Lost)
                } else {
                    Ok(AttackResult::Miss)
                }
            }
            Cell::Ship => {
                let idx = self
                    .ships
                    .iter()
                    .position(|s| s.contains(row, col))
                    .ok_or(GameError::UnknownShipHit { row, col })?;
                self.set(row, col, Cell::Hit, observer)?;
                self.ships[idx].register_hit(row, col);
                if !self.ships[idx].is_sunk() {
                    return Ok(AttackResult::Hit);
                }
                self.sink(idx, observer)?;
                if self.ships_remaining() == 0 {
                    self.finish(GameStatus::Won, observer);
                    Ok(AttackResult::Won)
                } else {
                    Ok(AttackResult::HitAndSunk(String::from(self.ships[idx].name())))
                }
            }
        }
    }

    fn set<O: GameObserver + ?Sized>(
        &mut self,
        row: usize,
        col: usize,
        cell: Cell,
        observer: &mut O,
    ) -> Result<(), GameError> {
        self.grid.set_state(row, col, cell)?;
        observer.cell_changed(CellChange { row, col, cell });
        Ok(())
    }

    /// Decrement the ship's roster count and ring it with `MissRing` cells.
    fn sink<O: GameObserver + ?Sized>(&mut self, idx: usize, observer: &mut O) -> Result<(), GameError> {
        let spec_index = self.ships[idx].spec_index();
        self.remaining[spec_index] = self.remaining[spec_index].saturating_sub(1);
        info!("{} sunk, {} ship(s) left", self.ships[idx].name(), self.ships_remaining());

        let grid = &self.grid;
        let ring: Vec<(usize, usize)> = self.ships[idx]
            .cells()
            .iter()
            .flat_map(|&(r, c)| grid.neighbours(r, c))
            .filter(|&(r, c)| grid.get(r, c) == Ok(Cell::Empty))
            .collect();
        for (r, c) in ring {
            // Neighbouring segments share ring cells; mark each once.
            if self.grid.get(r, c)? == Cell::Empty {
                self.set(r, c, Cell::MissRing, observer)?;
            }
        }
        observer.ship_sunk(&self.ships[idx]);
        Ok(())
    }

    fn finish<O: GameObserver + ?Sized>(&mut self, status: GameStatus, observer: &mut O) {
        self.status = status;
        let unrevealed = match status {
            GameStatus::Lost => self.unrevealed(),
            _ => Vec::new(),
        };
        info!("game over: {:?}", status);
        observer.game_over(status, &unrevealed);
    }
}
