//! Common types: cell states, attack results, game status and errors.

use alloc::string::String;

/// State of a single grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Water nobody has fired at.
    Empty,
    /// Intact ship segment.
    Ship,
    /// Ship segment that has been hit.
    Hit,
    /// Water the player fired at.
    Miss,
    /// Water next to a sunk ship, marked automatically.
    MissRing,
}

impl Cell {
    /// Returns `true` once the cell has been resolved by play. Resolved
    /// cells never change again.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss | Cell::MissRing)
    }
}

/// Outcome of a single attack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Attack landed in open water and cost an attempt.
    Miss,
    /// Attack hit a ship that is still afloat.
    Hit,
    /// Attack sank a ship, carrying its name.
    HitAndSunk(String),
    /// Attack sank the last ship.
    Won,
    /// Attack used up the last attempt.
    Lost,
    /// Coordinate was already resolved; nothing changed.
    AlreadyResolved,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` or `Lost`; no further attack changes the game.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Errors returned by grid, placement and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside `[0, size)`.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The roster cannot be laid out on the board within the retry budget.
    InvalidPlacementConfiguration { ship: String, attempts: usize },
    /// An explicit placement leaves the board or touches another ship.
    InvalidPlacement { ship: String },
    /// A configuration value is unusable.
    InvalidConfig(String),
    /// A ship cell has no ship instance covering it.
    UnknownShipHit { row: usize, col: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col, size } => {
                write!(f, "Coordinate ({}, {}) is outside a {}x{} board", row, col, size, size)
            }
            GameError::InvalidPlacementConfiguration { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts; the roster does not fit the board",
                ship, attempts
            ),
            GameError::InvalidPlacement { ship } => {
                write!(f, "Placement of {} is out of bounds or touches another ship", ship)
            }
            GameError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
            GameError::UnknownShipHit { row, col } => {
                write!(f, "Hit at ({}, {}) does not belong to any ship", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
