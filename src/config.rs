use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::common::GameError;
use crate::ship::ShipSpec;

pub const DEFAULT_BOARD_SIZE: usize = 9;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;
/// Columns are lettered A..=Z.
pub const MAX_BOARD_SIZE: usize = 26;
/// Random anchors tried per ship before placement gives up.
pub const DEFAULT_PLACEMENT_BUDGET: usize = 1000;
/// Full-fleet layouts tried before placement gives up.
pub const DEFAULT_PLACEMENT_RESTARTS: usize = 50;

/// The standard roster as `(name, size, count)`.
pub const DEFAULT_ROSTER: [(&str, usize, usize); 4] = [
    ("Aircraft-carrier", 5, 1),
    ("Battleship", 4, 1),
    ("Destroyer", 3, 3),
    ("Patrol-boat", 2, 2),
];

pub fn default_roster() -> Vec<ShipSpec> {
    DEFAULT_ROSTER
        .iter()
        .map(|&(name, size, count)| ShipSpec::new(name, size, count))
        .collect()
}

/// Settings for a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub board_size: usize,
    pub max_attempts: u32,
    pub roster: Vec<ShipSpec>,
    pub placement_budget: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            roster: default_roster(),
            placement_budget: DEFAULT_PLACEMENT_BUDGET,
        }
    }
}

impl GameConfig {
    /// Total number of ship cells the roster occupies.
    pub fn total_ship_cells(&self) -> usize {
        self.roster.iter().map(ShipSpec::total_cells).sum()
    }

    /// Reject values no game can be built from. A ship longer than the
    /// board can never be placed and is reported as a placement error.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 {
            return Err(GameError::InvalidConfig("board size must be positive".to_string()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "board size must be at most {}",
                MAX_BOARD_SIZE
            )));
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig("attempts must be positive".to_string()));
        }
        if self.placement_budget == 0 {
            return Err(GameError::InvalidConfig(
                "placement budget must be positive".to_string(),
            ));
        }
        if self.roster.is_empty() {
            return Err(GameError::InvalidConfig("ship roster is empty".to_string()));
        }
        for spec in &self.roster {
            if spec.size == 0 || spec.count == 0 {
                return Err(GameError::InvalidConfig(format!(
                    "ship '{}' needs a positive size and count",
                    spec.name
                )));
            }
            if spec.size > self.board_size {
                return Err(GameError::InvalidPlacementConfiguration {
                    ship: spec.name.clone(),
                    attempts: 0,
                });
            }
        }
        Ok(())
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    #[cfg(feature = "std")]
    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}
