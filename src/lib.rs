#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placer;
mod ship;
#[cfg(feature = "std")]
pub mod terminal;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level_from_env};
pub use placer::{can_place, place, ShipPlacer};
pub use ship::*;
