//! Bounded Life-like cellular automaton with editing and generation rewind.
//!
//! ```
//! use life_viewer::{CellState, RuleSet, World};
//!
//! let mut world = World::new(8, 8, "B3/S23".parse::<RuleSet>()?, 0)?;
//! for x in 2..5 {
//!     world.set(x, 3, CellState::Alive)?;
//! }
//! world.advance();
//! world.advance();
//! world.rewind(1)?;
//! assert_eq!(world.grid().population(), 3);
//! # Ok::<(), life_viewer::Error>(())
//! ```
#![warn(clippy::all)]

mod config;
mod engine;
mod error;
mod gui;
mod utils;

pub use config::Config;
pub use engine::{
    next_generation, CellState, GenerationEngine, Grid, History, RuleSet, SteppingController,
    World, MAX_NEIGHBORS,
};
pub use error::{Error, Result};
pub use gui::App;
pub use utils::{parse_rle, NiceInt, Preset, RlePattern};
