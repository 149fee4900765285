mod grid;
mod history;
mod rule;
mod step;
mod stepping;
mod world;


pub use grid::{CellState, Grid};
pub use history::History;
pub use rule::{RuleSet, MAX_NEIGHBORS};
pub use step::{next_generation, GenerationEngine};
pub use stepping::SteppingController;
pub use world::World;
