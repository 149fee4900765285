use super::{CellState, GenerationEngine, Grid, History, RuleSet, SteppingController};
use crate::{Preset, Result};
use std::time::Duration;

/// The live automaton: one authoritative grid plus everything that acts on it.
///
/// Every mutation goes through here so that the history always describes the
/// live grid: generation advances are pushed, manual edits amend the current
/// entry and rewinds copy a snapshot back into the grid.
pub struct World {
    grid: Grid,
    rule: RuleSet,
    engine: GenerationEngine,
    history: History,
    stepping: SteppingController,
}

impl World {
    /// Blank `width x height` world; generation 0 is the empty grid.
    pub fn new(width: usize, height: usize, rule: RuleSet, speed: u32) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(width, height)?, rule, speed))
    }

    /// World whose generation 0 is `grid`.
    pub fn from_grid(grid: Grid, rule: RuleSet, speed: u32) -> Self {
        log::info!(
            "Created {}x{} world, rule {}, speed {}",
            grid.width(),
            grid.height(),
            rule,
            speed
        );
        Self {
            history: History::new(grid.snapshot()),
            grid,
            rule,
            engine: GenerationEngine::new(),
            stepping: SteppingController::new(speed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> &RuleSet {
        &self.rule
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn stepping(&self) -> &SteppingController {
        &self.stepping
    }

    /// Index of the generation currently shown.
    pub fn generation(&self) -> usize {
        self.history.current_index()
    }

    pub fn speed(&self) -> u32 {
        self.stepping.speed()
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.stepping.set_speed(speed);
    }

    /// Called once per frame while running; advances when the speed says so.
    ///
    /// Returns whether a generation was advanced.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let due = self.stepping.tick(dt);
        if due {
            self.advance();
        }
        due
    }

    /// Computes the next generation and records it.
    pub fn advance(&mut self) {
        self.engine.step(&mut self.grid, &self.rule);
        self.history.push(self.grid.snapshot());
        log::info!(
            "Gen Index = {}, history: {} snapshots, {} bytes",
            self.history.current_index(),
            self.history.len(),
            self.history.bytes_total()
        );
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> Result<CellState> {
        let state = self.grid.toggle(x, y)?;
        log::debug!("Toggled ({}, {}) to {:?}", x, y, state);
        self.history.amend(self.grid.snapshot());
        Ok(state)
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        self.grid.set(x, y, state)?;
        log::debug!("Set ({}, {}) to {:?}", x, y, state);
        self.history.amend(self.grid.snapshot());
        Ok(())
    }

    /// Kills every cell. Counts as an edit of the current generation.
    pub fn clear(&mut self) {
        self.grid.clear();
        log::debug!("Cleared grid");
        self.history.amend(self.grid.snapshot());
    }

    /// Refills the current generation randomly.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        self.grid.randomize(seed, fill_rate);
        log::debug!("Randomized grid, population {}", self.grid.population());
        self.history.amend(self.grid.snapshot());
    }

    /// Clears the grid and stamps `preset` in its centre.
    pub fn load_preset(&mut self, preset: Preset) -> Result<()> {
        let pattern = preset.grid();
        let x = self.grid.width().saturating_sub(pattern.width()) / 2;
        let y = self.grid.height().saturating_sub(pattern.height()) / 2;
        let mut grid = Grid::new(self.grid.width(), self.grid.height())?;
        grid.paste(&pattern, x, y)?;
        self.grid = grid;
        log::debug!("Loaded preset {} at ({}, {})", preset.name(), x, y);
        self.history.amend(self.grid.snapshot());
        Ok(())
    }

    /// Makes generation `index` the live grid.
    ///
    /// Later generations stay available for [`Self::step_forward`] until the
    /// next edit or advance.
    pub fn rewind(&mut self, index: usize) -> Result<()> {
        let snapshot = self.history.restore(index)?;
        self.grid.restore_from(snapshot)?;
        log::debug!(
            "Rewound to generation {} of {}",
            index,
            self.history.len() - 1
        );
        Ok(())
    }

    /// Goes back one generation; `false` at generation 0.
    pub fn step_back(&mut self) -> Result<bool> {
        match self.generation().checked_sub(1) {
            Some(index) => self.rewind(index).map(|_| true),
            None => Ok(false),
        }
    }

    /// Replays one generation recorded before a rewind; `false` if there is none.
    pub fn step_forward(&mut self) -> Result<bool> {
        if !self.history.can_replay() {
            return Ok(false);
        }
        self.rewind(self.generation() + 1).map(|_| true)
    }

    /// Back to generation 0.
    pub fn reset(&mut self) -> Result<()> {
        self.rewind(0)
    }

    /// Heap memory of the grid, the scratch buffer and the history.
    pub fn bytes_total(&self) -> usize {
        self.grid.bytes_total() + self.engine.bytes_total() + self.history.bytes_total()
    }
}
