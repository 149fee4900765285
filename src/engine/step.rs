use super::grid::{count_neighbors, CellState, Grid};
use super::rule::RuleSet;

/// Computes generations of a [`Grid`] under a [`RuleSet`].
///
/// Keeps a second cell buffer so that every cell of the next generation is
/// computed from the frozen previous one; the buffers are swapped afterwards.
#[derive(Default)]
pub struct GenerationEngine {
    cells_next: Vec<CellState>,
    generations: u64,
}

impl GenerationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of `grid` with its next generation.
    pub fn step(&mut self, grid: &mut Grid, rule: &RuleSet) {
        let (w, h) = grid.size();
        // a grid of another shape just gets a fresh buffer
        self.cells_next.resize(w * h, CellState::Dead);

        let cells_curr = grid.cells();
        for y in 0..h {
            for x in 0..w {
                let idx = x + y * w;
                let neibs = count_neighbors(cells_curr, w, h, x, y);
                self.cells_next[idx] = next_state(cells_curr[idx], neibs, rule);
            }
        }
        std::mem::swap(&mut self.cells_next, grid.cells_mut());
        self.generations += 1;
    }

    /// Applies [`Self::step`] `n` times.
    pub fn steps(&mut self, grid: &mut Grid, rule: &RuleSet, n: usize) {
        for _ in 0..n {
            self.step(grid, rule);
        }
    }

    /// Number of generations computed by this engine so far.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Heap memory of the scratch buffer.
    pub fn bytes_total(&self) -> usize {
        self.cells_next.capacity() * std::mem::size_of::<CellState>()
    }
}

#[inline]
fn next_state(state: CellState, neibs: u8, rule: &RuleSet) -> CellState {
    match state {
        CellState::Alive if !rule.is_survival(neibs) => CellState::Dead,
        CellState::Dead if rule.is_birth(neibs) => CellState::Alive,
        _ => state,
    }
}

/// Pure form of [`GenerationEngine::step`]: returns the next generation of `grid`.
pub fn next_generation(grid: &Grid, rule: &RuleSet) -> Grid {
    let mut next = grid.snapshot();
    GenerationEngine::new().step(&mut next, rule);
    next
}
