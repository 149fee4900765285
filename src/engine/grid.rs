use crate::{Error, Result};
use std::fmt;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

/// Fixed-size rectangular field of cells, stored row-major.
///
/// Coordinates outside `[0, width) x [0, height)` are rejected, there is no wraparound.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        // a Vec can't hold more than isize::MAX bytes
        let size = width
            .checked_mul(height)
            .filter(|&size| size != 0 && size <= isize::MAX as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            cells: vec![CellState::Dead; size],
            width,
            height,
        })
    }

    /// Creates a grid with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(width: usize, height: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        grid.randomize(seed, fill_rate);
        Ok(grid)
    }

    /// Refills every cell, alive with probability `fill_rate` (clamped to `[0, 1]`).
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let p = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(p).into();
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether signed coordinates (e.g. from a pointer) land on the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(x + y * self.width)
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<CellState> {
        Ok(self.cells[self.index(x, y)?])
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<CellState> {
        let i = self.index(x, y)?;
        self.cells[i] = self.cells[i].flipped();
        Ok(self.cells[i])
    }

    /// Independent copy of the whole grid.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Overwrites the contents in place with those of `other`.
    pub fn restore_from(&mut self, other: &Grid) -> Result<()> {
        if self.size() != other.size() {
            return Err(Error::DimensionMismatch {
                expected: self.size(),
                found: other.size(),
            });
        }
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Stamps the live cells of `pattern` with its top left corner at `(x, y)`.
    ///
    /// Fails without touching the grid if the pattern doesn't fit.
    pub fn paste(&mut self, pattern: &Grid, x: usize, y: usize) -> Result<()> {
        self.index(x, y)?;
        let out_of_bounds = || Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        let x2 = x.checked_add(pattern.width - 1).ok_or_else(out_of_bounds)?;
        let y2 = y.checked_add(pattern.height - 1).ok_or_else(out_of_bounds)?;
        self.index(x2, y2)?;
        for (px, py) in pattern.iter_alive() {
            let i = (x + px) + (y + py) * self.width;
            self.cells[i] = CellState::Alive;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Row-major cell slice, `cells()[x + y * width]`.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Vec<CellState> {
        &mut self.cells
    }

    /// Coordinates of live cells in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i % w, i / w))
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Live cells among the 8 Moore neighbors; off-grid positions don't count.
    pub fn live_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        self.index(x, y)?;
        Ok(count_neighbors(&self.cells, self.width, self.height, x, y))
    }

    /// Heap memory used by the cells.
    pub fn bytes_total(&self) -> usize {
        self.cells.capacity() * std::mem::size_of::<CellState>()
    }
}

/// Neighbor count of `(x, y)` in a row-major `w x h` buffer, without wraparound.
#[inline]
pub(crate) fn count_neighbors(cells: &[CellState], w: usize, h: usize, x: usize, y: usize) -> u8 {
    let (x1, x2) = (x.saturating_sub(1), (x + 1).min(w - 1));
    let (y1, y2) = (y.saturating_sub(1), (y + 1).min(h - 1));
    let mut count = 0;
    for ny in y1..=y2 {
        let row = &cells[ny * w..(ny + 1) * w];
        for nx in x1..=x2 {
            count += row[nx] as u8;
        }
    }
    count - cells[x + y * w] as u8
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line = row
                .iter()
                .map(|c| if c.is_alive() { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::*;

    #[test]
    fn test_new_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.size(), (4, 3));
        assert_eq!(grid.population(), 0);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y).unwrap(), Dead);
            }
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (0, 0)] {
            assert_eq!(
                Grid::new(w, h).unwrap_err(),
                Error::InvalidDimension {
                    width: w,
                    height: h
                }
            );
        }
    }

    #[test]
    fn test_huge_dimensions_are_rejected() {
        for (w, h) in [(usize::MAX, 2), (2, usize::MAX), (usize::MAX, usize::MAX)] {
            assert!(matches!(
                Grid::new(w, h),
                Err(Error::InvalidDimension { .. })
            ));
        }
        assert!(Grid::new(isize::MAX as usize, 2).is_err());
    }

    #[test]
    fn test_bounds() {
        let mut grid = Grid::new(3, 2).unwrap();
        assert!(grid.get(3, 0).is_err());
        assert!(grid.get(0, 2).is_err());
        assert!(matches!(
            grid.set(5, 5, Alive),
            Err(Error::OutOfBounds { x: 5, y: 5, .. })
        ));
        assert!(grid.toggle(3, 1).is_err());
        assert_eq!(grid.population(), 0);

        assert!(grid.contains(2, 1));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, 2));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert_eq!(grid.toggle(1, 2).unwrap(), Alive);
        assert_eq!(grid.get(1, 2).unwrap(), Alive);
        assert_eq!(grid.toggle(1, 2).unwrap(), Dead);
        assert_eq!(grid.get(1, 2).unwrap(), Dead);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, Alive).unwrap();
        let snapshot = grid.snapshot();
        grid.set(0, 0, Alive).unwrap();
        assert_eq!(snapshot.get(0, 0).unwrap(), Dead);
        assert_eq!(snapshot.population(), 1);
    }

    #[test]
    fn test_restore_from() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut other = Grid::new(3, 3).unwrap();
        other.set(2, 2, Alive).unwrap();
        grid.restore_from(&other).unwrap();
        assert_eq!(grid, other);

        let before = grid.clone();
        let wrong = Grid::new(3, 4).unwrap();
        assert_eq!(
            grid.restore_from(&wrong).unwrap_err(),
            Error::DimensionMismatch {
                expected: (3, 3),
                found: (3, 4)
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_paste() {
        let mut block = Grid::new(2, 2).unwrap();
        block.set(0, 0, Alive).unwrap();
        block.set(1, 1, Alive).unwrap();

        let mut grid = Grid::new(4, 4).unwrap();
        grid.paste(&block, 2, 1).unwrap();
        assert_eq!(grid.iter_alive().collect::<Vec<_>>(), vec![(2, 1), (3, 2)]);

        let before = grid.clone();
        assert!(grid.paste(&block, 3, 0).is_err());
        assert!(grid.paste(&block, 0, 3).is_err());
        assert!(grid.paste(&block, usize::MAX, 0).is_err());
        assert!(grid.paste(&block, 0, usize::MAX).is_err());
        assert!(matches!(
            grid.paste(&block, 3, usize::MAX),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_corner_neighbors() {
        let mut grid = Grid::new(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                grid.set(x, y, Alive).unwrap();
            }
        }
        assert_eq!(grid.live_neighbors(0, 0).unwrap(), 3);
        assert_eq!(grid.live_neighbors(3, 3).unwrap(), 3);
        assert_eq!(grid.live_neighbors(0, 2).unwrap(), 5);
        assert_eq!(grid.live_neighbors(1, 1).unwrap(), 8);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, Alive).unwrap();
        assert_eq!(grid.live_neighbors(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Grid::random(32, 16, Some(42), 0.3).unwrap();
        let b = Grid::random(32, 16, Some(42), 0.3).unwrap();
        assert_eq!(a, b);
        assert!(a.population() > 0);
        assert_eq!(Grid::random(8, 8, Some(1), 0.).unwrap().population(), 0);
        assert_eq!(Grid::random(8, 8, Some(1), 1.).unwrap().population(), 64);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 0, Alive).unwrap();
        assert_eq!(grid.to_string(), ".#.\n...\n");
    }
}
