//! Snapshot-per-generation history.
//!
//! Index 0 holds the initial grid and index `n` the grid after `n` generations.
//! [`History::restore`] only moves the current index. Entries after it are
//! dropped lazily by the next [`History::push`] or [`History::amend`], so until
//! then they stay reachable for forward replay.

use super::grid::Grid;
use crate::{Error, Result};

pub struct History {
    /// All snapshots, oldest first; never empty.
    snapshots: Vec<Grid>,
    /// Index of the snapshot matching the live grid.
    current: usize,
    /// Sum of `Grid::bytes_total` over `snapshots`.
    snapshot_bytes: usize,
}

impl History {
    /// Starts a history whose generation 0 is `initial`.
    pub fn new(initial: Grid) -> Self {
        Self {
            snapshot_bytes: initial.bytes_total(),
            snapshots: vec![initial],
            current: 0,
        }
    }

    /// Records the next generation, dropping any entries after the current one.
    pub fn push(&mut self, snapshot: Grid) {
        self.truncate_future();
        self.snapshot_bytes += snapshot.bytes_total();
        self.snapshots.push(snapshot);
        self.current = self.snapshots.len() - 1;
    }

    /// Makes `index` the current generation and returns its snapshot.
    pub fn restore(&mut self, index: usize) -> Result<&Grid> {
        if index >= self.snapshots.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.current = index;
        Ok(&self.snapshots[index])
    }

    /// Replaces the current entry after a manual edit.
    ///
    /// An edit is not a generation: nothing is appended, but entries after the
    /// current one no longer follow from it and are dropped.
    pub fn amend(&mut self, snapshot: Grid) {
        self.truncate_future();
        let old = std::mem::replace(&mut self.snapshots[self.current], snapshot);
        self.snapshot_bytes = self.snapshot_bytes - old.bytes_total()
            + self.snapshots[self.current].bytes_total();
    }

    fn truncate_future(&mut self) {
        let dropped = self.snapshots.len() - self.current - 1;
        if dropped > 0 {
            log::debug!(
                "Dropping {} snapshots after generation {}",
                dropped,
                self.current
            );
            let freed = self.snapshots[self.current + 1..]
                .iter()
                .map(Grid::bytes_total)
                .sum::<usize>();
            self.snapshot_bytes -= freed;
            self.snapshots.truncate(self.current + 1);
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Grid {
        &self.snapshots[self.current]
    }

    pub fn get(&self, index: usize) -> Option<&Grid> {
        self.snapshots.get(index)
    }

    /// Number of stored snapshots, including any not yet truncated after a rewind.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: the initial generation is never dropped.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether a later generation is still reachable after a rewind.
    pub fn can_replay(&self) -> bool {
        self.current + 1 < self.snapshots.len()
    }

    /// Heap memory retained by the snapshots. Constant time.
    pub fn bytes_total(&self) -> usize {
        self.snapshots.capacity() * std::mem::size_of::<Grid>() + self.snapshot_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellState;

    /// Grid whose population encodes `generation`.
    fn marked(generation: usize) -> Grid {
        let mut grid = Grid::new(8, 8).unwrap();
        for i in 0..generation {
            grid.set(i % 8, i / 8, CellState::Alive).unwrap();
        }
        grid
    }

    fn filled(n: usize) -> History {
        let mut history = History::new(marked(0));
        for g in 1..n {
            history.push(marked(g));
        }
        history
    }

    #[test]
    fn test_push() {
        let history = filled(6);
        assert_eq!(history.len(), 6);
        assert_eq!(history.current_index(), 5);
        assert_eq!(history.current().population(), 5);
        assert!(!history.is_empty());
        assert!(!history.can_replay());
    }

    #[test]
    fn test_restore_keeps_future_until_next_action() {
        let mut history = filled(6);
        assert_eq!(history.restore(2).unwrap().population(), 2);
        assert_eq!(history.current_index(), 2);
        assert_eq!(history.len(), 6);
        assert!(history.can_replay());

        // replaying forward is still possible
        assert_eq!(history.restore(4).unwrap().population(), 4);
        history.restore(2).unwrap();
        assert_eq!(history.get(5).unwrap().population(), 5);
    }

    #[test]
    fn test_step_after_restore_truncates() {
        let mut history = filled(6);
        history.restore(2).unwrap();
        history.push(marked(42));
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_index(), 3);
        assert_eq!(history.current().population(), 42);
        assert_eq!(history.get(2).unwrap().population(), 2);
        assert!(history.get(4).is_none());
    }

    #[test]
    fn test_edit_after_restore_truncates_and_overwrites() {
        let mut history = filled(6);
        history.restore(2).unwrap();
        history.amend(marked(17));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_eq!(history.current().population(), 17);
        assert_eq!(history.get(1).unwrap().population(), 1);
    }

    #[test]
    fn test_edit_at_last_entry_does_not_append() {
        let mut history = filled(3);
        history.amend(marked(9));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().population(), 9);
    }

    #[test]
    fn test_restore_out_of_range() {
        let mut history = filled(3);
        assert_eq!(
            history.restore(3).unwrap_err(),
            Error::IndexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(history.current_index(), 2);
        assert!(history.restore(0).is_ok());
    }

    #[test]
    fn test_bytes_grow_with_snapshots() {
        let small = filled(2).bytes_total();
        let large = filled(20).bytes_total();
        assert!(large > small);
    }

    #[test]
    fn test_bytes_follow_truncation_and_amend() {
        let recount = |history: &History| {
            history.snapshots.capacity() * std::mem::size_of::<Grid>()
                + history.snapshots.iter().map(Grid::bytes_total).sum::<usize>()
        };
        let mut history = filled(6);
        assert_eq!(history.bytes_total(), recount(&history));

        history.restore(2).unwrap();
        history.amend(Grid::new(20, 20).unwrap());
        assert_eq!(history.len(), 3);
        assert_eq!(history.bytes_total(), recount(&history));

        history.push(marked(3));
        history.restore(0).unwrap();
        history.push(Grid::new(2, 2).unwrap());
        assert_eq!(history.len(), 2);
        assert_eq!(history.bytes_total(), recount(&history));
    }
}
