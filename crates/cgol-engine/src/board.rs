//! The N x N toroidal board.
//!
//! Cells live in one contiguous row-major `Vec`, so a board is a flat
//! value: cloning copies it, equality compares it cell by cell, and there
//! are no links between boards.

use std::fmt::{self, Write as _};

use crate::seed::fnv1a64;

/// State of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Empty cell.
    #[default]
    Dead,
    /// Live cell.
    Alive,
}

impl CellState {
    /// Whether the cell is alive.
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    const fn as_byte(self) -> u8 {
        match self {
            Self::Dead => 0,
            Self::Alive => 1,
        }
    }
}

/// Square grid of cells whose edges wrap around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// An all-dead board with side length `size`.
    pub fn dead(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Dead; size.saturating_mul(size)],
        }
    }

    /// Build a board from ASCII rows: `#` (or `O`) is alive, anything else dead.
    ///
    /// The side length is the number of rows. Short rows are padded with
    /// dead cells and long rows truncated. Mostly useful for tests and
    /// for describing known patterns.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Self::dead(size);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(size).enumerate() {
                if matches!(ch, '#' | 'O') {
                    board.set(row, col, CellState::Alive);
                }
            }
        }
        board
    }

    /// Side length N.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Flat index of `(row, col)`, or `None` if out of range.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        row.checked_mul(self.size)?.checked_add(col)
    }

    /// State at `(row, col)`. Out-of-range coordinates read as dead.
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.index_of(row, col)
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .unwrap_or_default()
    }

    /// Set the state at `(row, col)`. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if let Some(idx) = self.index_of(row, col) {
            self.set_index(idx, state);
        }
    }

    /// Set the state at a flat index. Out-of-range indices are ignored.
    pub fn set_index(&mut self, idx: usize, state: CellState) {
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = state;
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// True when no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }

    /// Flat indices of every live cell, in row-major order.
    pub fn alive_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(idx, _)| idx)
    }

    /// 64-bit fingerprint of the cell contents.
    ///
    /// Equal boards always share a fingerprint; unequal boards almost never
    /// do, but callers that need certainty must still compare the boards.
    pub fn fingerprint(&self) -> u64 {
        fnv1a64(self.cells.iter().map(|c| c.as_byte()))
    }

}

/// Rows of `#` and `.`, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                f.write_char(if cell.is_alive() { '#' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dead_board_has_no_population() {
        let board = Board::dead(8);
        assert_eq!(board.size(), 8);
        assert_eq!(board.cells().len(), 64);
        assert_eq!(board.population(), 0);
        assert!(board.is_extinct());
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut board = Board::dead(5);
        board.set(2, 3, CellState::Alive);
        assert_eq!(board.get(2, 3), CellState::Alive);
        assert_eq!(board.get(3, 2), CellState::Dead);
        assert_eq!(board.index_of(2, 3), Some(13));
        assert_eq!(board.population(), 1);
    }

    #[test]
    fn out_of_range_access_is_harmless() {
        let mut board = Board::dead(3);
        board.set(3, 0, CellState::Alive);
        board.set_index(99, CellState::Alive);
        assert_eq!(board.get(0, 7), CellState::Dead);
        assert!(board.is_extinct());
    }

    #[test]
    fn from_rows_parses_pattern() {
        let board = Board::from_rows(&["....", ".##.", ".##.", "...."]);
        assert_eq!(board.size(), 4);
        assert_eq!(board.population(), 4);
        assert_eq!(board.alive_indices().collect::<Vec<_>>(), vec![5, 6, 9, 10]);
        assert_eq!(board.to_string(), "....\n.##.\n.##.\n....\n");
    }

    #[test]
    fn fingerprint_tracks_contents() {
        let a = Board::from_rows(&["#..", "...", "..."]);
        let b = Board::from_rows(&["#..", "...", "..."]);
        let c = Board::from_rows(&[".#.", "...", "..."]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
