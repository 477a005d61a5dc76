//! Conway's Game of Life transition (B3/S23) on a toroidal board.
//!
//! Every cell has exactly eight neighbour slots: the row above and below
//! and the column left and right wrap around the edges. On boards smaller
//! than 3x3 several slots alias the same cell and it is counted once per
//! slot.

use crate::board::{Board, CellState};

/// Result of one generation: the next board and how many cells were born.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The board after the step.
    pub board: Board,
    /// Dead cells that became alive during the step.
    pub births: u64,
}

/// Advance `board` by one generation.
pub fn step(board: &Board) -> Board {
    transition(board).board
}

/// Advance `board` by one generation, counting births along the way.
pub fn transition(board: &Board) -> Transition {
    let size = board.size();
    let mut next = Board::dead(size);
    let mut births: u64 = 0;

    for row in 0..size {
        for col in 0..size {
            let current = board.get(row, col);
            let state = next_state(current, live_neighbors(board, row, col));
            if state.is_alive() {
                if !current.is_alive() {
                    births = births.saturating_add(1);
                }
                next.set(row, col, state);
            }
        }
    }

    Transition {
        board: next,
        births,
    }
}

/// Apply the B3/S23 rule to one cell.
pub const fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match (current, live_neighbors) {
        (CellState::Alive, 2 | 3) | (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Count live cells among the eight toroidal neighbours of `(row, col)`.
pub fn live_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let size = board.size();
    let rows = [wrap_prev(row, size), row, wrap_next(row, size)];
    let cols = [wrap_prev(col, size), col, wrap_next(col, size)];

    let mut count: u8 = 0;
    for (dr, &r) in rows.iter().enumerate() {
        for (dc, &c) in cols.iter().enumerate() {
            if dr == 1 && dc == 1 {
                continue;
            }
            if board.get(r, c).is_alive() {
                count = count.saturating_add(1);
            }
        }
    }
    count
}

const fn wrap_prev(i: usize, size: usize) -> usize {
    if i == 0 { size.saturating_sub(1) } else { i.saturating_sub(1) }
}

const fn wrap_next(i: usize, size: usize) -> usize {
    let n = i.saturating_add(1);
    if n >= size { 0 } else { n }
}
