//! Word-to-board encoding.
//!
//! Every string, including the empty string and arbitrary Unicode, maps to
//! a board without failure. The empty word always maps to the all-dead
//! board, whatever the policy.
//!
//! # Policies
//!
//! - [`EncodingPolicy::Scatter`]: the word's FNV-1a hash seeds an
//!   `xorshift64` sequence that drives a partial Fisher-Yates shuffle of
//!   the cell indices. The first `round(N*N * density / 100)` shuffled
//!   cells start alive, so every non-empty word produces exactly the same
//!   population, spread across the whole board.
//! - [`EncodingPolicy::Bitstring`]: the word's UTF-8 bytes are laid out as
//!   bits (most significant first) along the middle row, centred. A word
//!   longer than one row continues onto the following rows, wrapping past
//!   the bottom edge back to the top; overlapping bits combine with OR.

use crate::board::{Board, CellState};
use crate::config::EncodingPolicy;
use crate::seed::{XorShift64, fnv1a64};

/// Encode `word` onto a fresh `size` x `size` board.
pub fn encode(word: &str, size: usize, policy: EncodingPolicy) -> Board {
    if word.is_empty() {
        return Board::dead(size);
    }
    match policy {
        EncodingPolicy::Scatter { density_percent } => scatter(word, size, density_percent),
        EncodingPolicy::Bitstring => bitstring(word, size),
    }
}

/// Number of cells a scatter encoding marks alive on a board of `cell_count` cells.
pub fn scatter_population(cell_count: usize, density_percent: u8) -> usize {
    let scaled = cell_count
        .saturating_mul(usize::from(density_percent.min(100)))
        .saturating_add(50);
    scaled / 100
}

fn scatter(word: &str, size: usize, density_percent: u8) -> Board {
    let mut board = Board::dead(size);
    let cell_count = board.cells().len();
    let alive = scatter_population(cell_count, density_percent);

    let mut rng = XorShift64::new(fnv1a64(word.bytes()));
    let mut order: Vec<usize> = (0..cell_count).collect();
    for i in 0..alive {
        let remaining = cell_count.saturating_sub(i);
        let j = i.saturating_add(rng.below(remaining));
        order.swap(i, j);
        if let Some(&idx) = order.get(i) {
            board.set_index(idx, CellState::Alive);
        }
    }
    board
}

fn bitstring(word: &str, size: usize) -> Board {
    let mut board = Board::dead(size);
    let cell_count = board.cells().len();
    if cell_count == 0 {
        return board;
    }

    let bit_count = word.len().saturating_mul(8);
    let start_col = size.saturating_sub(bit_count) / 2;
    let start = (size / 2).saturating_mul(size).saturating_add(start_col);

    let bits = word
        .bytes()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1));
    for (offset, bit) in bits.enumerate() {
        if bit && let Some(idx) = start.wrapping_add(offset).checked_rem(cell_count) {
            board.set_index(idx, CellState::Alive);
        }
    }
    board
}
