//! Termination detection: run the automaton until a board repeats.
//!
//! Each visited board is recorded in a [`Trace`]. A table maps board
//! fingerprints to the trace indices that produced them, so checking
//! whether the current board has been seen is O(1) amortized. A
//! fingerprint hit is only accepted after an exact board comparison.
//!
//! A run stops at the first of:
//!
//! - the current board is extinct (all dead, hence stable),
//! - the current board equals an earlier board in the same run,
//! - the generation counter reaches the cap.
//!
//! In every case the reported generation is the trace index of the
//! board that triggered the stop, and that board is the last entry of
//! the trace.

use std::collections::HashMap;

use crate::automaton;
use crate::board::Board;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The board at `repeat_at` equals the board first seen at `first_seen`.
    Cycle {
        /// Index of the earlier occurrence.
        first_seen: u32,
        /// Index at which the repeat was observed.
        repeat_at: u32,
    },
    /// The board at `at` has no live cells.
    Extinct {
        /// Index of the first all-dead board.
        at: u32,
    },
    /// The cap was reached without a repeat.
    Capped {
        /// The cap, which is also the final trace index.
        at: u32,
    },
}

impl Termination {
    /// The generation index reported to callers.
    pub const fn generations(self) -> u32 {
        match self {
            Self::Cycle { repeat_at, .. } => repeat_at,
            Self::Extinct { at } | Self::Capped { at } => at,
        }
    }

    /// Cycle period, when the run ended on a repeat.
    pub const fn period(self) -> Option<u32> {
        match self {
            Self::Cycle {
                first_seen,
                repeat_at,
            } => Some(repeat_at.saturating_sub(first_seen)),
            Self::Extinct { .. } | Self::Capped { .. } => None,
        }
    }

    /// Short label for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cycle { .. } => "cycle",
            Self::Extinct { .. } => "extinct",
            Self::Capped { .. } => "capped",
        }
    }
}

/// Every board visited by one run, in order, plus per-step birth counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    boards: Vec<Board>,
    births: Vec<u64>,
}

impl Trace {
    /// Boards from the initial board (index 0) to the terminal board.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// `births()[i]` is the number of births in the step from board `i` to `i + 1`.
    pub fn births(&self) -> &[u64] {
        &self.births
    }

    /// Number of recorded boards.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The board at generation `index`.
    pub fn board(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// The terminal board.
    pub fn last(&self) -> Option<&Board> {
        self.boards.last()
    }
}

/// A completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Every board visited.
    pub trace: Trace,
    /// Why the run stopped.
    pub termination: Termination,
}

impl Run {
    /// The generation index reported to callers.
    pub const fn generations(&self) -> u32 {
        self.termination.generations()
    }
}

/// Step from `initial` until extinction, a repeat, or `max_generations`.
pub fn run_until_repeat(initial: Board, max_generations: u32) -> Run {
    let mut trace = Trace::default();
    let mut seen: HashMap<u64, Vec<usize>> = HashMap::new();
    let mut current = initial;
    let mut generation: u32 = 0;

    let termination = loop {
        if current.is_extinct() {
            break Termination::Extinct { at: generation };
        }

        let fingerprint = current.fingerprint();
        if let Some(first_seen) = find_previous(&seen, &trace, fingerprint, &current) {
            break Termination::Cycle {
                first_seen,
                repeat_at: generation,
            };
        }

        if generation >= max_generations {
            break Termination::Capped { at: generation };
        }

        let step = automaton::transition(&current);
        seen.entry(fingerprint).or_default().push(trace.boards.len());
        trace.boards.push(current);
        trace.births.push(step.births);
        current = step.board;
        generation = generation.saturating_add(1);
    };

    trace.boards.push(current);
    Run { trace, termination }
}

/// Earliest trace index holding a board identical to `board`.
fn find_previous(
    seen: &HashMap<u64, Vec<usize>>,
    trace: &Trace,
    fingerprint: u64,
    board: &Board,
) -> Option<u32> {
    let candidates = seen.get(&fingerprint)?;
    candidates
        .iter()
        .copied()
        .find(|&idx| trace.board(idx) == Some(board))
        .and_then(|idx| u32::try_from(idx).ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::board::CellState;

    #[test]
    fn empty_board_terminates_immediately() {
        let run = run_until_repeat(Board::dead(8), 1000);
        assert_eq!(run.termination, Termination::Extinct { at: 0 });
        assert_eq!(run.generations(), 0);
        assert_eq!(run.trace.len(), 1);
        assert!(run.trace.births().is_empty());
    }

    #[test]
    fn still_life_repeats_after_one_step() {
        let block = Board::from_rows(&["......", ".##...", ".##...", "......", "......", "......"]);
        let run = run_until_repeat(block, 1000);
        assert_eq!(
            run.termination,
            Termination::Cycle {
                first_seen: 0,
                repeat_at: 1
            }
        );
        assert_eq!(run.termination.period(), Some(1));
    }

    #[test]
    fn blinker_has_period_two() {
        let blinker = Board::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]);
        let run = run_until_repeat(blinker, 1000);
        assert_eq!(
            run.termination,
            Termination::Cycle {
                first_seen: 0,
                repeat_at: 2
            }
        );
        assert_eq!(run.trace.len(), 3);
        assert_eq!(run.trace.board(0), run.trace.board(2));
    }

    #[test]
    fn lone_cell_dies_in_one_step() {
        let mut board = Board::dead(6);
        board.set(3, 3, CellState::Alive);
        let run = run_until_repeat(board, 1000);
        assert_eq!(run.termination, Termination::Extinct { at: 1 });
        assert!(run.trace.last().unwrap().is_extinct());
    }

    #[test]
    fn cap_stops_long_runs() {
        let glider = Board::from_rows(&[
            ".#........",
            "..#.......",
            "###.......",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        let run = run_until_repeat(glider, 5);
        assert_eq!(run.termination, Termination::Capped { at: 5 });
        assert_eq!(run.generations(), 5);
        assert_eq!(run.trace.len(), 6);
        assert_eq!(run.trace.births().len(), 5);
    }

    #[test]
    fn period_only_reported_for_cycles() {
        assert_eq!(Termination::Extinct { at: 4 }.period(), None);
        assert_eq!(Termination::Capped { at: 9 }.period(), None);
        assert_eq!(
            Termination::Cycle {
                first_seen: 3,
                repeat_at: 7
            }
            .period(),
            Some(4)
        );
    }

    #[test]
    fn zero_cap_returns_initial_board() {
        let blinker = Board::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]);
        let run = run_until_repeat(blinker.clone(), 0);
        assert_eq!(run.termination, Termination::Capped { at: 0 });
        assert_eq!(run.trace.boards(), &[blinker]);
    }

    #[test]
    fn glider_cycle_found_on_small_torus() {
        let glider = Board::from_rows(&[".#....", "..#...", "###...", "......", "......", "......"]);
        let run = run_until_repeat(glider, 1000);
        assert_eq!(
            run.termination,
            Termination::Cycle {
                first_seen: 0,
                repeat_at: 24
            }
        );
    }

    #[test]
    fn fingerprint_collision_is_not_a_repeat() {
        // Plant a bogus entry under the fingerprint of a board that was
        // never visited; exact comparison must reject it.
        let visited = Board::from_rows(&["#..", "...", "..."]);
        let probe = Board::from_rows(&[".#.", "...", "..."]);
        let trace = Trace {
            boards: vec![visited],
            births: Vec::new(),
        };
        let mut seen = HashMap::new();
        seen.insert(probe.fingerprint(), vec![0_usize]);
        assert_eq!(find_previous(&seen, &trace, probe.fingerprint(), &probe), None);
    }
}
