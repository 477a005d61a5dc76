//! Trace scoring.
//!
//! A score is a pure function of the whole recorded trace, so two runs
//! that stop at the same generation can still score differently.

use crate::config::ScoringPolicy;
use crate::detector::Trace;

/// Score `trace` under `policy`.
pub fn score(trace: &Trace, policy: ScoringPolicy) -> u64 {
    match policy {
        ScoringPolicy::DistinctCells => distinct_cells(trace),
        ScoringPolicy::Births => total_births(trace),
    }
}

/// Number of cells alive on at least one board of the trace.
pub fn distinct_cells(trace: &Trace) -> u64 {
    let Some(first) = trace.boards().first() else {
        return 0;
    };
    let mut ever_alive = vec![false; first.cells().len()];
    for board in trace.boards() {
        for idx in board.alive_indices() {
            if let Some(flag) = ever_alive.get_mut(idx) {
                *flag = true;
            }
        }
    }
    let count = ever_alive.iter().filter(|&&alive| alive).count();
    u64::try_from(count).unwrap_or(u64::MAX)
}

/// Sum of births over every transition in the trace.
pub fn total_births(trace: &Trace) -> u64 {
    trace
        .births()
        .iter()
        .fold(0_u64, |acc, &b| acc.saturating_add(b))
}
