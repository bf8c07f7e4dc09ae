//! Bounded exploration of the Tic-Tac-Total state space

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use super::board::{BoardState, Player};
use crate::engine::GameState;

/// Per-depth slice of an exploration
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DepthStats {
    pub depth: usize,
    pub states: u64,
    pub wins_odds: u64,
    pub wins_evens: u64,
    pub draws: u64,
}

/// Aggregate statistics for an exploration
#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeStats {
    /// Distinct states reached (the root counts as depth 0)
    pub states: u64,
    pub terminals: u64,
    pub wins_odds: u64,
    pub wins_evens: u64,
    pub draws: u64,
    /// Whether the depth bound cut the walk short
    pub truncated: bool,
    pub by_depth: Vec<DepthStats>,
}

/// Explore the state space reachable from `root`, breadth-first, visiting
/// each distinct state once and descending at most `max_depth` plies.
/// `tick` is called with the running state count as the walk progresses,
/// for progress reporting.
pub fn explore<F: FnMut(u64)>(root: &BoardState, max_depth: usize, mut tick: F) -> TreeStats {
    let mut stats = TreeStats::default();
    let mut queue: VecDeque<(BoardState, usize)> = VecDeque::new();
    let mut seen: HashSet<String> = HashSet::new();

    seen.insert(root.encode());
    queue.push_back((root.clone(), 0));

    while let Some((state, depth)) = queue.pop_front() {
        stats.states += 1;
        if stats.by_depth.len() <= depth {
            stats.by_depth.push(DepthStats {
                depth,
                ..DepthStats::default()
            });
        }
        let slice = &mut stats.by_depth[depth];
        slice.states += 1;

        match state.winner() {
            Some(Player::Odds) => {
                stats.terminals += 1;
                stats.wins_odds += 1;
                slice.wins_odds += 1;
            }
            Some(Player::Evens) => {
                stats.terminals += 1;
                stats.wins_evens += 1;
                slice.wins_evens += 1;
            }
            None if state.is_full() => {
                stats.terminals += 1;
                stats.draws += 1;
                slice.draws += 1;
            }
            None => {
                if depth < max_depth {
                    for (_, child) in state.transitions() {
                        if seen.insert(child.encode()) {
                            queue.push_back((child, depth + 1));
                        }
                    }
                } else {
                    stats.truncated = true;
                }
            }
        }

        if stats.states % 256 == 0 {
            tick(stats.states);
        }
    }

    tick(stats.states);
    stats
}
