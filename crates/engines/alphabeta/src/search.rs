//! Depth-bounded alpha-beta search with a transposition cache.
//!
//! The search is written in negamax form: every value is for the side to move
//! in the state being searched. A MAX node (the searching side to move) and a
//! MIN node (the opponent to move) are the same recursion seen from opposite
//! signs, so the opponent's best reply is the searcher's minimum.
//!
//! A decided result loses one point per ply on its way up the tree, so a
//! win in 3 plies scores `MAX_UTILITY - 3` at the root and beats a win in 5.
//! The adjustment is relative to the node, which keeps cached values valid
//! wherever the position is reached again.

use std::cmp::Reverse;

use draughts_core::{generate_successors, State};

use crate::cache::{Bound, CacheEntry, TranspositionCache};
use crate::eval::{utility_with, EvalWeights, MAX_UTILITY, MIN_UTILITY};

/// Strictly outside every reachable score, so the root window never cuts.
pub const INFINITY: i32 = MAX_UTILITY + 1;

/// Scores this close to `MAX_UTILITY` are proven wins (or, negated, losses).
pub const WIN_BAND: i32 = 1_000;

/// A proven win or loss seen from one ply further up.
#[inline]
pub fn one_ply_back(value: i32) -> i32 {
    if value > MAX_UTILITY - WIN_BAND {
        value - 1
    } else if value < MIN_UTILITY + WIN_BAND {
        value + 1
    } else {
        value
    }
}

/// Is `value` a proven win for the side it is scored for?
pub fn is_proven_win(value: i32) -> bool {
    value > MAX_UTILITY - WIN_BAND
}

/// One search invocation over an engine-owned cache.
pub struct Searcher<'a> {
    cache: &'a mut TranspositionCache,
    weights: EvalWeights,
    nodes: u64,
    cache_hits: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(cache: &'a mut TranspositionCache, weights: EvalWeights) -> Self {
        Self {
            cache,
            weights,
            nodes: 0,
            cache_hits: 0,
        }
    }

    /// Nodes visited so far, cache hits included.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    /// Search `state` with the full window, maximizing for its side to move.
    pub fn search_root(&mut self, state: &State, depth: u8) -> (i32, Option<State>) {
        self.search(state, -INFINITY, INFINITY, depth)
    }

    /// Value of `state` for its side to move, and the successor achieving it.
    ///
    /// The successor is `None` at the horizon, on a finished game, and when the
    /// side to move has no legal move (scored `MIN_UTILITY`).
    pub fn search(
        &mut self,
        state: &State,
        mut alpha: i32,
        beta: i32,
        depth: u8,
    ) -> (i32, Option<State>) {
        self.nodes += 1;

        if let Some(entry) = self.cache.probe(state, depth, alpha, beta).copied() {
            self.cache_hits += 1;
            return (entry.value, entry.best);
        }

        if depth == 0 || state.is_terminal() {
            // utility is for the side that just moved
            return (-utility_with(state, &self.weights), None);
        }

        let mut successors = generate_successors(state);
        if successors.is_empty() {
            self.cache.store(
                *state,
                CacheEntry {
                    value: MIN_UTILITY,
                    depth,
                    bound: Bound::Exact,
                    best: None,
                },
            );
            return (MIN_UTILITY, None);
        }

        order_successors(&mut successors, &self.weights);

        let alpha_orig = alpha;
        let mut best_value = -INFINITY;
        let mut best = successors[0];

        for child in &successors {
            // one_ply_back moves a value by at most 1, so widen the child window
            // by 1 on each side to keep its bounds usable here.
            let (child_value, _) = self.search(child, -beta - 1, -alpha + 1, depth - 1);
            let value = one_ply_back(-child_value);

            if value > best_value {
                best_value = value;
                best = *child;
            }

            if best_value >= beta {
                self.store(state, best_value, depth, Bound::Lower, best);
                return (best_value, Some(best));
            }
            if best_value > alpha {
                alpha = best_value;
            }
            // Partial result: the remaining successors can only raise it.
            if best_value > alpha_orig {
                self.store(state, best_value, depth, Bound::Lower, best);
            }
        }

        let bound = if best_value > alpha_orig {
            Bound::Exact
        } else {
            Bound::Upper
        };
        self.store(state, best_value, depth, bound, best);
        (best_value, Some(best))
    }

    fn store(&mut self, state: &State, value: i32, depth: u8, bound: Bound, best: State) {
        self.cache.store(
            *state,
            CacheEntry {
                value,
                depth,
                bound,
                best: Some(best),
            },
        );
    }
}

/// Most promising successors first, judged by their static score for the
/// side making the move. Ties keep generation order.
pub fn order_successors(successors: &mut [State], weights: &EvalWeights) {
    successors.sort_by_cached_key(|s| Reverse(utility_with(s, weights)));
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
