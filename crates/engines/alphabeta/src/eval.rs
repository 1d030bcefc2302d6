//! Material and position evaluation.
//!
//! Scores are integers in hundredths of a man, so the linear heuristic
//! `men + 2*kings + 0.5*center + 0.15*edge` becomes `100/200/50/15`.

use draughts_core::{has_capture, Bitboard, Board, Color, State};
use serde::{Deserialize, Serialize};

/// Score of a won position for the side that won.
pub const MAX_UTILITY: i32 = 1_000_000_000;
/// Score of a lost position for the side that lost.
pub const MIN_UTILITY: i32 = -MAX_UTILITY;

/// Weights of the linear evaluation, in hundredths of a man.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub man: i32,
    pub king: i32,
    pub center: i32,
    pub edge: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            man: 100,
            king: 200,
            center: 50,
            edge: 15,
        }
    }
}

/// Per-side counts gathered from a board.
///
/// `advanced` and `capturers` are collected for diagnostics but carry no weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalTerms {
    pub men: i32,
    pub kings: i32,
    pub center: i32,
    pub advanced: i32,
    pub edge: i32,
    pub capturers: i32,
}

impl EvalTerms {
    pub fn collect(board: &Board, color: Color) -> Self {
        let pieces = board.pieces(color);
        let advanced_half = match color {
            Color::Red => Bitboard::TOP_HALF,
            Color::Black => Bitboard::BOTTOM_HALF,
        };
        let capturers = pieces.filter(|&sq| has_capture(board, sq)).count();

        Self {
            men: board.men(color).popcount() as i32,
            kings: board.kings(color).popcount() as i32,
            center: (pieces & Bitboard::CENTER).popcount() as i32,
            advanced: (pieces & advanced_half).popcount() as i32,
            edge: (pieces & Bitboard::EDGES).popcount() as i32,
            capturers: capturers as i32,
        }
    }

    pub fn weighted(&self, w: &EvalWeights) -> i32 {
        w.man * self.men + w.king * self.kings + w.center * self.center + w.edge * self.edge
    }
}

/// Value of `state` for the side that just moved into it, with default weights.
pub fn utility(state: &State) -> i32 {
    utility_with(state, &EvalWeights::default())
}

/// Value of `state` for `state.just_moved()`.
///
/// A finished game scores `MAX_UTILITY` if the side that just moved won and
/// `MIN_UTILITY` otherwise; anything else is the weighted difference of both
/// sides' terms.
pub fn utility_with(state: &State, weights: &EvalWeights) -> i32 {
    let player = state.just_moved();

    if let Some(winner) = state.winner() {
        return if winner == player {
            MAX_UTILITY
        } else {
            MIN_UTILITY
        };
    }

    let mine = EvalTerms::collect(state.board(), player);
    let theirs = EvalTerms::collect(state.board(), player.other());
    mine.weighted(weights) - theirs.weighted(weights)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
