//! Alpha-Beta Draughts Engine
//!
//! Fixed-depth alpha-beta search with a material-and-position evaluation
//! and a transposition cache owned by the engine.

pub mod cache;
pub mod eval;
pub mod search;

use draughts_core::{Player, SearchResult, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use cache::{Bound, CacheEntry, TranspositionCache};
pub use eval::{utility, utility_with, EvalTerms, EvalWeights, MAX_UTILITY, MIN_UTILITY};
pub use search::{is_proven_win, one_ply_back, order_successors, Searcher, INFINITY, WIN_BAND};

/// Search depth in plies used when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 9;

/// When the transposition cache is emptied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Keep results for the whole game; clear only on `new_game`.
    #[default]
    PerGame,
    /// Clear before every move.
    PerMove,
}

/// Draughts engine using alpha-beta search over a transposition cache.
///
/// The root search always maximizes for the side whose turn it is, so the same
/// engine can play either color (or both, in self-play).
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    cache: TranspositionCache,
    weights: EvalWeights,
    cache_policy: CachePolicy,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Player for AlphaBetaEngine {
    fn search(&mut self, state: &State, depth: u8) -> SearchResult {
        if self.cache_policy == CachePolicy::PerMove {
            self.cache.clear();
        }

        let mut searcher = Searcher::new(&mut self.cache, self.weights);
        let (score, best) = searcher.search_root(state, depth);
        let nodes = searcher.nodes();
        let cache_hits = searcher.cache_hits();
        self.nodes = nodes;

        debug!(
            turn = ?state.next_turn(),
            depth,
            score,
            proven_win = is_proven_win(score),
            nodes,
            cache_hits,
            cache_size = self.cache.len(),
            "alpha-beta search finished"
        );

        SearchResult {
            best,
            score,
            depth,
            nodes,
            cache_hits,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.cache.clear();
        self.nodes = 0;
    }
}
