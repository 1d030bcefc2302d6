//! Random Move Draughts Player
//!
//! A simple player that picks uniformly among all legal successors.
//! Useful for:
//! - Testing the game driver before pitting real engines against each other
//! - Baseline comparisons (the alpha-beta engine should easily beat this)
//! - Stress testing move generation

use draughts_core::{successors_into, Player, SearchResult, State};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A draughts player that picks random legal successors.
///
/// There is no evaluation; mandatory captures still apply because the
/// choice is made from the generated successors.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
    nodes: u64,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible player for tests and matches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn search(&mut self, state: &State, _depth: u8) -> SearchResult {
        let mut successors = Vec::with_capacity(16);
        successors_into(state, &mut successors);

        self.nodes = 1;

        let best = successors.choose(&mut self.rng).copied();

        SearchResult {
            best,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            cache_hits: 0,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
