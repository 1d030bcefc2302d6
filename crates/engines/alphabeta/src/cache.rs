//! Transposition cache keyed on the exact state (board contents and side to move).

use std::collections::HashMap;

use draughts_core::State;

/// How a stored value relates to the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The value is exact for the stored depth.
    Exact,
    /// The true value is at least the stored value (the search failed high).
    Lower,
    /// The true value is at most the stored value (the search failed low).
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    /// Value for the side to move in the keyed state
    pub value: i32,
    /// Remaining depth the value was searched to
    pub depth: u8,
    pub bound: Bound,
    /// Best successor found, if the state had any
    pub best: Option<State>,
}

impl CacheEntry {
    /// Can this entry answer a query at `depth` with window `(alpha, beta)`?
    ///
    /// A shallower entry never answers a deeper query.
    pub fn answers(&self, depth: u8, alpha: i32, beta: i32) -> bool {
        if self.depth < depth {
            return false;
        }
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.value >= beta,
            Bound::Upper => self.value <= alpha,
        }
    }
}

/// Search results owned by one engine. Grows without eviction until cleared.
#[derive(Debug, Clone, Default)]
pub struct TranspositionCache {
    entries: HashMap<State, CacheEntry>,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored entry for `state`, whatever its depth or bound.
    pub fn get(&self, state: &State) -> Option<&CacheEntry> {
        self.entries.get(state)
    }

    /// The stored entry for `state` if it can answer this query.
    pub fn probe(&self, state: &State, depth: u8, alpha: i32, beta: i32) -> Option<&CacheEntry> {
        self.entries
            .get(state)
            .filter(|entry| entry.answers(depth, alpha, beta))
    }

    /// Store `entry`, replacing whatever was there.
    pub fn store(&mut self, state: State, entry: CacheEntry) {
        self.entries.insert(state, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
