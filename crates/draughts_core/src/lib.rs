pub mod bitboard;
pub mod board;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not player-specific)
pub use bitboard::*;
pub use board::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Player trait: implemented by the alpha-beta engine and the random baseline
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The chosen successor state (None if the side to move has no legal move)
    pub best: Option<State>,
    /// Evaluation for the side to move, in hundredths of a man
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Number of nodes answered from the transposition cache
    pub cache_hits: u64,
}

/// Trait that all draughts players must implement.
///
/// This allows swapping between the alpha-beta engine and baselines such as
/// the random player in the game driver and match harness.
pub trait Player: Send {
    /// Pick the next state for the side to move in `state`.
    ///
    /// # Arguments
    /// * `state` - The current state to analyze
    /// * `depth` - Search depth in plies
    ///
    /// # Returns
    /// SearchResult containing the chosen successor, score, and statistics
    fn search(&mut self, state: &State, depth: u8) -> SearchResult;

    /// Returns the player's name for logs and match reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear caches, etc.)
    fn new_game(&mut self) {}
}
