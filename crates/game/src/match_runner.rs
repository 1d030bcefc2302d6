//! Match runner for playing games between players

use draughts_core::{Board, Color, Player, State};
use tracing::info;

use crate::config::DEFAULT_MAX_PLIES;
use crate::record::GameOutcome;
use crate::results::{GameResult, MatchResult};
use crate::runner::{GameError, GameRunner};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for players
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_plies: DEFAULT_MAX_PLIES,
            alternate_colors: true,
        }
    }
}

/// Runs matches between two players from the standard opening
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two players
    ///
    /// Returns the result from player1's perspective
    pub fn run_match(
        &self,
        player1: &mut dyn Player,
        player2: &mut dyn Player,
    ) -> Result<MatchResult, GameError> {
        let runner = GameRunner::new(self.config.depth).with_max_plies(self.config.max_plies);
        let initial = State::initial(Board::standard());
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let player1_red = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if player1_red {
                runner.play(initial, player1, player2)?
            } else {
                runner.play(initial, player2, player1)?
            };

            let red_result = match record.outcome {
                GameOutcome::Win(Color::Red) => GameResult::Win,
                GameOutcome::Win(Color::Black) => GameResult::Loss,
                GameOutcome::Draw => GameResult::Draw,
            };
            let game_result = if player1_red {
                red_result
            } else {
                red_result.flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                color = if player1_red { "red" } else { "black" },
                result = ?game_result,
                plies = record.ply_count(),
                score = %result.summary(),
                "game complete"
            );
        }

        Ok(result)
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    player1: &mut dyn Player,
    player2: &mut dyn Player,
    num_games: u32,
    depth: u8,
) -> Result<MatchResult, GameError> {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(player1, player2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
