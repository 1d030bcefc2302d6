//! Game driver: alternates two players from a starting state until the game ends

use draughts_core::{generate_successors, Color, Player, State};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{GameConfig, DEFAULT_MAX_PLIES};
use crate::record::{GameOutcome, GameRecord, PlyRecord};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("ply {ply}: {player} returned a state that is not a legal successor")]
    IllegalMove { ply: u32, player: String },
    #[error("ply {ply}: {player} returned no move although legal moves exist")]
    MissingMove { ply: u32, player: String },
    #[error("failed to write game record")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize game record")]
    Json(#[from] serde_json::Error),
}

/// Plays single games between two players.
#[derive(Debug, Clone)]
pub struct GameRunner {
    depth: u8,
    max_plies: u32,
}

impl Default for GameRunner {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl GameRunner {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            max_plies: DEFAULT_MAX_PLIES,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            depth: config.depth,
            max_plies: config.max_plies,
        }
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Play one game from `initial`.
    ///
    /// The game ends when a side has no pieces left, when the side to move has
    /// no legal successor (that side loses), or as a draw after `max_plies`.
    pub fn play(
        &self,
        initial: State,
        red: &mut dyn Player,
        black: &mut dyn Player,
    ) -> Result<GameRecord, GameError> {
        red.new_game();
        black.new_game();

        let mut snapshots = vec![initial];
        let mut plies = Vec::new();
        let mut state = initial;

        let outcome = loop {
            if let Some(winner) = state.winner() {
                break GameOutcome::Win(winner);
            }

            let ply = plies.len() as u32 + 1;
            if ply > self.max_plies {
                warn!(max_plies = self.max_plies, "ply limit reached, declaring a draw");
                break GameOutcome::Draw;
            }

            let mover = state.next_turn();
            let player: &mut dyn Player = match mover {
                Color::Red => &mut *red,
                Color::Black => &mut *black,
            };

            let legal = generate_successors(&state);
            let result = player.search(&state, self.depth);

            let next = match result.best {
                Some(next) if legal.contains(&next) => next,
                Some(_) => {
                    return Err(GameError::IllegalMove {
                        ply,
                        player: player.name().to_string(),
                    });
                }
                None if legal.is_empty() => {
                    debug!(ply, ?mover, "no legal move");
                    break GameOutcome::Win(mover.other());
                }
                None => {
                    return Err(GameError::MissingMove {
                        ply,
                        player: player.name().to_string(),
                    });
                }
            };

            debug!(
                ply,
                ?mover,
                player = player.name(),
                score = result.score,
                nodes = result.nodes,
                cache_hits = result.cache_hits,
                "move played"
            );

            plies.push(PlyRecord {
                ply,
                mover,
                player: player.name().to_string(),
                score: result.score,
                nodes: result.nodes,
                cache_hits: result.cache_hits,
                board: next.board().to_string(),
            });
            snapshots.push(next);
            state = next;
        };

        info!(?outcome, plies = plies.len(), "game finished");

        Ok(GameRecord {
            snapshots,
            plies,
            outcome,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
