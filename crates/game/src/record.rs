//! Game records: the snapshot sequence plus per-ply search statistics

use std::io::{self, Write};
use std::path::Path;

use draughts_core::{render_snapshots, Color, State};
use serde::{Deserialize, Serialize};

use crate::runner::GameError;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win(Color),
    /// The ply cap was reached
    Draw,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Win(color) => Some(color),
            GameOutcome::Draw => None,
        }
    }
}

/// Statistics for one half-move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    /// 1-based ply number
    pub ply: u32,
    pub mover: Color,
    pub player: String,
    /// Search score for the mover
    pub score: i32,
    pub nodes: u64,
    pub cache_hits: u64,
    /// Board after the move, in text notation
    pub board: String,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Every state of the game, the initial one first
    pub snapshots: Vec<State>,
    pub plies: Vec<PlyRecord>,
    pub outcome: GameOutcome,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    outcome: GameOutcome,
    initial: String,
    plies: &'a [PlyRecord],
}

impl GameRecord {
    pub fn initial(&self) -> Option<&State> {
        self.snapshots.first()
    }

    pub fn final_state(&self) -> Option<&State> {
        self.snapshots.last()
    }

    pub fn ply_count(&self) -> usize {
        self.plies.len()
    }

    /// All snapshots in text notation, each board followed by a blank line.
    pub fn snapshot_text(&self) -> String {
        render_snapshots(self.snapshots.iter().map(State::board))
    }

    pub fn write_snapshots<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.snapshot_text().as_bytes())?;
        writer.flush()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let record = JsonRecord {
            outcome: self.outcome,
            initial: self
                .initial()
                .map(|s| s.board().to_string())
                .unwrap_or_default(),
            plies: &self.plies,
        };
        serde_json::to_string_pretty(&record)
    }

    /// Write the per-ply record as pretty JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
