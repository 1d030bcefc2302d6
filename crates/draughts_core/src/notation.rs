//! Text notation for boards: one line per row, one character per column,
//! using `.` for empty squares and `r`, `R`, `b`, `B` for pieces.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{board::Board, types::*};

/// Reasons a text grid is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row}: expected 8 columns, found {found}")]
    RowWidth { row: usize, found: usize },
    #[error("row {row}, column {col}: invalid cell {ch:?} (expected one of . r R b B)")]
    InvalidCell { row: usize, col: usize, ch: char },
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<&str> = s.lines().map(str::trim_end).collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        if rows.len() != HEIGHT {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != WIDTH {
                return Err(BoardParseError::RowWidth { row, found });
            }
            for (col, ch) in line.chars().enumerate() {
                let piece =
                    Piece::from_char(ch).map_err(|ch| BoardParseError::InvalidCell { row, col, ch })?;
                if let Some(s) = sq(row as i8, col as i8) {
                    board.set_piece(s, piece);
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Eight lines of eight characters, each terminated by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT as i8 {
            for col in 0..WIDTH as i8 {
                let ch = sq(row, col)
                    .and_then(|s| self.piece_at(s))
                    .map_or(EMPTY_CHAR, Piece::to_char);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders a snapshot stream: every board followed by one blank line.
pub fn render_snapshots<'a, I>(boards: I) -> String
where
    I: IntoIterator<Item = &'a Board>,
{
    let mut out = String::new();
    for board in boards {
        out.push_str(&board.to_string());
        out.push('\n');
    }
    out
}

/// Splits a snapshot stream (boards separated by blank lines) back into boards.
pub fn parse_snapshots(text: &str) -> Result<Vec<Board>, BoardParseError> {
    let mut boards = Vec::new();
    let mut block = String::new();
    for line in text.lines() {
        if line.trim_end().is_empty() {
            if !block.is_empty() {
                boards.push(block.parse()?);
                block.clear();
            }
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    if !block.is_empty() {
        boards.push(block.parse()?);
    }
    Ok(boards)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
