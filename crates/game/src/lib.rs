//! Game driver for draughts
//!
//! This crate provides infrastructure for:
//! - Playing a game from any starting board and recording every snapshot
//! - Running matches between players from the standard opening
//! - Loading engine and driver settings from TOML
//!
//! # Usage
//!
//! ```bash
//! # Self-play from a board file, writing every position
//! cargo run -p game -- play --inputfile board.txt --outputfile game.txt
//!
//! # Alpha-beta against the random baseline
//! cargo run -p game -- match --games 20 --depth 5 --opponent random
//! ```

mod config;
mod match_runner;
mod record;
mod results;
mod runner;

pub use config::*;
pub use match_runner::*;
pub use record::*;
pub use results::*;
pub use runner::*;
