//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p draughts_core -- [depth] [board-file]
//!
//! Examples:
//!   # Default: depth 8 from the standard opening
//!   cargo flamegraph --example perft_bench -p draughts_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p draughts_core -- 9
//!
//!   # Custom depth and position read from an 8x8 text grid, Red to move
//!   cargo flamegraph --example perft_bench -p draughts_core -- 7 puzzles/endgame.txt

use draughts_core::{Board, State, perft};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    let board = match args.get(2) {
        Some(path) => {
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Failed to read {path}: {e}");
                    return;
                }
            };
            match text.parse::<Board>() {
                Ok(board) => board,
                Err(e) => {
                    eprintln!("Invalid board in {path}: {e}");
                    return;
                }
            }
        }
        None => Board::standard(),
    };

    run_single_position(State::initial(board), depth);
}

fn run_single_position(state: State, depth: u8) {
    println!("Position:\n{}", state.board());
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&state, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&state, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}
