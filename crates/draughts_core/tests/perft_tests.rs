use std::time::Instant;

use rayon::prelude::*;

use draughts_core::{Board, State, generate_successors, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

/// Successor counts from the standard opening, Red to move.
const STANDARD_COUNTS: &[(u8, u64)] = &[
    (1, 7),
    (2, 49),
    (3, 302),
    (4, 1469),
    (5, 7361),
    (6, 36768),
    (7, 179740),
    (8, 845931),
];

const QUICK_DEPTH_LIMIT: u8 = 6;

#[test]
fn perft_from_standard_opening() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let state = State::initial(Board::standard());

    for &(depth, expected) in STANDARD_COUNTS {
        if !full && depth > QUICK_DEPTH_LIMIT {
            eprintln!("Skipping depth {depth} (expected {expected} nodes); set {FULL_PERFT_ENV}=1 to run all.");
            continue;
        }
        let start = Instant::now();
        let got = perft(&state, depth);
        assert!(
            got == expected,
            "Perft mismatch at depth {}: expected {}, got {}",
            depth,
            expected,
            got
        );
        println!("depth {depth}: {got} nodes in {:.3?}", start.elapsed());
    }
}

#[test]
fn perft_split_matches_sequential() {
    // A middlegame with kings on both sides, so backward moves and chains are exercised.
    let board: Board = "\
.b...b..
..b.....
.....B..
........
...R....
..r.b...
.r...r..
........
"
    .parse()
    .unwrap();

    for turn in [draughts_core::Color::Red, draughts_core::Color::Black] {
        let state = State::new(board, turn);
        let depth = 5;
        let sequential = perft(&state, depth);
        let split: u64 = generate_successors(&state)
            .par_iter()
            .map(|child| perft(child, depth - 1))
            .sum();
        assert_eq!(sequential, split);
        assert!(sequential > 0);
    }
}

#[test]
fn perft_of_blocked_side_is_zero() {
    let board: Board = "\
.b......
r.......
........
........
........
........
........
........
"
    .parse()
    .unwrap();
    let state = State::initial(board);
    assert_eq!(perft(&state, 0), 1);
    assert_eq!(perft(&state, 1), 0);
    assert_eq!(perft(&state, 3), 0);
}
