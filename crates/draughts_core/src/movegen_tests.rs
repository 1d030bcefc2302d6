use super::*;

fn at(row: i8, col: i8) -> u8 {
    sq(row, col).unwrap()
}

/// Build a board from `(row, col, cell)` triples.
fn place(pieces: &[(i8, i8, char)]) -> Board {
    let mut board = Board::empty();
    for &(row, col, ch) in pieces {
        board.set_piece(at(row, col), Piece::from_char(ch).unwrap());
    }
    board
}

#[test]
fn test_startpos_successors() {
    let state = State::initial(Board::standard());
    let successors = generate_successors(&state);
    // Red's front row can make seven simple moves
    assert_eq!(successors.len(), 7);
    assert!(successors.iter().all(|s| s.next_turn() == Color::Black));
}

#[test]
fn test_black_men_move_down() {
    let board = place(&[(2, 3, 'b'), (7, 0, 'r')]);
    let successors = generate_successors(&State::new(board, Color::Black));
    let targets: Vec<_> = successors
        .iter()
        .map(|s| s.board().piece_at(at(3, 2)).or(s.board().piece_at(at(3, 4))))
        .collect();
    assert_eq!(successors.len(), 2);
    assert!(targets.iter().all(|p| *p == Some(Piece::man(Color::Black))));
}

#[test]
fn test_forced_capture_excludes_simple_moves() {
    // The man on (5,2) can jump; the man on (5,6) could only step.
    let board = place(&[(5, 2, 'r'), (4, 3, 'b'), (5, 6, 'r'), (0, 1, 'b')]);
    let state = State::initial(board);
    assert!(any_capture(&state));

    let successors = generate_successors(&state);
    assert_eq!(successors.len(), 1);
    let after = successors[0].board();
    assert_eq!(after.piece_at(at(3, 4)), Some(Piece::man(Color::Red)));
    assert_eq!(after.piece_at(at(4, 3)), None);
    assert_eq!(after.piece_at(at(5, 6)), Some(Piece::man(Color::Red)));
    assert_eq!(successors[0].next_turn(), Color::Black);
}

#[test]
fn test_multi_jump_is_a_single_successor() {
    let board = place(&[(6, 1, 'r'), (5, 2, 'b'), (3, 4, 'b'), (0, 7, 'b')]);
    let successors = generate_successors(&State::initial(board));
    assert_eq!(successors.len(), 1);

    let after = successors[0].board();
    assert_eq!(after.piece_at(at(2, 5)), Some(Piece::man(Color::Red)));
    assert_eq!(after.count(Color::Black), 1);
    assert_eq!(successors[0].next_turn(), Color::Black);
}

#[test]
fn test_branching_chains_produce_each_ending() {
    // From (6,3) Red can take (5,2) or (5,4); each branch continues once more.
    let board = place(&[
        (6, 3, 'r'),
        (5, 2, 'b'),
        (3, 2, 'b'),
        (5, 4, 'b'),
        (3, 6, 'b'),
    ]);
    let successors = generate_successors(&State::initial(board));
    assert_eq!(successors.len(), 2);
    for s in &successors {
        assert_eq!(s.board().count(Color::Black), 2);
        assert_eq!(s.board().men(Color::Red).popcount(), 1);
    }
}

#[test]
fn test_single_jump_then_promote_ends_chain() {
    // Landing on row 0 crowns the man; the new king may not continue over (1,4).
    let board = place(&[(2, 1, 'r'), (1, 2, 'b'), (1, 4, 'b')]);
    let successors = generate_successors(&State::initial(board));
    assert_eq!(successors.len(), 1);

    let after = successors[0].board();
    assert_eq!(after.piece_at(at(0, 3)), Some(Piece::king(Color::Red)));
    assert_eq!(after.piece_at(at(1, 4)), Some(Piece::man(Color::Black)));
    assert_eq!(successors[0].next_turn(), Color::Black);
}

#[test]
fn test_multi_jump_then_promote_ends_chain() {
    let board = place(&[(4, 1, 'r'), (3, 2, 'b'), (1, 4, 'b'), (1, 6, 'b')]);
    let successors = generate_successors(&State::initial(board));
    assert_eq!(successors.len(), 1);

    let after = successors[0].board();
    assert_eq!(after.piece_at(at(0, 5)), Some(Piece::king(Color::Red)));
    assert_eq!(after.piece_at(at(1, 6)), Some(Piece::man(Color::Black)));
    assert_eq!(after.count(Color::Black), 1);
}

#[test]
fn test_black_promotes_on_last_row() {
    let board = place(&[(5, 2, 'b'), (6, 3, 'r'), (0, 0, 'R')]);
    let successors = generate_successors(&State::new(board, Color::Black));
    assert_eq!(successors.len(), 1);
    let after = successors[0].board();
    assert_eq!(after.piece_at(at(7, 4)), Some(Piece::king(Color::Black)));
    assert_eq!(after.count(Color::Red), 1);
}

#[test]
fn test_king_chain_passes_through_far_row() {
    // A king touching row 0 mid-chain keeps jumping.
    let board = place(&[(2, 1, 'R'), (1, 2, 'b'), (1, 4, 'b'), (7, 6, 'b')]);
    let successors = generate_successors(&State::initial(board));
    assert_eq!(successors.len(), 1);

    let after = successors[0].board();
    assert_eq!(after.piece_at(at(2, 5)), Some(Piece::king(Color::Red)));
    assert_eq!(after.count(Color::Black), 1);
}

#[test]
fn test_king_jumps_backwards() {
    let board = place(&[(3, 3, 'B'), (4, 4, 'r'), (0, 0, 'r')]);
    let successors = generate_successors(&State::new(board, Color::Black));
    assert_eq!(successors.len(), 1);
    assert_eq!(
        successors[0].board().piece_at(at(5, 5)),
        Some(Piece::king(Color::Black))
    );
}

#[test]
fn test_simple_move_promotes() {
    let board = place(&[(1, 2, 'r'), (7, 7, 'b')]);
    let successors = generate_successors(&State::initial(board));
    assert_eq!(successors.len(), 2);
    for s in &successors {
        assert_eq!(s.board().kings(Color::Red).popcount(), 1);
        assert!(s.board().men(Color::Red).is_empty());
    }
}

#[test]
fn test_men_do_not_move_backwards() {
    let board = place(&[(4, 3, 'r'), (5, 4, 'b'), (0, 7, 'b')]);
    let successors = generate_successors(&State::initial(board));
    // The black man behind cannot be captured by a red man
    assert!(!any_capture(&State::initial(board)));
    assert_eq!(successors.len(), 2);
}

#[test]
fn test_blocked_side_has_no_successors() {
    let board = place(&[(1, 0, 'r'), (0, 1, 'b')]);
    let state = State::initial(board);
    assert!(generate_successors(&state).is_empty());
    assert!(!state.is_terminal());
}

#[test]
fn test_duplicate_chain_results_collapse() {
    // The king can circle the four men clockwise or anticlockwise and land
    // back on (4,2) with the same board.
    let board = place(&[
        (4, 2, 'R'),
        (3, 3, 'b'),
        (1, 3, 'b'),
        (1, 1, 'b'),
        (3, 1, 'b'),
        (7, 6, 'b'),
    ]);
    let successors = generate_successors(&State::initial(board));
    assert_eq!(successors.len(), 1);

    let after = successors[0].board();
    assert_eq!(after.piece_at(at(4, 2)), Some(Piece::king(Color::Red)));
    assert_eq!(after.count(Color::Black), 1);
}

#[test]
fn test_has_capture_matches_any_capture() {
    let board = place(&[(5, 2, 'r'), (4, 3, 'b'), (5, 6, 'r'), (0, 1, 'b')]);
    assert!(has_capture(&board, at(5, 2)));
    assert!(!has_capture(&board, at(5, 6)));
    assert!(!has_capture(&board, at(3, 3)));
    // Black's man on (4,3) can take the man on (5,2) since (6,1) is empty
    assert!(has_capture(&board, at(4, 3)));
    assert!(any_capture(&State::new(board, Color::Black)));
}

#[test]
fn test_successors_never_mutate_the_parent() {
    let state = State::initial(Board::standard());
    let before = state;
    let _ = generate_successors(&state);
    assert_eq!(state, before);
}

#[test]
fn test_any_capture_agrees_with_per_piece_scan() {
    let kings = place(&[
        (4, 3, 'R'),
        (6, 1, 'r'),
        (5, 6, 'r'),
        (1, 2, 'b'),
        (2, 5, 'B'),
        (3, 0, 'b'),
        (0, 7, 'b'),
    ]);
    let mut frontier = vec![
        State::initial(Board::standard()),
        State::initial(kings),
        State::new(kings, Color::Black),
    ];

    for _ in 0..4 {
        let mut next = Vec::new();
        for state in &frontier {
            let board = state.board();
            let scanned = board
                .pieces(state.next_turn())
                .any(|sq| has_capture(board, sq));
            assert_eq!(any_capture(state), scanned, "\n{board}");
            next.extend(generate_successors(state));
        }
        frontier = next;
    }
}
