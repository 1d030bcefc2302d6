use std::collections::HashSet;

use crate::{
    bitboard::Bitboard,
    board::{Board, State},
    types::*,
};

/// Generate every legal successor, returning a freshly allocated vector.
/// Internally delegates to `successors_into`.
pub fn generate_successors(state: &State) -> Vec<State> {
    let mut out = Vec::with_capacity(16);
    successors_into(state, &mut out);
    out
}

/// Generate every legal successor into the provided buffer, reusing it across calls.
///
/// Captures are compulsory: if any piece of the side to move can jump, only
/// completed jump chains are returned. Otherwise every simple diagonal step is.
/// No particular order is guaranteed.
pub fn successors_into(state: &State, out: &mut Vec<State>) {
    out.clear();
    if any_capture(state) {
        jump_successors(state, out);
        dedup_in_place(out);
    } else {
        simple_successors(state, out);
    }
}

fn jump_successors(state: &State, out: &mut Vec<State>) {
    let board = state.board();
    for from in board.pieces(state.next_turn()) {
        if let Some(piece) = board.piece_at(from) {
            jump_chain(board, from, piece, false, out);
        }
    }
}

/// Explore every capture chain of `piece` standing on `from`.
///
/// `captured` is false only for the call on the untouched board; a chain that
/// cannot be extended is emitted once at least one capture has been made.
fn jump_chain(board: &Board, from: u8, piece: Piece, captured: bool, out: &mut Vec<State>) {
    let mut extended = false;

    for &dir in piece.directions() {
        let Some((over, land)) = capture_target(board, from, piece.color, dir) else {
            continue;
        };
        extended = true;

        let mut next = *board;
        next.set_piece(from, None);
        next.set_piece(over, None);

        if !piece.is_king() && row_of(land) == piece.color.promotion_row() {
            // Crowning ends the turn even if another jump would be available.
            next.set_piece(land, Some(piece.promoted()));
            out.push(State::new(next, piece.color.other()));
        } else {
            next.set_piece(land, Some(piece));
            jump_chain(&next, land, piece, true, out);
        }
    }

    if !extended && captured {
        out.push(State::new(*board, piece.color.other()));
    }
}

/// Returns `(jumped square, landing square)` if a piece of `color` on `from`
/// can capture along `dir`.
#[inline]
fn capture_target(board: &Board, from: u8, color: Color, dir: Direction) -> Option<(u8, u8)> {
    let over = dir.step(from)?;
    let land = dir.step(over)?;
    let victim = board.piece_at(over)?;
    (victim.color != color && board.is_empty_square(land)).then_some((over, land))
}

fn simple_successors(state: &State, out: &mut Vec<State>) {
    let board = state.board();
    let mover = state.next_turn();

    for from in board.pieces(mover) {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        for &dir in piece.directions() {
            let Some(to) = dir.step(from) else {
                continue;
            };
            if !board.is_empty_square(to) {
                continue;
            }
            let mut next = *board;
            next.set_piece(from, None);
            let landed = if !piece.is_king() && row_of(to) == mover.promotion_row() {
                piece.promoted()
            } else {
                piece
            };
            next.set_piece(to, Some(landed));
            out.push(State::new(next, mover.other()));
        }
    }
}

/// Two different chains can leave the same board (a king taking the same
/// pieces in another order). Keep the first occurrence of each.
fn dedup_in_place(out: &mut Vec<State>) {
    if out.len() < 2 {
        return;
    }
    let mut seen = HashSet::with_capacity(out.len());
    out.retain(|s| seen.insert(*s));
}

/// True if the piece standing on `from` has at least one capture available.
pub fn has_capture(board: &Board, from: u8) -> bool {
    match board.piece_at(from) {
        Some(piece) => piece
            .directions()
            .iter()
            .any(|&dir| capture_target(board, from, piece.color, dir).is_some()),
        None => false,
    }
}

/// True if the side to move has any capture anywhere on the board.
pub fn any_capture(state: &State) -> bool {
    let board = state.board();
    let mover = state.next_turn();
    let theirs = board.pieces(mover.other());
    let empty = !board.occupied();

    Direction::ALL.iter().any(|&dir| {
        let mut movers = board.kings(mover);
        if mover.forward_directions().contains(&dir) {
            movers |= board.men(mover);
        }
        let landing = (movers.shift(dir) & theirs).shift(dir) & empty;
        landing != Bitboard::EMPTY
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
