use crate::{bitboard::Bitboard, types::*};

/// Piece placement as four bitboards: men and kings, indexed by `Color::idx()`.
///
/// `Board` is `Copy` (32 bytes), so producing a successor is a plain value copy
/// and no caller-visible board is ever changed behind its back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    men: [Bitboard; 2],
    kings: [Bitboard; 2],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard opening layout: twelve men per side on the squares where
    /// `row + col` is odd, Black on rows 0..=2 and Red on rows 5..=7.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for row in 0..HEIGHT as i8 {
            let color = match row {
                0..=2 => Color::Black,
                5..=7 => Color::Red,
                _ => continue,
            };
            for col in 0..WIDTH as i8 {
                if (row + col) % 2 == 1
                    && let Some(s) = sq(row, col)
                {
                    b.set_piece(s, Some(Piece::man(color)));
                }
            }
        }
        b
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        for color in Color::ALL {
            if self.men[color.idx()].contains(sq) {
                return Some(Piece::man(color));
            }
            if self.kings[color.idx()].contains(sq) {
                return Some(Piece::king(color));
            }
        }
        None
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        for color in Color::ALL {
            self.men[color.idx()].clear(sq);
            self.kings[color.idx()].clear(sq);
        }
        if let Some(pc) = pc {
            match pc.kind {
                PieceKind::Man => self.men[pc.color.idx()].set(sq),
                PieceKind::King => self.kings[pc.color.idx()].set(sq),
            }
        }
    }

    #[inline]
    pub fn is_empty_square(&self, sq: u8) -> bool {
        !self.occupied().contains(sq)
    }

    #[inline]
    pub fn men(&self, c: Color) -> Bitboard {
        self.men[c.idx()]
    }

    #[inline]
    pub fn kings(&self, c: Color) -> Bitboard {
        self.kings[c.idx()]
    }

    /// Men and kings of one color.
    #[inline]
    pub fn pieces(&self, c: Color) -> Bitboard {
        self.men[c.idx()] | self.kings[c.idx()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.pieces(Color::Red) | self.pieces(Color::Black)
    }

    pub fn count(&self, c: Color) -> u32 {
        self.pieces(c).popcount()
    }
}

/// A board plus the side that moves next.
///
/// States are value objects: the move generator copies the board for every
/// successor, and the fields are only readable. The exact `(board, next_turn)`
/// pair is also the transposition-cache key, so equality and hashing are
/// structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    board: Board,
    next_turn: Color,
}

impl State {
    pub fn new(board: Board, next_turn: Color) -> Self {
        Self { board, next_turn }
    }

    /// Red always moves first.
    pub fn initial(board: Board) -> Self {
        Self::new(board, Color::Red)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_turn(&self) -> Color {
        self.next_turn
    }

    /// The side that moved into this state.
    pub fn just_moved(&self) -> Color {
        self.next_turn.other()
    }

    /// `Red` once Black has no pieces left, `Black` once Red has none.
    ///
    /// Red is checked first, so a board with no pieces at all counts as a Red win.
    pub fn winner(&self) -> Option<Color> {
        if self.board.pieces(Color::Black).is_empty() {
            Some(Color::Red)
        } else if self.board.pieces(Color::Red).is_empty() {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }
}
