use serde::{Deserialize, Serialize};

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }
    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::Red => 0,
            Color::Black => HEIGHT as i8 - 1,
        }
    }
    /// Red advances toward row 0, Black toward row 7.
    pub fn forward_directions(self) -> &'static [Direction] {
        match self {
            Color::Red => &[Direction::UpLeft, Direction::UpRight],
            Color::Black => &[Direction::DownLeft, Direction::DownRight],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
    pub const fn man(color: Color) -> Self {
        Self::new(color, PieceKind::Man)
    }
    pub const fn king(color: Color) -> Self {
        Self::new(color, PieceKind::King)
    }

    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn promoted(self) -> Self {
        Self::king(self.color)
    }

    /// Diagonals this piece may move or jump along.
    pub fn directions(self) -> &'static [Direction] {
        match self.kind {
            PieceKind::Man => self.color.forward_directions(),
            PieceKind::King => &Direction::ALL,
        }
    }

    pub fn to_char(self) -> char {
        match (self.color, self.kind) {
            (Color::Red, PieceKind::Man) => 'r',
            (Color::Red, PieceKind::King) => 'R',
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
        }
    }

    /// Parses one cell of the text grid. `Ok(None)` is an empty square.
    pub fn from_char(ch: char) -> Result<Option<Piece>, char> {
        match ch {
            '.' => Ok(None),
            'r' => Ok(Some(Piece::man(Color::Red))),
            'R' => Ok(Some(Piece::king(Color::Red))),
            'b' => Ok(Some(Piece::man(Color::Black))),
            'B' => Ok(Some(Piece::king(Color::Black))),
            other => Err(other),
        }
    }
}

pub const EMPTY_CHAR: char = '.';

/// The four diagonals. "Up" is toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// (row delta, column delta)
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Neighbouring square along this diagonal, or `None` off the board.
    #[inline]
    pub fn step(self, from: u8) -> Option<u8> {
        let (dr, dc) = self.delta();
        sq(row_of(from) + dr, col_of(from) + dc)
    }
}

// Helpers
pub fn row_of(sq: u8) -> i8 {
    (sq / WIDTH as u8) as i8
}
pub fn col_of(sq: u8) -> i8 {
    (sq % WIDTH as u8) as i8
}
pub fn sq(row: i8, col: i8) -> Option<u8> {
    if (0..HEIGHT as i8).contains(&row) && (0..WIDTH as i8).contains(&col) {
        Some((row as u8) * WIDTH as u8 + (col as u8))
    } else {
        None
    }
}
