use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two players, identified by the mark it places.
///
/// `PlayerA` moves first and is the maximizer in search scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    PlayerA,
    PlayerB,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::PlayerA => Side::PlayerB,
            Side::PlayerB => Side::PlayerA,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::PlayerA => 'X',
            Side::PlayerB => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Side),
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Marked(side) => Some(side),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Marked(side) => write!(f, "{}", side),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a game, always derived from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    PlayerAWins,
    PlayerBWins,
    Draw,
}

impl Outcome {
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::PlayerA => Outcome::PlayerAWins,
            Side::PlayerB => Outcome::PlayerBWins,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerAWins => Some(Side::PlayerA),
            Outcome::PlayerBWins => Some(Side::PlayerB),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "in progress"),
            Outcome::PlayerAWins => write!(f, "{} wins", Side::PlayerA),
            Outcome::PlayerBWins => write!(f, "{} wins", Side::PlayerB),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Column(usize),
    Row(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl LineKind {
    pub fn cells(self) -> [Position; BOARD_SIZE] {
        match self {
            LineKind::Column(col) => [0, 1, 2].map(|row| Position::new(row, col)),
            LineKind::Row(row) => [0, 1, 2].map(|col| Position::new(row, col)),
            LineKind::Diagonal => [0, 1, 2].map(|i| Position::new(i, i)),
            LineKind::AntiDiagonal => [0, 1, 2].map(|i| Position::new(BOARD_SIZE - 1 - i, i)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub side: Side,
    pub kind: LineKind,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(side: Side, kind: LineKind) -> Self {
        let cells = kind.cells();
        Self {
            side,
            kind,
            start: cells[0],
            end: cells[BOARD_SIZE - 1],
        }
    }
}
