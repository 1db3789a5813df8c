use std::fmt;

use crate::error::{GameError, GameResult};
use super::types::{BOARD_SIZE, CELL_COUNT, Cell, Outcome, Position, Side, WinningLine};
use super::win_detector::{Grid, check_win_with_line};

/// The 3x3 grid plus a running count of marked cells.
///
/// `Board` is `Copy`, so lookahead works on independent copies and never
/// needs to undo a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: Grid,
    marked: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, row: usize, col: usize, side: Side) -> GameResult<()> {
        if !self.is_empty(row, col) {
            return Err(GameError::InvalidMove { row, col });
        }

        self.cells[row][col] = Cell::Marked(side);
        self.marked += 1;
        Ok(())
    }

    pub fn mark_at(&mut self, pos: Position, side: Side) -> GameResult<()> {
        self.mark(pos.row, pos.col, side)
    }

    /// Returns a copy with the move applied, leaving `self` untouched.
    pub fn with_mark(&self, pos: Position, side: Side) -> GameResult<Board> {
        let mut next = *self;
        next.mark_at(pos, side)?;
        Ok(next)
    }

    /// Off-board coordinates are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        Position::new(row, col).is_on_board() && self.cells[row][col].is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Empty cells in row-major order, computed fresh on every call.
    pub fn empty_cells(&self) -> Vec<Position> {
        (0..CELL_COUNT)
            .map(Position::from_index)
            .filter(|pos| self.cells[pos.row][pos.col].is_empty())
            .collect()
    }

    pub fn marked_count(&self) -> usize {
        self.marked
    }

    pub fn is_full(&self) -> bool {
        self.marked == CELL_COUNT
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(line) = self.winning_line() {
            return Outcome::win_for(line.side);
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            writeln!(f, " {} | {} | {}", row[0], row[1], row[2])?;
            if i + 1 < BOARD_SIZE {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
