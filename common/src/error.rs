use thiserror::Error;

use crate::games::tictactoe::Outcome;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move at ({row}, {col}): cell is occupied or off the board")]
    InvalidMove { row: usize, col: usize },

    #[error("No moves available: board is full")]
    BoardFull,

    #[error("Game is already over: {0}")]
    GameOver(Outcome),

    #[error("Not your turn")]
    NotYourTurn,
}

pub type GameResult<T> = std::result::Result<T, GameError>;
