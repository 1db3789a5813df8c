use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::games::SessionRng;
use super::board::Board;
use super::types::{Outcome, Position, Side};

/// Search scores are always from `PlayerA`'s point of view.
pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    Random,
    ExhaustiveOptimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub score: i32,
    pub best_move: Option<Position>,
}

impl Evaluation {
    fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

pub struct BotInput {
    pub board: Board,
    pub side: Side,
}

impl BotInput {
    pub fn new(board: Board, side: Side) -> Self {
        Self { board, side }
    }
}

pub fn calculate_move(
    mode: SearchMode,
    input: &BotInput,
    rng: &mut SessionRng,
) -> GameResult<Position> {
    if input.board.is_full() {
        return Err(GameError::BoardFull);
    }
    let outcome = input.board.outcome();
    if outcome.is_terminal() {
        return Err(GameError::GameOver(outcome));
    }

    match mode {
        SearchMode::Random => calculate_random_move(&input.board, rng),
        SearchMode::ExhaustiveOptimal => calculate_minimax_move(&input.board, input.side),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> GameResult<Position> {
    let available_moves = board.empty_cells();
    rng.pick(&available_moves).copied().ok_or(GameError::BoardFull)
}

pub fn calculate_minimax_move(board: &Board, side: Side) -> GameResult<Position> {
    minimax(board, side).best_move.ok_or(GameError::BoardFull)
}

/// Full-depth minimax without pruning. `PlayerA` maximizes, `PlayerB`
/// minimizes; among equally scored moves the first in row-major order wins.
pub fn minimax(board: &Board, side_to_move: Side) -> Evaluation {
    match board.outcome() {
        Outcome::PlayerAWins => return Evaluation::terminal(WIN_SCORE),
        Outcome::PlayerBWins => return Evaluation::terminal(LOSS_SCORE),
        Outcome::Draw => return Evaluation::terminal(DRAW_SCORE),
        Outcome::Ongoing => {}
    }

    let maximizing = side_to_move == Side::PlayerA;
    let mut best: Option<(i32, Position)> = None;

    for pos in board.empty_cells() {
        let Ok(child) = board.with_mark(pos, side_to_move) else {
            continue;
        };
        let score = minimax(&child, side_to_move.opponent()).score;

        let improves = match best {
            None => true,
            Some((best_score, _)) if maximizing => score > best_score,
            Some((best_score, _)) => score < best_score,
        };
        if improves {
            best = Some((score, pos));
        }
    }

    match best {
        Some((score, pos)) => Evaluation {
            score,
            best_move: Some(pos),
        },
        None => Evaluation::terminal(DRAW_SCORE),
    }
}

/// The AI opponent: the side it plays, how it searches, and its random source.
pub struct SearchEngine {
    mode: SearchMode,
    side: Side,
    rng: SessionRng,
}

impl SearchEngine {
    pub fn new(mode: SearchMode, side: Side, rng: SessionRng) -> Self {
        Self { mode, side, rng }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub fn choose_move(&mut self, board: &Board) -> GameResult<Position> {
        let input = BotInput::new(*board, self.side);
        calculate_move(self.mode, &input, &mut self.rng)
    }
}
