use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{SearchEngine, SearchMode};
use super::types::{Outcome, Position, Side, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsAi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub mode: GameMode,
    pub ai_mode: SearchMode,
    pub ai_side: Side,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsAi,
            ai_mode: SearchMode::ExhaustiveOptimal,
            ai_side: Side::PlayerB,
        }
    }
}

/// One game from the first move to a result. Start a new game by building a
/// new session; nothing is carried over from the old one.
pub struct GameSession {
    board: Board,
    mode: GameMode,
    ai: SearchEngine,
    current_side: Side,
}

impl GameSession {
    pub fn new(settings: GameSettings, rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            mode: settings.mode,
            ai: SearchEngine::new(settings.ai_mode, settings.ai_side, rng),
            current_side: Side::PlayerA,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn ai_mode(&self) -> SearchMode {
        self.ai.mode()
    }

    pub fn ai_side(&self) -> Side {
        self.ai.side()
    }

    pub fn set_ai_mode(&mut self, mode: SearchMode) {
        self.ai.set_mode(mode);
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::HumanVsAi && self.current_side == self.ai.side() && !self.is_over()
    }

    /// Human move for the side to play.
    pub fn place_mark(&mut self, pos: Position) -> GameResult<Outcome> {
        self.ensure_in_progress()?;
        if self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }
        self.apply(pos)
    }

    /// Lets the AI pick and play its move. Returns the cell it marked.
    pub fn play_ai_turn(&mut self) -> GameResult<Position> {
        self.ensure_in_progress()?;
        if !self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }
        let pos = self.ai.choose_move(&self.board)?;
        self.apply(pos)?;
        Ok(pos)
    }

    fn ensure_in_progress(&self) -> GameResult<()> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameOver(outcome));
        }
        Ok(())
    }

    fn apply(&mut self, pos: Position) -> GameResult<Outcome> {
        self.board.mark_at(pos, self.current_side)?;

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.current_side = self.current_side.opponent();
        }
        Ok(outcome)
    }
}
