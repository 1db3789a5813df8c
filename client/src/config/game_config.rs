use common::config::Validate;
use common::games::tictactoe::{GameMode, GameSettings, SearchMode, Side};
use serde::{Deserialize, Serialize};

pub const MAX_AI_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub ai_level: SearchMode,
    pub ai_side: Side,
    /// Pause before the AI answers, so the human's move is seen first.
    pub ai_move_delay_ms: u64,
}

impl GameConfig {
    pub fn to_settings(&self) -> GameSettings {
        GameSettings {
            mode: self.mode,
            ai_mode: self.ai_level,
            ai_side: self.ai_side,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "ai_move_delay_ms must not exceed {}",
                MAX_AI_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let settings = GameSettings::default();
        Self {
            mode: settings.mode,
            ai_level: settings.ai_mode,
            ai_side: settings.ai_side,
            ai_move_delay_ms: 300,
        }
    }
}
