mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, DRAW_SCORE, Evaluation, LOSS_SCORE, SearchEngine, SearchMode, WIN_SCORE,
    calculate_minimax_move, calculate_move, minimax,
};
pub use game_state::{GameMode, GameSession, GameSettings};
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, LineKind, Outcome, Position, Side, WinningLine};
pub use win_detector::{Grid, SCAN_ORDER, check_win, check_win_with_line};
