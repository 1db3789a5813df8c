use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{GameMode, GameSession, GameSettings, Outcome, SearchMode};
use common::log;

use crate::command::Command;

pub struct TerminalGameOptions {
    pub settings: GameSettings,
    pub rng_seed: Option<u64>,
    pub ai_move_delay: Duration,
}

/// Plays games on a line-based terminal until `q` or end of input.
pub struct TerminalGame<R: BufRead, W: Write> {
    input: R,
    output: W,
    options: TerminalGameOptions,
    games_started: u64,
}

impl<R: BufRead, W: Write> TerminalGame<R, W> {
    pub fn new(input: R, output: W, options: TerminalGameOptions) -> Self {
        Self {
            input,
            output,
            options,
            games_started: 0,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// A reset always builds a fresh session from the configured settings.
    fn new_session(&mut self) -> GameSession {
        let seed = self
            .options
            .rng_seed
            .map(|seed| seed.wrapping_add(self.games_started));
        self.games_started += 1;

        let rng = SessionRng::from_optional_seed(seed);
        log!(
            "Game {} started: {:?}, AI {:?} as {}, seed {}",
            self.games_started,
            self.options.settings.mode,
            self.options.settings.ai_mode,
            self.options.settings.ai_side,
            rng.seed()
        );
        GameSession::new(self.options.settings, rng)
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut session = self.new_session();
        self.print_help()?;
        self.render(&session)?;

        loop {
            if session.is_ai_turn() {
                self.play_ai_turn(&mut session)?;
                continue;
            }

            let Some(line) = self.read_line()? else {
                log!("Input closed");
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };

            match command {
                Command::Quit => {
                    log!("Quit requested");
                    return Ok(());
                }
                Command::Reset => {
                    session = self.new_session();
                    self.render(&session)?;
                }
                Command::Easy => self.switch_ai_mode(&mut session, SearchMode::Random)?,
                Command::Hard => self.switch_ai_mode(&mut session, SearchMode::ExhaustiveOptimal)?,
                Command::Place(pos) => {
                    let side = session.current_side();
                    match session.place_mark(pos) {
                        Ok(_) => {
                            log!("{} marked {}", side, pos);
                            self.render(&session)?;
                        }
                        Err(err) => writeln!(self.output, "{}", err)?,
                    }
                }
            }
        }
    }

    fn play_ai_turn(&mut self, session: &mut GameSession) -> Result<(), Box<dyn std::error::Error>> {
        writeln!(self.output, "AI is thinking...")?;
        self.output.flush()?;
        if !self.options.ai_move_delay.is_zero() {
            thread::sleep(self.options.ai_move_delay);
        }

        let side = session.current_side();
        let pos = session.play_ai_turn()?;
        log!("AI ({}) marked {}", side, pos);
        self.render(session)?;
        Ok(())
    }

    fn switch_ai_mode(
        &mut self,
        session: &mut GameSession,
        mode: SearchMode,
    ) -> Result<(), Box<dyn std::error::Error>> {
        session.set_ai_mode(mode);
        log!("AI switched to {:?}", mode);
        if session.mode() == GameMode::HumanVsHuman {
            writeln!(self.output, "AI level set to {:?} (no AI in this game)", mode)?;
        } else {
            writeln!(self.output, "AI level set to {:?}", mode)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_help(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "Enter \"<row> <col>\" (0-2) to place a mark.")?;
        writeln!(self.output, "r: new game, e: random AI, h: optimal AI, q: quit")
    }

    fn render(&mut self, session: &GameSession) -> std::io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", session.board())?;

        let outcome = session.outcome();
        match outcome {
            Outcome::Ongoing => writeln!(self.output, "{} to move", session.current_side()),
            _ => {
                if let Some(line) = session.winning_line() {
                    writeln!(
                        self.output,
                        "Winning line from {} to {}",
                        line.start, line.end
                    )?;
                }
                log!("Game over: {}", outcome);
                writeln!(self.output, "Game over: {}. Press r to play again.", outcome)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Side;
    use std::io::Cursor;

    fn run_with_input(settings: GameSettings, input: &str) -> String {
        let options = TerminalGameOptions {
            settings,
            rng_seed: Some(17),
            ai_move_delay: Duration::ZERO,
        };
        let mut game = TerminalGame::new(Cursor::new(input.to_string()), Vec::new(), options);
        game.run().unwrap();
        String::from_utf8(game.into_output()).unwrap()
    }

    fn pvp() -> GameSettings {
        GameSettings {
            mode: GameMode::HumanVsHuman,
            ..GameSettings::default()
        }
    }

    #[test]
    fn test_pvp_game_reports_winner_and_line() {
        let output = run_with_input(pvp(), "0 0\n1 0\n0 1\n1 1\n0 2\nq\n");

        assert!(output.contains("Game over: X wins"));
        assert!(output.contains("Winning line from (0, 0) to (0, 2)"));
    }

    #[test]
    fn test_occupied_cell_is_reported() {
        let output = run_with_input(pvp(), "1 1\n1 1\nq\n");

        assert!(output.contains("Invalid move at (1, 1)"));
        assert!(output.contains("O to move"));
    }

    #[test]
    fn test_bad_input_is_reported_and_game_continues() {
        let output = run_with_input(pvp(), "hello\n0 0\n");

        assert!(output.contains("Expected"));
        assert!(output.contains("O to move"));
    }

    #[test]
    fn test_ai_answers_after_human_move() {
        let output = run_with_input(GameSettings::default(), "1 1\nq\n");

        assert!(output.contains("AI is thinking..."));
        assert!(output.contains(" O | . | .\n"));
        assert!(output.contains("X to move"));
    }

    #[test]
    fn test_ai_opens_when_playing_player_a() {
        let settings = GameSettings {
            ai_side: Side::PlayerA,
            ai_mode: SearchMode::Random,
            ..GameSettings::default()
        };

        let output = run_with_input(settings, "q\n");

        assert!(output.contains("AI is thinking..."));
        assert!(output.contains("O to move"));
    }

    #[test]
    fn test_moves_after_game_over_are_rejected_until_reset() {
        let output = run_with_input(pvp(), "0 0\n1 0\n0 1\n1 1\n0 2\n2 2\nr\n2 2\nq\n");

        assert!(output.contains("Game is already over"));
        assert!(output.matches("X to move").count() >= 2);
        assert!(output.contains(" . | . | .\n---+---+---\n . | . | X\n"));
    }

    #[test]
    fn test_level_switch_is_acknowledged() {
        let output = run_with_input(GameSettings::default(), "e\nh\nq\n");

        assert!(output.contains("AI level set to Random"));
        assert!(output.contains("AI level set to ExhaustiveOptimal"));
    }
}
