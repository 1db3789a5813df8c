use std::str::FromStr;

use common::games::tictactoe::Position;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Reset,
    /// Switch the AI to random moves.
    Easy,
    /// Switch the AI to full minimax.
    Hard,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "r" => return Ok(Command::Reset),
            "e" => return Ok(Command::Easy),
            "h" => return Ok(Command::Hard),
            "q" => return Ok(Command::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(format!("Expected \"<row> <col>\" or r/e/h/q, got \"{}\"", line));
        };

        let row = row
            .parse::<usize>()
            .map_err(|_| format!("Row must be a number, got \"{}\"", row))?;
        let col = col
            .parse::<usize>()
            .map_err(|_| format!("Column must be a number, got \"{}\"", col))?;
        Ok(Command::Place(Position::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_control_keys() {
        assert_eq!("r".parse::<Command>(), Ok(Command::Reset));
        assert_eq!(" E ".parse::<Command>(), Ok(Command::Easy));
        assert_eq!("h".parse::<Command>(), Ok(Command::Hard));
        assert_eq!("Q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_position_with_space_or_comma() {
        assert_eq!("1 2".parse::<Command>(), Ok(Command::Place(Position::new(1, 2))));
        assert_eq!("0,2".parse::<Command>(), Ok(Command::Place(Position::new(0, 2))));
        assert_eq!(" 2 ,  0 ".parse::<Command>(), Ok(Command::Place(Position::new(2, 0))));
    }

    #[test]
    fn test_out_of_range_position_is_left_to_the_board() {
        assert_eq!("7 7".parse::<Command>(), Ok(Command::Place(Position::new(7, 7))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Command>().is_err());
        assert!("1".parse::<Command>().is_err());
        assert!("a b".parse::<Command>().is_err());
        assert!("1 2 3".parse::<Command>().is_err());
        assert!("-1 0".parse::<Command>().is_err());
    }
}
