use super::types::{BOARD_SIZE, Cell, LineKind, Side, WinningLine};

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Lines in the order they are checked: columns left to right, rows top to
/// bottom, then the two diagonals. When several lines are complete the first
/// one in this order is reported.
pub const SCAN_ORDER: [LineKind; 8] = [
    LineKind::Column(0),
    LineKind::Column(1),
    LineKind::Column(2),
    LineKind::Row(0),
    LineKind::Row(1),
    LineKind::Row(2),
    LineKind::Diagonal,
    LineKind::AntiDiagonal,
];

pub fn check_win(grid: &Grid) -> Option<Side> {
    check_win_with_line(grid).map(|line| line.side)
}

pub fn check_win_with_line(grid: &Grid) -> Option<WinningLine> {
    SCAN_ORDER
        .iter()
        .find_map(|&kind| line_owner(grid, kind).map(|side| WinningLine::new(side, kind)))
}

fn line_owner(grid: &Grid, kind: LineKind) -> Option<Side> {
    let [first, second, third] = kind.cells().map(|pos| grid[pos.row][pos.col]);
    let side = first.side()?;
    if second == first && third == first {
        Some(side)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    const E: Cell = Cell::Empty;
    const A: Cell = Cell::Marked(Side::PlayerA);
    const B: Cell = Cell::Marked(Side::PlayerB);

    #[test]
    fn test_empty_grid_has_no_winner() {
        let grid = [[E; 3]; 3];

        assert_eq!(check_win(&grid), None);
    }

    #[test]
    fn test_column_reported_before_row() {
        #[rustfmt::skip]
        let grid = [
            [A, A, A],
            [A, B, B],
            [A, B, B],
        ];

        let line = check_win_with_line(&grid).unwrap();
        assert_eq!(line.kind, LineKind::Column(0));
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_row_reported_before_diagonal() {
        #[rustfmt::skip]
        let grid = [
            [B, B, A],
            [E, A, E],
            [A, A, A],
        ];

        let line = check_win_with_line(&grid).unwrap();
        assert_eq!(line.kind, LineKind::Row(2));
        assert_eq!(line.side, Side::PlayerA);
    }

    #[test]
    fn test_anti_diagonal_runs_bottom_left_to_top_right() {
        #[rustfmt::skip]
        let grid = [
            [A, E, B],
            [E, B, A],
            [B, A, E],
        ];

        let line = check_win_with_line(&grid).unwrap();
        assert_eq!(line.kind, LineKind::AntiDiagonal);
        assert_eq!(line.side, Side::PlayerB);
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        #[rustfmt::skip]
        let grid = [
            [A, B, A],
            [E, E, E],
            [E, E, E],
        ];

        assert_eq!(check_win(&grid), None);
    }
}
