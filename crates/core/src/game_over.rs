//! Terminal-state detection
//!
//! The game is over only when the board is full and no two orthogonally
//! adjacent cells are equal. An empty cell always leaves a legal move, so that
//! case returns early without scanning neighbours. Comparing each cell with its
//! right and lower neighbour covers every adjacent pair exactly once.

use crate::board::Board;
use crate::types::BOARD_SIZE;

/// True if no move can change the board.
pub fn is_game_over(board: &Board) -> bool {
    if board.has_empty_cell() {
        return false;
    }
    !has_adjacent_pair(board)
}

/// True if any two horizontally or vertically adjacent cells hold equal values.
pub fn has_adjacent_pair(board: &Board) -> bool {
    let cells = board.rows();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let v = cells[r][c];
            if c + 1 < BOARD_SIZE && cells[r][c + 1] == v {
                return true;
            }
            if r + 1 < BOARD_SIZE && cells[r + 1][c] == v {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::can_move;
    use crate::types::Direction;

    #[test]
    fn test_checkerboard_is_over() {
        let board = Board::from_rows([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]]);
        assert!(is_game_over(&board));
        assert!(Direction::ALL.iter().all(|&d| !can_move(&board, d)));
    }

    #[test]
    fn test_any_empty_cell_is_not_over() {
        let board = Board::from_rows([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 0, 2], [2, 1, 2, 1]]);
        assert!(!is_game_over(&board));

        assert!(!is_game_over(&Board::new()));
    }

    #[test]
    fn test_horizontal_pair_is_not_over() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_vertical_pair_is_not_over() {
        let board = Board::from_rows([[2, 4, 2, 16], [4, 2, 4, 16], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_pair_in_last_column_and_row() {
        let mut rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        assert!(!has_adjacent_pair(&Board::from_rows(rows)));

        rows[3][3] = 4;
        assert!(has_adjacent_pair(&Board::from_rows(rows)));
    }
}
