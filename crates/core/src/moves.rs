//! Move engine - apply line compaction across the whole board
//!
//! Each direction is described by one [`Traversal`]: the start, end, and step of
//! the walk along a line, plus an accessor mapping `(line index, position)` to a
//! board cell. Up/Down walk columns top-to-bottom/bottom-to-top, Left/Right walk
//! rows left-to-right/right-to-left. The walk always starts at the edge the
//! tiles move toward, so one compactor serves all four directions.

use crate::board::Board;
use crate::line::{can_compact, compact_with_merges, Line};
use crate::types::{Direction, BOARD_SIZE, EMPTY};

const LAST: isize = BOARD_SIZE as isize - 1;

/// Line traversal order for one direction.
#[derive(Debug, Clone, Copy)]
pub struct Traversal {
    pub start: isize,
    /// Exclusive end of the walk.
    pub end: isize,
    pub step: isize,
    /// Maps `(line, position)` to `(row, col)`.
    pub cell: fn(usize, usize) -> (usize, usize),
}

fn column_cell(line: usize, pos: usize) -> (usize, usize) {
    (pos, line)
}

fn row_cell(line: usize, pos: usize) -> (usize, usize) {
    (line, pos)
}

/// Traversal table, indexed in [`Direction::ALL`] order.
pub const TRAVERSALS: [Traversal; 4] = [
    // Up
    Traversal {
        start: 0,
        end: BOARD_SIZE as isize,
        step: 1,
        cell: column_cell,
    },
    // Down
    Traversal {
        start: LAST,
        end: -1,
        step: -1,
        cell: column_cell,
    },
    // Left
    Traversal {
        start: 0,
        end: BOARD_SIZE as isize,
        step: 1,
        cell: row_cell,
    },
    // Right
    Traversal {
        start: LAST,
        end: -1,
        step: -1,
        cell: row_cell,
    },
];

impl Traversal {
    pub fn for_direction(dir: Direction) -> Traversal {
        match dir {
            Direction::Up => TRAVERSALS[0],
            Direction::Down => TRAVERSALS[1],
            Direction::Left => TRAVERSALS[2],
            Direction::Right => TRAVERSALS[3],
        }
    }

    /// Positions along a line, front first.
    pub fn positions(self) -> impl Iterator<Item = usize> {
        let Traversal { start, end, step, .. } = self;
        std::iter::successors(Some(start), move |&p| Some(p + step))
            .take_while(move |&p| p != end)
            .map(|p| p as usize)
    }

    /// Read line `idx` from the board, front first.
    pub fn extract(self, board: &Board, idx: usize) -> Line {
        let mut line = [EMPTY; BOARD_SIZE];
        for (k, pos) in self.positions().enumerate() {
            let (r, c) = (self.cell)(idx, pos);
            line[k] = board.rows()[r][c];
        }
        line
    }

    /// Write `line` back into the board along the same walk.
    pub fn write(self, board: &mut Board, idx: usize, line: &Line) {
        for (k, pos) in self.positions().enumerate() {
            let (r, c) = (self.cell)(idx, pos);
            *board.cell_mut(r, c) = line[k];
        }
    }
}

/// Result of applying one direction to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after compaction (equal to the input when nothing changed).
    pub board: Board,
    /// True if any cell differs from the input board.
    pub changed: bool,
    /// Number of merges across all lines.
    pub merges: usize,
}

/// Extract line `idx` of `board` in `dir`'s traversal order.
pub fn line(board: &Board, dir: Direction, idx: usize) -> Line {
    Traversal::for_direction(dir).extract(board, idx)
}

/// Write `line` into `board` as line `idx` in `dir`'s traversal order.
pub fn write_line(board: &mut Board, dir: Direction, idx: usize, line: &Line) {
    Traversal::for_direction(dir).write(board, idx, line)
}

/// Slide and merge every line of `board` toward `dir`. No randomness.
pub fn apply_move(board: &Board, dir: Direction) -> MoveOutcome {
    let traversal = Traversal::for_direction(dir);
    let mut next = *board;
    let mut changed = false;
    let mut merges = 0usize;

    for idx in 0..BOARD_SIZE {
        let before = traversal.extract(board, idx);
        let (after, merged) = compact_with_merges(before);
        if after != before {
            changed = true;
            merges += merged;
            traversal.write(&mut next, idx, &after);
        }
    }

    MoveOutcome {
        board: next,
        changed,
        merges,
    }
}

/// True if moving in `dir` would change the board.
pub fn can_move(board: &Board, dir: Direction) -> bool {
    (0..BOARD_SIZE).any(|idx| can_compact(line(board, dir, idx)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows([[2, 0, 2, 4], [0, 0, 0, 0], [4, 4, 4, 4], [2, 0, 0, 2]])
    }

    #[test]
    fn test_positions_per_direction() {
        let up: Vec<_> = Traversal::for_direction(Direction::Up).positions().collect();
        let down: Vec<_> = Traversal::for_direction(Direction::Down).positions().collect();
        assert_eq!(up, vec![0, 1, 2, 3]);
        assert_eq!(down, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_extract_front_first() {
        let board = sample();
        assert_eq!(line(&board, Direction::Left, 0), [2, 0, 2, 4]);
        assert_eq!(line(&board, Direction::Right, 0), [4, 2, 0, 2]);
        assert_eq!(line(&board, Direction::Up, 3), [4, 0, 4, 2]);
        assert_eq!(line(&board, Direction::Down, 3), [2, 4, 0, 4]);
    }

    #[test]
    fn test_write_line_inverts_extract() {
        for dir in Direction::ALL {
            let mut board = Board::new();
            write_line(&mut board, dir, 1, &[2, 4, 8, 16]);
            assert_eq!(line(&board, dir, 1), [2, 4, 8, 16]);
        }
    }

    #[test]
    fn test_move_left() {
        let out = apply_move(&sample(), Direction::Left);
        assert!(out.changed);
        assert_eq!(out.merges, 4);
        assert_eq!(
            out.board,
            Board::from_rows([[4, 4, 0, 0], [0, 0, 0, 0], [8, 8, 0, 0], [4, 0, 0, 0]])
        );
    }

    #[test]
    fn test_move_right() {
        let out = apply_move(&sample(), Direction::Right);
        assert!(out.changed);
        assert_eq!(
            out.board,
            Board::from_rows([[0, 0, 4, 4], [0, 0, 0, 0], [0, 0, 8, 8], [0, 0, 0, 4]])
        );
    }

    #[test]
    fn test_move_up() {
        let out = apply_move(&sample(), Direction::Up);
        assert!(out.changed);
        assert_eq!(
            out.board,
            Board::from_rows([[2, 4, 2, 8], [4, 0, 4, 2], [2, 0, 0, 0], [0, 0, 0, 0]])
        );
    }

    #[test]
    fn test_move_down() {
        let out = apply_move(&sample(), Direction::Down);
        assert!(out.changed);
        assert_eq!(
            out.board,
            Board::from_rows([[0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 2, 8], [2, 4, 4, 2]])
        );
    }

    #[test]
    fn test_right_merges_from_the_right_edge() {
        let board = Board::from_rows([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        let out = apply_move(&board, Direction::Right);
        assert_eq!(out.board.rows()[0], [0, 0, 2, 4]);
    }

    #[test]
    fn test_unchanged_move_reports_false() {
        let board = Board::from_rows([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let out = apply_move(&board, Direction::Left);
        assert!(!out.changed);
        assert_eq!(out.merges, 0);
        assert_eq!(out.board, board);
        assert!(!can_move(&board, Direction::Left));
        assert!(!can_move(&board, Direction::Up));
        assert!(can_move(&board, Direction::Right));
        assert!(can_move(&board, Direction::Down));
    }

    #[test]
    fn test_move_conserves_value() {
        let board = sample();
        for dir in Direction::ALL {
            assert_eq!(apply_move(&board, dir).board.sum(), board.sum());
        }
    }
}
