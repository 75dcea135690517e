//! Spawner - drop one new tile after a changed move
//!
//! A tile is placed only when the last move changed the board and an empty cell
//! exists. The cell is chosen uniformly among all empty cells; the value is 4
//! with probability [`SPAWN_FOUR_PERCENT`]%, else 2. Spawning into an unchanged
//! board is never allowed, otherwise a stuck player could fish for free tiles.

use rand::Rng;

use crate::board::Board;
use crate::types::{Cell, SPAWN_FOUR_PERCENT, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE};

/// A tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// Pick the value of a new tile.
pub fn tile_value<R: Rng + ?Sized>(rng: &mut R) -> Cell {
    if rng.gen_range(0..100) < SPAWN_FOUR_PERCENT {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    }
}

/// Place one random tile if `changed` is set and the board has room.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, changed: bool, rng: &mut R) -> Option<Spawned> {
    if !changed {
        return None;
    }

    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = tile_value(rng);
    board.set(row, col, value);
    Some(Spawned { row, col, value })
}

/// Seed a fresh board with its first tile, bypassing the changed-flag gate.
pub fn bootstrap<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Spawned> {
    spawn_tile(board, true, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CELL_COUNT, EMPTY};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_no_spawn_when_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new();
        assert_eq!(spawn_tile(&mut board, false, &mut rng), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_no_spawn_on_full_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let full = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let mut board = full;
        assert_eq!(spawn_tile(&mut board, true, &mut rng), None);
        assert_eq!(board, full);
    }

    #[test]
    fn test_spawn_places_exactly_one_tile() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut board = Board::from_rows([[2, 0, 0, 0], [0, 0, 4, 0], [0; 4], [0, 0, 0, 8]]);
            let before = board;
            let spawned = spawn_tile(&mut board, true, &mut rng).unwrap();

            assert_eq!(before.get(spawned.row, spawned.col), Some(EMPTY));
            assert_eq!(board.get(spawned.row, spawned.col), Some(spawned.value));
            assert!(spawned.value == 2 || spawned.value == 4);
            assert_eq!(board.empty_count(), before.empty_count() - 1);
        }
    }

    #[test]
    fn test_spawn_fills_last_gap() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        let spawned = spawn_tile(&mut board, true, &mut rng).unwrap();
        assert_eq!((spawned.row, spawned.col), (2, 2));
        assert!(board.is_full());
    }

    #[test]
    fn test_bootstrap_on_empty_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = Board::new();
        assert!(bootstrap(&mut board, &mut rng).is_some());
        assert_eq!(board.empty_count(), CELL_COUNT - 1);
    }

    #[test]
    fn test_mock_rng_is_deterministic() {
        // A zero stream picks the first empty cell and rolls 0, under the four threshold.
        let mut rng = StepRng::new(0, 0);
        let mut board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let spawned = spawn_tile(&mut board, true, &mut rng).unwrap();
        assert_eq!((spawned.row, spawned.col), (0, 1));
        assert_eq!(spawned.value, SPAWN_HIGH_VALUE);
    }

    #[test]
    fn test_four_is_roughly_a_quarter() {
        let mut rng = StdRng::seed_from_u64(2048);
        let trials = 20_000;
        let fours = (0..trials).filter(|_| tile_value(&mut rng) == 4).count();
        let ratio = fours as f64 / trials as f64;
        assert!((0.23..0.27).contains(&ratio), "ratio {}", ratio);
    }

    #[test]
    fn test_cell_choice_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut hits = [0usize; CELL_COUNT];
        let trials = 16_000;
        for _ in 0..trials {
            let mut board = Board::new();
            let s = spawn_tile(&mut board, true, &mut rng).unwrap();
            hits[s.row * 4 + s.col] += 1;
        }
        let expected = trials / CELL_COUNT;
        for h in hits {
            assert!(h > expected * 8 / 10 && h < expected * 12 / 10, "{:?}", hits);
        }
    }
}
