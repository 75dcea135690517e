//! Line compaction - slide and merge one row or column
//!
//! A line is the sequence of cells along one row or column, ordered from the
//! "front" (the edge the tiles move toward) to the back. Compaction is a single
//! forward pass with a write cursor and an optional pending tile:
//!
//! - zeros are skipped
//! - a tile equal to the pending one merges into it (value doubles) and is
//!   committed immediately, so a merged tile never merges again in the same pass
//! - any other tile commits the pending one and becomes pending itself
//!
//! `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, `[0, 2, 0, 2]` becomes `[4, 0, 0, 0]`.

use crate::types::{Cell, BOARD_SIZE, EMPTY};

/// One row or column of the board, front first.
pub type Line = [Cell; BOARD_SIZE];

/// Compact and merge a line toward index 0.
pub fn compact<const N: usize>(line: [Cell; N]) -> [Cell; N] {
    compact_with_merges(line).0
}

/// Like [`compact`], also returning how many merges happened.
pub fn compact_with_merges<const N: usize>(line: [Cell; N]) -> ([Cell; N], usize) {
    let mut out = [EMPTY; N];
    let mut cursor = 0usize;
    let mut pending: Option<Cell> = None;
    let mut merges = 0usize;

    for value in line.into_iter().filter(|&v| v != EMPTY) {
        match pending {
            None => pending = Some(value),
            Some(held) if held == value => {
                out[cursor] = held.saturating_mul(2);
                cursor += 1;
                pending = None;
                merges += 1;
            }
            Some(held) => {
                out[cursor] = held;
                cursor += 1;
                pending = Some(value);
            }
        }
    }

    // At most N non-zero inputs, so the cursor is still in range here.
    if let Some(held) = pending {
        out[cursor] = held;
    }

    (out, merges)
}

/// True if compacting `line` would change it.
pub fn can_compact<const N: usize>(line: [Cell; N]) -> bool {
    compact(line) != line
}
