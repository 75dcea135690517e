use crate::board::Grid;
use crate::session::Phase;
use crate::types::{Cell, BOARD_SIZE, EMPTY};

/// Read-only view of a session handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub cells: Grid,
    pub phase: Phase,
    pub game_over: bool,
    /// The most recent operation altered the board.
    pub changed: bool,
    pub can_undo: bool,
    /// Number of moves that changed the board since the last (re)start.
    pub moves: u32,
    pub max_tile: Cell,
}

impl BoardSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::AwaitingCommand
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            cells: [[EMPTY; BOARD_SIZE]; BOARD_SIZE],
            phase: Phase::Idle,
            game_over: false,
            changed: false,
            can_undo: false,
            moves: 0,
            max_tile: EMPTY,
        }
    }
}
