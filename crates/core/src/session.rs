//! Session module - one game from first tile to exit
//!
//! Ties together the board, move engine, spawner, and game-over detection, and
//! keeps exactly one level of undo history. Commands are processed one at a time:
//! compaction, then spawn, then the game-over check.
//!
//! Phases:
//!
//! - `Idle`: constructed, board empty, waiting for [`Session::start`]
//! - `AwaitingCommand`: normal play
//! - `GameOver`: the board is stuck; only [`Session::resolve_game_over`] applies
//! - `Exited`: the player quit or declined a restart

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::game_over::is_game_over;
use crate::moves::apply_move;
use crate::persist::{load_board, save_board, PersistError};
use crate::rng::{self, GameRng};
use crate::snapshot::BoardSnapshot;
use crate::spawn::{bootstrap, spawn_tile, Spawned};
use crate::types::{Command, Direction, GameOverChoice, DEFAULT_SAVE_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    AwaitingCommand,
    GameOver,
    Exited,
}

/// What a dispatched [`Command`] did.
#[derive(Debug)]
pub enum CommandOutcome {
    /// The board changed.
    Changed,
    /// Accepted, but the board is as it was.
    Unchanged,
    Saved,
    /// Number of cells read from the save file.
    Loaded(usize),
    Help,
    Quit,
    /// Not accepted in the current phase.
    Ignored,
    /// Save or load failed; the board is unchanged.
    Failed(PersistError),
}

/// Complete game session.
#[derive(Debug, Clone)]
pub struct Session<R = GameRng> {
    board: Board,
    /// Board before the last changed move (single level, never chained).
    previous: Board,
    changed: bool,
    first_move_made: bool,
    phase: Phase,
    /// Moves that changed the board since the last (re)start.
    moves: u32,
    last_spawn: Option<Spawned>,
    save_path: PathBuf,
    rng: R,
}

impl Session<GameRng> {
    /// Create an idle session with a reproducible tile sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(rng::seeded(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Create an idle session with an empty board.
    pub fn new(rng: R) -> Self {
        Self {
            board: Board::new(),
            previous: Board::new(),
            changed: false,
            first_move_made: false,
            phase: Phase::Idle,
            moves: 0,
            last_spawn: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            rng,
        }
    }

    /// Continue from an existing board, skipping the bootstrap spawn.
    ///
    /// Undo history starts at `board`.
    pub fn resume(board: Board, rng: R) -> Self {
        let mut session = Self::new(rng);
        session.board = board;
        session.previous = board;
        session.refresh_phase();
        session
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Spawn the first tile and begin accepting commands.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.last_spawn = bootstrap(&mut self.board, &mut self.rng);
        self.previous = self.board;
        self.changed = true;
        self.phase = Phase::AwaitingCommand;
        info!(spawn = ?self.last_spawn, "session started");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn previous_board(&self) -> &Board {
        &self.previous
    }

    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn first_move_made(&self) -> bool {
        self.first_move_made
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_exited(&self) -> bool {
        self.phase == Phase::Exited
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Tile placed by the most recent spawn, if the last operation spawned one.
    pub fn last_spawn(&self) -> Option<Spawned> {
        self.last_spawn
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// True if an undo would restore a different board.
    pub fn can_undo(&self) -> bool {
        self.phase == Phase::AwaitingCommand && self.first_move_made && self.previous != self.board
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.cells = *self.board.rows();
        out.phase = self.phase;
        out.game_over = self.is_game_over();
        out.changed = self.changed;
        out.can_undo = self.can_undo();
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Slide the board toward `dir`. Returns true if the board changed.
    ///
    /// An unchanged move leaves the undo snapshot alone and spawns nothing.
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        if self.phase != Phase::AwaitingCommand {
            return false;
        }
        self.first_move_made = true;

        let outcome = apply_move(&self.board, dir);
        self.changed = outcome.changed;
        if outcome.changed {
            self.previous = self.board;
            self.board = outcome.board;
            self.moves = self.moves.wrapping_add(1);
            debug!(dir = dir.as_str(), merges = outcome.merges, "board moved");
        } else {
            debug!(dir = dir.as_str(), "move did not change the board");
        }

        self.last_spawn = spawn_tile(&mut self.board, self.changed, &mut self.rng);
        if let Some(tile) = self.last_spawn {
            debug!(row = tile.row, col = tile.col, value = tile.value, "tile spawned");
        }

        self.refresh_phase();
        outcome.changed
    }

    /// Restore the board from before the last changed move.
    ///
    /// No-op before the first move. Returns true if the board changed; a second
    /// undo in a row restores the same snapshot and so returns false.
    pub fn undo(&mut self) -> bool {
        if self.phase != Phase::AwaitingCommand || !self.first_move_made {
            return false;
        }
        let restored = self.board != self.previous;
        self.board = self.previous;
        self.changed = false;
        self.last_spawn = None;
        if restored {
            debug!("rolled back one move");
        }
        self.refresh_phase();
        restored
    }

    /// Save the board to the configured save path.
    pub fn save(&self) -> Result<(), PersistError> {
        self.save_to(&self.save_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PersistError> {
        match save_board(path, &self.board) {
            Ok(()) => {
                info!(path = %path.display(), "game saved");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                Err(e)
            }
        }
    }

    /// Replace the board with the contents of the configured save path.
    pub fn load(&mut self) -> Result<usize, PersistError> {
        let path = self.save_path.clone();
        self.load_from(&path)
    }

    /// Replace the board from `path`. Never spawns; the undo snapshot is kept.
    ///
    /// On failure the board is left unchanged.
    pub fn load_from(&mut self, path: &Path) -> Result<usize, PersistError> {
        match load_board(path, &mut self.board) {
            Ok(cells) => {
                self.changed = false;
                self.last_spawn = None;
                info!(path = %path.display(), cells, "game loaded");
                self.refresh_phase();
                Ok(cells)
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                Err(e)
            }
        }
    }

    /// Answer the game-over prompt. Returns false outside the GameOver phase.
    pub fn resolve_game_over(&mut self, choice: GameOverChoice) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        match choice {
            GameOverChoice::Return => {
                self.board = self.previous;
                self.changed = false;
                self.last_spawn = None;
                info!("returned to the board before the losing move");
                self.refresh_phase();
            }
            GameOverChoice::Restart => self.restart(),
            GameOverChoice::Exit => self.quit(),
        }
        true
    }

    /// Clear the board, spawn a fresh first tile, and reset history.
    pub fn restart(&mut self) {
        if self.phase == Phase::Exited {
            return;
        }
        self.board.clear();
        self.last_spawn = bootstrap(&mut self.board, &mut self.rng);
        self.previous = self.board;
        self.changed = true;
        self.first_move_made = false;
        self.moves = 0;
        self.phase = Phase::AwaitingCommand;
        info!(spawn = ?self.last_spawn, "session restarted");
    }

    pub fn quit(&mut self) {
        if self.phase != Phase::Exited {
            info!(moves = self.moves, max_tile = self.board.max_tile(), "session ended");
        }
        self.phase = Phase::Exited;
    }

    /// Dispatch a full command, using the configured save path for save/load.
    pub fn apply_command(&mut self, command: Command) -> CommandOutcome {
        if command == Command::Quit && self.phase != Phase::Exited {
            self.quit();
            return CommandOutcome::Quit;
        }
        if self.phase != Phase::AwaitingCommand {
            return CommandOutcome::Ignored;
        }

        match command {
            Command::Move(dir) => changed_outcome(self.apply_move(dir)),
            Command::Undo => changed_outcome(self.undo()),
            Command::Save => match self.save() {
                Ok(()) => CommandOutcome::Saved,
                Err(e) => CommandOutcome::Failed(e),
            },
            Command::Load => match self.load() {
                Ok(cells) => CommandOutcome::Loaded(cells),
                Err(e) => CommandOutcome::Failed(e),
            },
            Command::Help => CommandOutcome::Help,
            Command::Quit => CommandOutcome::Quit,
        }
    }

    fn refresh_phase(&mut self) {
        if matches!(self.phase, Phase::Exited) {
            return;
        }
        let over = is_game_over(&self.board);
        if over && self.phase != Phase::GameOver {
            info!(moves = self.moves, max_tile = self.board.max_tile(), "game over");
        }
        self.phase = if over {
            Phase::GameOver
        } else {
            Phase::AwaitingCommand
        };
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

fn changed_outcome(changed: bool) -> CommandOutcome {
    if changed {
        CommandOutcome::Changed
    } else {
        CommandOutcome::Unchanged
    }
}

impl Default for Session<GameRng> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
