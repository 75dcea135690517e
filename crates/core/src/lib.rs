//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board transform engine and the session that drives it.
//! Apart from [`persist`] it performs no I/O, and all randomness flows through a
//! single generator owned by the [`Session`], making it:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Testable**: every rule is a plain function over a `Copy` board
//! - **Portable**: renderers only see a [`BoardSnapshot`]
//!
//! # Module Structure
//!
//! - [`board`]: the N x N grid of tiles
//! - [`line`]: single-pass slide-and-merge of one row or column
//! - [`moves`]: per-direction traversal table and the whole-board move
//! - [`spawn`]: random tile placement after a changed move
//! - [`game_over`]: terminal-state detection
//! - [`rng`]: the session's random source
//! - [`session`]: command processing, single-level undo, game-over handling
//! - [`snapshot`]: read-only renderer view
//! - [`persist`]: flat binary save/load
//!
//! # Rules
//!
//! - A move slides every tile toward one edge; equal neighbours merge once per move
//! - A move that changes nothing is not a turn: no spawn, no undo snapshot
//! - After a changed move one tile spawns: 2 (75%) or 4 (25%) in a random empty cell
//! - The game ends when the board is full and no two adjacent tiles are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Session;
//! use tui_2048_types::Direction;
//!
//! let mut game = Session::seeded(12345);
//! game.start();
//! assert_eq!(game.board().empty_count(), 15);
//!
//! // Some of these may not change the board; only changed moves spawn.
//! for dir in Direction::ALL {
//!     game.apply_move(dir);
//! }
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod game_over;
pub mod line;
pub mod moves;
pub mod persist;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_over::is_game_over;
pub use line::{compact, compact_with_merges, Line};
pub use moves::{apply_move, can_move, MoveOutcome, Traversal};
pub use persist::{load_board, save_board, PersistError};
pub use rng::GameRng;
pub use session::{CommandOutcome, Phase, Session};
pub use snapshot::BoardSnapshot;
pub use spawn::{spawn_tile, Spawned};
