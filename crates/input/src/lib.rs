//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] values and yes/no
//! answers. It holds no state and knows nothing about the board.

pub mod map;

pub use tui_2048_types as types;

pub use map::{map_answer, map_key, should_quit};
