//! Terminal renderer for the 2048 board.
//!
//! Rendering goes through a small framebuffer instead of a widget toolkit:
//! [`GameView`] paints a [`core::BoardSnapshot`](crate::core::BoardSnapshot)
//! into a [`FrameBuffer`], and [`TerminalRenderer`] flushes it, re-emitting only
//! the cells that changed since the previous frame.
//!
//! [`text`] provides the plain tab-separated dump used for non-interactive
//! output.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::{render_text, write_text};
