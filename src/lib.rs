//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under one `tui_2048::{core,input,term,types}`
//! namespace and holds the runtime configuration used by the binary.

pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
