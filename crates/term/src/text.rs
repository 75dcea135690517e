//! Plain-text board dump for non-interactive output.

use std::io;

use crate::core::Board;
use crate::types::EMPTY;

/// Placeholder printed for empty cells.
pub const EMPTY_GLYPH: char = '.';

/// Render the board as tab-separated rows, one line per row.
///
/// Every cell is followed by a tab, empty cells print as `.`.
pub fn render_text(board: &Board) -> String {
    let mut out = String::with_capacity(board.size() * board.size() * 6);
    for row in board.rows() {
        for &value in row {
            if value == EMPTY {
                out.push(EMPTY_GLYPH);
            } else {
                out.push_str(&value.to_string());
            }
            out.push('\t');
        }
        out.push('\n');
    }
    out
}

/// Write [`render_text`] output to `w`.
pub fn write_text<W: io::Write>(w: &mut W, board: &Board) -> io::Result<()> {
    w.write_all(render_text(board).as_bytes())?;
    w.flush()
}
