//! GameView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell as Tile, BOARD_SIZE, EMPTY, HELP_LINES};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Transient text drawn around the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HudView<'a> {
    /// One-line message under the board (last command result).
    pub status: Option<&'a str>,
    /// Question shown over the board, e.g. `Restart? (y/n)`.
    pub prompt: Option<&'a str>,
    pub show_help: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the 2048 board.
///
/// Each tile occupies `cell_w x cell_h` terminal cells, the last column and
/// row of which are left as a gutter between tiles.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

const BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(60, 56, 52);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Tile colours indexed by `log2(value)`; index 0 is the empty cell.
const TILE_COLORS: [(Rgb, Rgb); 13] = [
    (Rgb::new(90, 84, 78), Rgb::new(120, 112, 104)),
    (Rgb::new(238, 228, 218), DARK_TEXT),
    (Rgb::new(237, 224, 200), DARK_TEXT),
    (Rgb::new(242, 177, 121), LIGHT_TEXT),
    (Rgb::new(245, 149, 99), LIGHT_TEXT),
    (Rgb::new(246, 124, 95), LIGHT_TEXT),
    (Rgb::new(246, 94, 59), LIGHT_TEXT),
    (Rgb::new(237, 207, 114), LIGHT_TEXT),
    (Rgb::new(237, 204, 97), LIGHT_TEXT),
    (Rgb::new(237, 200, 80), LIGHT_TEXT),
    (Rgb::new(237, 197, 63), LIGHT_TEXT),
    (Rgb::new(237, 194, 46), LIGHT_TEXT),
    (Rgb::new(60, 58, 50), LIGHT_TEXT),
];

impl Default for GameView {
    fn default() -> Self {
        // 7x4 gives a roughly square 6x3 tile on typical terminal fonts.
        Self::new(7, 4)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(2),
            anchor_y: AnchorY::Center,
        }
    }

    /// One text row per tile, for short terminals.
    pub fn compact() -> Self {
        Self::new(6, 2)
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the framed board, border included.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        (n * self.cell_w + 3, n * self.cell_h + 3)
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(LIGHT_TEXT, BG),
        });

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            // Keep one row free for the status line.
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };

        let board_style = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            board_style,
        );
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), BG),
        );

        for (row, cells) in snap.cells.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x + frame_w + 2, start_y);

        if let Some(status) = hud.status {
            let style = CellStyle::new(Rgb::new(200, 200, 200), BG);
            fb.put_str_centered(start_x, start_y + frame_h, frame_w, status, style);
        }

        if snap.game_over {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, "FAILED", hud.prompt);
        } else if let Some(prompt) = hud.prompt {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, prompt, None);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of the tile at `(row, col)`.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        (
            start_x + 2 + col * self.cell_w,
            start_y + 2 + row * self.cell_h,
        )
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: Tile) {
        let (px, py) = self.tile_origin(start_x, start_y, row, col);
        let tile_w = self.cell_w - 1;
        let tile_h = self.cell_h - 1;
        let (bg, fg) = TILE_COLORS[tile_rank(value)];
        let style = CellStyle::new(fg, bg);

        fb.fill_rect(px, py, tile_w, tile_h, ' ', style);
        let text_y = py + (tile_h - 1) / 2;
        if value == EMPTY {
            fb.put_str_centered(px, text_y, tile_w, ".", style.dim());
        } else {
            fb.put_int_centered(px, text_y, tile_w, i64::from(value), style.bold());
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "2048", CellStyle::new(Rgb::new(237, 194, 46), BG).bold());
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_int(panel_x, y + 1, i64::from(snap.moves), value);
        y += 3;

        fb.put_str(panel_x, y, "BEST", label);
        fb.put_int(panel_x, y + 1, i64::from(snap.max_tile), value);
        y += 3;

        fb.put_str(panel_x, y, "UNDO", label);
        fb.put_str(panel_x, y + 1, if snap.can_undo { "yes" } else { "no" }, value);
        y += 3;

        if hud.show_help {
            fb.put_str(panel_x, y, "KEYS", label);
            for line in HELP_LINES {
                y += 1;
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, line, value);
            }
        } else {
            fb.put_str(panel_x, y, "h: help", value.dim());
        }
    }
}

/// Colour-table index for a tile value.
fn tile_rank(value: Tile) -> usize {
    if value == EMPTY {
        return 0;
    }
    let bits = if value > 0 {
        (u32::BITS - (value as u32).leading_zeros()) as usize - 1
    } else {
        1
    };
    bits.clamp(1, TILE_COLORS.len() - 1)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    title: &str,
    detail: Option<&str>,
) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
    let lines = if detail.is_some() { 2 } else { 1 };
    let box_w = title
        .chars()
        .count()
        .max(detail.map_or(0, |d| d.chars().count())) as u16
        + 4;
    let box_x = start_x + frame_w.saturating_sub(box_w) / 2;
    let box_y = start_y + frame_h.saturating_sub(lines + 2) / 2;

    fb.fill_rect(box_x, box_y, box_w, lines + 2, ' ', style);
    fb.put_str_centered(box_x, box_y + 1, box_w, title, style);
    if let Some(detail) = detail {
        fb.put_str_centered(box_x, box_y + 2, box_w, detail, CellStyle { bold: false, ..style });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_rank() {
        assert_eq!(tile_rank(EMPTY), 0);
        assert_eq!(tile_rank(2), 1);
        assert_eq!(tile_rank(4), 2);
        assert_eq!(tile_rank(2048), 11);
        assert_eq!(tile_rank(4096), 12);
        assert_eq!(tile_rank(1 << 20), 12);
        assert_eq!(tile_rank(3), 1);
        assert_eq!(tile_rank(-8), 1);
    }

    #[test]
    fn test_frame_size() {
        assert_eq!(GameView::default().frame_size(), (31, 19));
        assert_eq!(GameView::compact().frame_size(), (27, 11));
    }

    #[test]
    fn test_degenerate_cells_are_clamped() {
        assert_eq!(GameView::new(0, 0).frame_size(), GameView::new(2, 2).frame_size());
    }
}
