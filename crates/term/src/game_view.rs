//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// Front-end state that is not part of the engine snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudStatus {
    pub paused: bool,
    /// Rows removed by the most recent lock, shown until the next one.
    pub last_clear: Option<u32>,
}

/// Lays the board out centered with a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: HudStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame_w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.height.saturating_mul(self.cell_h).saturating_add(2);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..snap.height {
            for x in 0..snap.width {
                let (ch, style) = match snap.cell(x, y).flatten() {
                    Some(color) => ('█', CellStyle::fg(color_rgb(color)).on(PLAYFIELD_BG).bold()),
                    None => ('·', CellStyle::fg(Rgb::new(90, 90, 100)).on(PLAYFIELD_BG).dim()),
                };
                let px = origin_x + 1 + x * self.cell_w;
                let py = origin_y + 1 + y * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, hud, panel_x, origin_y);

        let overlay = if snap.game_over {
            Some("GAME OVER")
        } else if hud.paused {
            Some("PAUSED")
        } else {
            None
        };
        if let Some(text) = overlay {
            let text_w = text.chars().count() as u16;
            let x = origin_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
            fb.put_str(x, origin_y + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: HudStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::fg(Rgb::new(200, 200, 200));
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(right, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: HudStatus,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(12) > fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let hint = value.dim();

        fb.put_str(panel_x, top, "SCORE", label);
        fb.put_u32(panel_x, top + 1, snap.score, value);
        fb.put_str(panel_x, top + 3, "LINES", label);
        fb.put_u32(panel_x, top + 4, snap.lines, value);

        if let Some(n) = hud.last_clear.filter(|n| *n > 0) {
            fb.put_char(panel_x, top + 5, '+', value.bold());
            fb.put_u32(panel_x + 1, top + 5, n, value.bold());
        }

        let controls = [
            "←/→  move",
            "↑    rotate",
            "↓    drop",
            "p    pause",
            "r    restart",
            "q    quit",
        ];
        for (i, line) in controls.iter().enumerate() {
            fb.put_str(panel_x, top + 8 + i as u16, line, hint);
        }
    }
}

/// Display color for an occupant.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}
