//! GameView: maps the board and HUD into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::board::Board;
use crate::term::fb::{Cell, FrameBuffer};
use crate::term::presenter::Hud;
use crate::types::{BoosterKind, CellPos, SpecialKind, TileColor};

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

/// Everything one frame needs, borrowed from the session.
pub struct SceneFrame<'a> {
    pub board: &'a Board,
    pub hud: &'a Hud,
    pub cursor: CellPos,
    /// Cells flashing during the burn animation.
    pub burning: &'a [CellPos],
    pub overlay: Option<&'a [String]>,
}

/// A lightweight terminal renderer for the blast board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

const BOARD_BG: Color = Color::Rgb { r: 30, g: 30, b: 40 };
const BORDER_FG: Color = Color::Rgb { r: 200, g: 200, b: 200 };
const CURSOR_BG: Color = Color::Rgb { r: 90, g: 90, b: 110 };
const BURN_FG: Color = Color::Rgb { r: 255, g: 240, b: 120 };

impl GameView {
    pub fn render(&self, frame: &SceneFrame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear();

        let board_px_w = frame.board.width() as u16 * self.cell_w;
        let board_px_h = frame.board.height() as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 18) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        for y in 0..frame.board.height() {
            for x in 0..frame.board.width() {
                let pos = CellPos::new(x, y);
                let burning = frame.burning.contains(&pos);
                let under_cursor = frame.cursor == pos && frame.overlay.is_none();
                self.draw_cell(&mut fb, start_x, start_y, frame, pos, burning, under_cursor);
            }
        }

        self.draw_side_panel(&mut fb, frame.hud, viewport, start_x, start_y, frame_w);

        if let Some(lines) = frame.overlay {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, lines);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let cell = |ch| Cell::new(ch, BORDER_FG, Color::Reset);
        fb.set(x, y, cell('┌'));
        fb.set(x + w - 1, y, cell('┐'));
        fb.set(x, y + h - 1, cell('└'));
        fb.set(x + w - 1, y + h - 1, cell('┘'));
        for dx in 1..w - 1 {
            fb.set(x + dx, y, cell('─'));
            fb.set(x + dx, y + h - 1, cell('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, cell('│'));
            fb.set(x + w - 1, y + dy, cell('│'));
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame: &SceneFrame<'_>,
        pos: CellPos,
        burning: bool,
        under_cursor: bool,
    ) {
        let px = start_x + 1 + pos.x as u16 * self.cell_w;
        let py = start_y + 1 + pos.y as u16;

        let (ch, fg) = match frame.board.get(pos.x, pos.y) {
            Some(tile) => (tile_glyph(tile.special), tile_color(tile.color)),
            None => ('·', Color::Rgb { r: 90, g: 90, b: 100 }),
        };

        let bg = if under_cursor { CURSOR_BG } else { BOARD_BG };
        let mut cell = if burning {
            Cell::new('✸', BURN_FG, bg).bold()
        } else {
            Cell::new(ch, fg, bg)
        };
        if frame.board.get(pos.x, pos.y).is_some_and(|t| t.is_special()) {
            cell = cell.bold();
        }

        for dx in 0..self.cell_w {
            // Glyph in the left column, padding after it.
            let c = if dx == 0 { cell } else { Cell::new(' ', fg, bg) };
            fb.set(px + dx, py, c);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        hud: &Hud,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x + 12 > viewport.width {
            return;
        }

        let label = Color::Rgb { r: 220, g: 220, b: 220 };
        let value = Color::Rgb { r: 160, g: 160, b: 170 };

        let mut y = start_y;
        let mut row = |fb: &mut FrameBuffer, text: String, strong: bool| {
            if strong {
                fb.put_str_bold(panel_x, y, &text, label, Color::Reset);
            } else {
                fb.put_str(panel_x, y, &text, value, Color::Reset);
            }
            y = y.saturating_add(1);
        };

        row(fb, format!("LEVEL {}", hud.level), true);
        row(fb, String::new(), false);
        row(fb, "SCORE".to_string(), true);
        row(fb, format!("{} / {}", hud.score, hud.target), false);
        row(fb, String::new(), false);
        row(fb, "MOVES".to_string(), true);
        row(fb, format!("{}", hud.moves), false);
        row(fb, String::new(), false);
        row(fb, "BOOSTERS".to_string(), true);
        row(
            fb,
            format!(
                "{}[b]omb x{}",
                active_marker(hud.active_booster, BoosterKind::Bomb),
                hud.bomb_count
            ),
            hud.active_booster == Some(BoosterKind::Bomb),
        );
        row(
            fb,
            format!(
                "{}[s]wap x{}",
                active_marker(hud.active_booster, BoosterKind::Swap),
                hud.swap_count
            ),
            hud.active_booster == Some(BoosterKind::Swap),
        );
        row(fb, String::new(), false);
        row(fb, "arrows move  space burn".to_string(), false);
        row(fb, "esc cancel   q quit".to_string(), false);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[String],
    ) {
        let mid_y = start_y + frame_h / 2;
        let first_y = mid_y.saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str_bold(x, first_y + i as u16, line, Color::White, Color::Black);
        }
    }
}

fn tile_color(color: TileColor) -> Color {
    match color {
        TileColor::Red => Color::Rgb { r: 220, g: 80, b: 80 },
        TileColor::Green => Color::Rgb { r: 100, g: 220, b: 120 },
        TileColor::Blue => Color::Rgb { r: 80, g: 140, b: 230 },
        TileColor::Yellow => Color::Rgb { r: 240, g: 220, b: 80 },
        TileColor::Purple => Color::Rgb { r: 200, g: 120, b: 220 },
    }
}

fn tile_glyph(special: Option<SpecialKind>) -> char {
    match special {
        None => '●',
        Some(SpecialKind::Bomb) => '◎',
        Some(SpecialKind::RocketRow) => '◄',
        Some(SpecialKind::RocketColumn) => '▲',
    }
}

fn active_marker(active: Option<BoosterKind>, kind: BoosterKind) -> &'static str {
    if active == Some(kind) {
        "> "
    } else {
        "  "
    }
}
