//! Screen: raw-mode terminal setup and framebuffer flushing.
//!
//! Draws by diffing against the previously presented frame and rewriting only
//! the changed runs, falling back to a full redraw on the first frame or a
//! size change.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{Cell, FrameBuffer};

pub struct Screen {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drop the remembered frame so the next present redraws everything.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        match self.prev.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.redraw_rows(fb, |x, y| prev.get(x, y) != fb.get(x, y))?;
            }
            _ => {
                self.stdout
                    .queue(terminal::Clear(terminal::ClearType::All))?;
                self.redraw_rows(fb, |_, _| true)?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.prev = Some(fb.clone());
        Ok(())
    }

    /// Rewrite every horizontal run of cells where `dirty` holds, with one
    /// cursor move per run.
    fn redraw_rows(&mut self, fb: &FrameBuffer, dirty: impl Fn(u16, u16) -> bool) -> Result<()> {
        let mut style: Option<Cell> = None;
        for y in 0..fb.height() {
            let mut x = 0;
            while x < fb.width() {
                if !dirty(x, y) {
                    x += 1;
                    continue;
                }
                self.stdout.queue(cursor::MoveTo(x, y))?;
                while x < fb.width() && dirty(x, y) {
                    let cell = fb.get(x, y).unwrap_or_default();
                    if !same_style(style, cell) {
                        self.apply_style(cell)?;
                        style = Some(cell);
                    }
                    self.stdout.queue(Print(cell.ch))?;
                    x += 1;
                }
            }
        }
        Ok(())
    }

    fn apply_style(&mut self, cell: Cell) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(cell.fg))?;
        self.stdout.queue(SetBackgroundColor(cell.bg))?;
        if cell.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

fn same_style(current: Option<Cell>, next: Cell) -> bool {
    current.is_some_and(|c| c.fg == next.fg && c.bg == next.bg && c.bold == next.bold)
}
