//! Swap booster - exchange any two cells for one charge and one move
//!
//! Stateful across two clicks: the first click records a cell, the second
//! performs the swap. Re-clicking the recorded cell restarts selection.
//! Adjacency is deliberately not required.

use crate::boosters::{BoosterAction, BoosterCtx, ClickOutcome};
use crate::types::{BoosterKind, CellPos};

#[derive(Default)]
pub struct SwapBooster {
    first: Option<CellPos>,
}

impl SwapBooster {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoosterAction for SwapBooster {
    fn kind(&self) -> BoosterKind {
        BoosterKind::Swap
    }

    fn on_enter(&mut self) {
        self.first = None;
    }

    fn on_exit(&mut self) {
        self.first = None;
    }

    fn on_field_click(&mut self, ctx: &mut BoosterCtx<'_>, pos: CellPos) -> ClickOutcome {
        if ctx.charges.swap_left == 0 {
            return ClickOutcome::ExitMode;
        }

        let Some(first) = self.first else {
            self.first = Some(pos);
            return ClickOutcome::Selected(pos);
        };

        if first == pos {
            // Same cell again: cancel and restart selection.
            self.first = None;
            return ClickOutcome::SelectionCleared;
        }

        // Out-of-bounds or vacated cells cannot swap; keep the charge.
        if !ctx.board.is_occupied(first.x, first.y) || !ctx.board.is_occupied(pos.x, pos.y) {
            self.first = None;
            return ClickOutcome::SelectionCleared;
        }

        ctx.charges.swap_left -= 1;
        ctx.board.swap_tiles(first, pos);
        self.first = None;
        ClickOutcome::Swapped
    }
}
