//! Booster actions - limited-use moves that bypass normal matching
//!
//! Each booster implements [`BoosterAction`]: the controller routes field
//! clicks to the active action, the action mutates the board/charges through
//! [`BoosterCtx`] and reports a [`ClickOutcome`] the controller applies.
//! Boosters never mint special tiles.

pub mod bomb;
pub mod swap;

pub use bomb::BombBooster;
pub use swap::SwapBooster;

use std::collections::HashMap;

use crate::core::board::Board;
use crate::types::{BoosterKind, CellPos, BOOSTER_BOMB_RADIUS};

/// Remaining booster uses, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoosterCharges {
    pub swap_left: u32,
    pub bomb_left: u32,
}

/// What the active booster can reach during one field click.
pub struct BoosterCtx<'a> {
    pub board: &'a mut Board,
    pub charges: &'a mut BoosterCharges,
}

/// The controller-visible result of one booster field click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Leave booster mode without spending anything
    ExitMode,
    /// Swap recorded its first cell; stay in booster mode
    Selected(CellPos),
    /// Swap's pending selection was cancelled; stay in booster mode
    SelectionCleared,
    /// A charge was spent; burn this group (never spawning specials), then exit
    Burn { group: Vec<CellPos> },
    /// A charge was spent and the board already swapped; run the post-swap
    /// move pipeline, then exit
    Swapped,
}

/// Shared contract for booster actions.
pub trait BoosterAction {
    fn kind(&self) -> BoosterKind;

    /// Called when the booster becomes the active mode.
    fn on_enter(&mut self) {}

    /// Called when booster mode ends, including cancellation.
    fn on_exit(&mut self) {}

    fn on_field_click(&mut self, ctx: &mut BoosterCtx<'_>, pos: CellPos) -> ClickOutcome;
}

/// Lookup of booster actions by kind.
pub struct BoosterRegistry {
    map: HashMap<BoosterKind, Box<dyn BoosterAction>>,
}

impl BoosterRegistry {
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn register(&mut self, action: Box<dyn BoosterAction>) {
        self.map.insert(action.kind(), action);
    }

    /// Panics on an unregistered kind: a missing registration at startup.
    pub fn get_mut(&mut self, kind: BoosterKind) -> &mut dyn BoosterAction {
        match self.map.get_mut(&kind) {
            Some(action) => action.as_mut(),
            None => panic!("booster action not registered: {}", kind.as_str()),
        }
    }
}

impl Default for BoosterRegistry {
    /// The standard pair: 5x5 bomb and free-form swap.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(BombBooster::new(BOOSTER_BOMB_RADIUS)));
        registry.register(Box::new(SwapBooster::new()));
        registry
    }
}
