//! Presentation boundary - the contract the core drives the frontend through
//!
//! The core only ever calls outward through this trait; the frontend answers
//! each animation request with exactly one completion call back into
//! [`crate::controller::TurnController`]. HUD and booster-UI notifications
//! are fire-and-forget.

use crate::core::board::Board;
use crate::types::{BoosterKind, CellPos, GameOutcome};

pub trait GamePresenter {
    /// Animate the burn of `cells`. The frontend must answer with one call to
    /// `TurnController::on_burn_animation_complete`.
    fn play_burn_animation(&mut self, cells: &[CellPos]);

    /// Animate collapse/refill toward the given board snapshot. The frontend
    /// must answer with one call to `TurnController::on_refill_animation_complete`.
    fn play_refill_animation(&mut self, board: &Board);

    fn set_moves(&mut self, moves: u32);
    fn set_score(&mut self, score: u32, target: u32);
    fn set_level(&mut self, level: u32);

    fn set_swap_count(&mut self, count: u32);
    fn set_bomb_count(&mut self, count: u32);
    fn set_active_booster(&mut self, kind: Option<BoosterKind>);

    /// Terminal event; fired at most once per session. After this the core
    /// accepts no further turns.
    fn on_game_end(&mut self, outcome: GameOutcome, reason: &str);
}
