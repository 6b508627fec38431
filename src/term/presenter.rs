//! TermPresenter: collects controller callbacks for the terminal loop.
//!
//! The controller drives the frontend synchronously, so animation requests
//! are queued here and the main loop plays them back, answering each with the
//! matching completion call. HUD updates just overwrite the cached values.

use std::collections::VecDeque;

use crate::core::board::Board;
use crate::types::{BoosterKind, CellPos, GameOutcome};
use crate::view::GamePresenter;

/// Cached HUD values, rendered every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub level: u32,
    pub moves: u32,
    pub score: u32,
    pub target: u32,
    pub swap_count: u32,
    pub bomb_count: u32,
    pub active_booster: Option<BoosterKind>,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            level: 1,
            moves: 0,
            score: 0,
            target: 0,
            swap_count: 0,
            bomb_count: 0,
            active_booster: None,
        }
    }
}

/// One queued animation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAnimation {
    Burn(Vec<CellPos>),
    Refill,
}

#[derive(Default)]
pub struct TermPresenter {
    pub hud: Hud,
    pending: VecDeque<PendingAnimation>,
    pub ended: Option<(GameOutcome, String)>,
}

impl TermPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the next animation to play, in request order.
    pub fn take_pending(&mut self) -> Option<PendingAnimation> {
        self.pending.pop_front()
    }
}

impl GamePresenter for TermPresenter {
    fn play_burn_animation(&mut self, cells: &[CellPos]) {
        self.pending.push_back(PendingAnimation::Burn(cells.to_vec()));
    }

    fn play_refill_animation(&mut self, _board: &Board) {
        self.pending.push_back(PendingAnimation::Refill);
    }

    fn set_moves(&mut self, moves: u32) {
        self.hud.moves = moves;
    }

    fn set_score(&mut self, score: u32, target: u32) {
        self.hud.score = score;
        self.hud.target = target;
    }

    fn set_level(&mut self, level: u32) {
        self.hud.level = level;
    }

    fn set_swap_count(&mut self, count: u32) {
        self.hud.swap_count = count;
    }

    fn set_bomb_count(&mut self, count: u32) {
        self.hud.bomb_count = count;
    }

    fn set_active_booster(&mut self, kind: Option<BoosterKind>) {
        self.hud.active_booster = kind;
    }

    fn on_game_end(&mut self, outcome: GameOutcome, reason: &str) {
        self.ended = Some((outcome, reason.to_string()));
    }
}
