//! Turn controller - orchestrates one level from first click to game end
//!
//! The controller owns the board and the per-session bookkeeping and drives
//! the frontend through [`GamePresenter`]. Turns are strictly ordered: burn
//! animation, then the board mutation, then the refill animation, then move
//! and score bookkeeping, then the end check. While an animation is pending
//! the controller is busy and field input is ignored; the frontend reports
//! each animation done via the two `on_*_animation_complete` entry points.

use crate::boosters::{BoosterCharges, BoosterCtx, BoosterRegistry, ClickOutcome};
use crate::config;
use crate::core::board::Board;
use crate::core::cascade::CascadeResolver;
use crate::core::game_state::GameState;
use crate::core::{match_finder, move_finder, scoring};
use crate::progress::ProgressStore;
use crate::types::{BoosterKind, CellPos, GameOutcome, BOARD_HEIGHT, BOARD_WIDTH, MIN_GROUP_SIZE};
use crate::view::GamePresenter;

/// Where the current turn stands.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TurnPhase {
    Idle,
    /// Burn animation pending; the board has not been mutated yet.
    Burning {
        group: Vec<CellPos>,
        origin: Option<CellPos>,
        allow_spawn_special: bool,
    },
    /// Refill animation pending; the board already shows the settled state.
    Refilling { burned: usize },
}

pub struct TurnController {
    board: Board,
    state: GameState,
    charges: BoosterCharges,
    boosters: BoosterRegistry,
    cascade: CascadeResolver,
    min_group_size: usize,
    level: usize,
    active_booster: Option<BoosterKind>,
    phase: TurnPhase,
    finished: bool,
    outcome: Option<GameOutcome>,
}

impl TurnController {
    pub fn new(level: usize, seed: u32, charges: BoosterCharges) -> Self {
        let cfg = config::level(level);
        Self {
            board: Board::new(BOARD_WIDTH, BOARD_HEIGHT, seed),
            state: GameState::new(cfg.moves, cfg.target_score),
            charges,
            boosters: BoosterRegistry::default(),
            cascade: CascadeResolver::default(),
            min_group_size: MIN_GROUP_SIZE,
            level,
            active_booster: None,
            phase: TurnPhase::Idle,
            finished: false,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for frontends and scenario setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn charges(&self) -> BoosterCharges {
        self.charges
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn active_booster(&self) -> Option<BoosterKind> {
        self.active_booster
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// An animation is pending: field and booster input is ignored.
    pub fn is_busy(&self) -> bool {
        self.phase != TurnPhase::Idle
    }

    /// Push the full HUD state to a freshly attached frontend.
    pub fn start(&self, presenter: &mut dyn GamePresenter) {
        presenter.set_level(self.level as u32 + 1);
        presenter.set_moves(self.state.moves_left());
        presenter.set_score(self.state.score(), self.state.target_score());
        presenter.set_swap_count(self.charges.swap_left);
        presenter.set_bomb_count(self.charges.bomb_left);
        presenter.set_active_booster(self.active_booster);
    }

    /// A primary click on the field at `pos`.
    ///
    /// Routed to the active booster if one is armed, otherwise activates a
    /// special tile or burns an ordinary group. Ignored while busy, after the
    /// game ended, or with no moves left.
    pub fn handle_field_click(
        &mut self,
        pos: CellPos,
        presenter: &mut dyn GamePresenter,
        store: &mut dyn ProgressStore,
    ) {
        if self.is_busy() || self.finished || self.state.moves_left() == 0 {
            return;
        }

        if let Some(kind) = self.active_booster {
            self.booster_click(kind, pos, presenter, store);
            return;
        }

        if self.board.get(pos.x, pos.y).is_some_and(|t| t.is_special()) {
            let group = self.cascade.resolve(&self.board, pos);
            if !group.is_empty() {
                // Cascade burns never mint a new special.
                self.begin_burn(group, None, false, presenter);
            }
            return;
        }

        let group = match_finder::burn_group(&self.board, pos, self.min_group_size);
        if !group.is_empty() {
            self.begin_burn(group, Some(pos), true, presenter);
        }
    }

    /// Secondary click (or Esc): leave booster mode if one is armed.
    pub fn handle_secondary(&mut self, presenter: &mut dyn GamePresenter) {
        if self.is_busy() || self.finished {
            return;
        }
        self.exit_booster(presenter);
    }

    /// Arm `kind`, or disarm it if it is already active. Switching from the
    /// other booster exits that one first. Ignored while busy, after the game
    /// ended, or when the kind has no charges left.
    pub fn toggle_booster(&mut self, kind: BoosterKind, presenter: &mut dyn GamePresenter) {
        if self.is_busy() || self.finished {
            return;
        }
        if self.active_booster == Some(kind) {
            self.exit_booster(presenter);
            return;
        }
        let charges_left = match kind {
            BoosterKind::Swap => self.charges.swap_left,
            BoosterKind::Bomb => self.charges.bomb_left,
        };
        if charges_left == 0 {
            return;
        }
        self.exit_booster(presenter);
        self.boosters.get_mut(kind).on_enter();
        self.active_booster = Some(kind);
        presenter.set_active_booster(Some(kind));
    }

    /// The frontend reports the burn animation done: mutate the board and
    /// start the refill animation.
    pub fn on_burn_animation_complete(&mut self, presenter: &mut dyn GamePresenter) {
        match std::mem::replace(&mut self.phase, TurnPhase::Idle) {
            TurnPhase::Burning {
                group,
                origin,
                allow_spawn_special,
            } => {
                self.board.apply_burn(&group, origin, allow_spawn_special);
                self.phase = TurnPhase::Refilling {
                    burned: group.len(),
                };
                presenter.play_refill_animation(&self.board);
            }
            // Completion that does not match the phase is ignored.
            other => self.phase = other,
        }
    }

    /// The frontend reports the refill animation done: spend the move, score
    /// the burn and check for the end of the game.
    pub fn on_refill_animation_complete(&mut self, presenter: &mut dyn GamePresenter) {
        let burned = match std::mem::replace(&mut self.phase, TurnPhase::Idle) {
            TurnPhase::Refilling { burned } => burned,
            other => {
                self.phase = other;
                return;
            }
        };
        self.state.spend_move();
        self.state.add_score(scoring::burn_points(burned));
        presenter.set_moves(self.state.moves_left());
        presenter.set_score(self.state.score(), self.state.target_score());
        self.check_end(presenter);
    }

    fn booster_click(
        &mut self,
        kind: BoosterKind,
        pos: CellPos,
        presenter: &mut dyn GamePresenter,
        store: &mut dyn ProgressStore,
    ) {
        let outcome = {
            let mut ctx = BoosterCtx {
                board: &mut self.board,
                charges: &mut self.charges,
            };
            self.boosters.get_mut(kind).on_field_click(&mut ctx, pos)
        };

        match outcome {
            ClickOutcome::ExitMode => self.exit_booster(presenter),
            ClickOutcome::Selected(_) | ClickOutcome::SelectionCleared => {}
            ClickOutcome::Burn { group } => {
                store.save_booster_counts(self.charges);
                self.push_charge_counts(presenter);
                self.exit_booster(presenter);
                self.begin_burn(group, None, false, presenter);
            }
            ClickOutcome::Swapped => {
                store.save_booster_counts(self.charges);
                self.push_charge_counts(presenter);
                self.exit_booster(presenter);
                // The board already swapped in place; nothing burns, but the
                // turn still runs the settle animation and costs a move.
                self.phase = TurnPhase::Refilling { burned: 0 };
                presenter.play_refill_animation(&self.board);
            }
        }
    }

    fn begin_burn(
        &mut self,
        group: Vec<CellPos>,
        origin: Option<CellPos>,
        allow_spawn_special: bool,
        presenter: &mut dyn GamePresenter,
    ) {
        presenter.play_burn_animation(&group);
        self.phase = TurnPhase::Burning {
            group,
            origin,
            allow_spawn_special,
        };
    }

    fn exit_booster(&mut self, presenter: &mut dyn GamePresenter) {
        let Some(kind) = self.active_booster.take() else {
            return;
        };
        self.boosters.get_mut(kind).on_exit();
        presenter.set_active_booster(None);
    }

    /// Win beats loss; out-of-moves beats a dead board. Fires `on_game_end`
    /// at most once per session.
    fn check_end(&mut self, presenter: &mut dyn GamePresenter) {
        if self.finished {
            return;
        }
        if self.state.is_win() {
            self.finish(GameOutcome::Win, "target score reached", presenter);
        } else if self.state.is_lose() {
            self.finish(GameOutcome::Lose, "out of moves", presenter);
        } else if !move_finder::has_any_move(&self.board, self.min_group_size) {
            self.finish(GameOutcome::Lose, "no moves available", presenter);
        }
    }

    fn finish(&mut self, outcome: GameOutcome, reason: &str, presenter: &mut dyn GamePresenter) {
        self.finished = true;
        self.outcome = Some(outcome);
        presenter.on_game_end(outcome, reason);
    }

    fn push_charge_counts(&self, presenter: &mut dyn GamePresenter) {
        presenter.set_swap_count(self.charges.swap_left);
        presenter.set_bomb_count(self.charges.bomb_left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryProgressStore;
    use crate::types::{SpecialKind, TileColor, DEFAULT_BOMB_CHARGES, DEFAULT_SWAP_CHARGES, PALETTE};

    /// Records presenter calls without answering them; tests drive the two
    /// completion entry points by hand.
    #[derive(Default)]
    struct RecordingPresenter {
        burn_requests: Vec<Vec<CellPos>>,
        refill_requests: u32,
        moves: Option<u32>,
        score: Option<(u32, u32)>,
        swap_count: Option<u32>,
        bomb_count: Option<u32>,
        active_booster: Vec<Option<BoosterKind>>,
        ended: Vec<(GameOutcome, String)>,
    }

    impl GamePresenter for RecordingPresenter {
        fn play_burn_animation(&mut self, cells: &[CellPos]) {
            self.burn_requests.push(cells.to_vec());
        }

        fn play_refill_animation(&mut self, _board: &Board) {
            self.refill_requests += 1;
        }

        fn set_moves(&mut self, moves: u32) {
            self.moves = Some(moves);
        }

        fn set_score(&mut self, score: u32, target: u32) {
            self.score = Some((score, target));
        }

        fn set_level(&mut self, _level: u32) {}

        fn set_swap_count(&mut self, count: u32) {
            self.swap_count = Some(count);
        }

        fn set_bomb_count(&mut self, count: u32) {
            self.bomb_count = Some(count);
        }

        fn set_active_booster(&mut self, kind: Option<BoosterKind>) {
            self.active_booster.push(kind);
        }

        fn on_game_end(&mut self, outcome: GameOutcome, reason: &str) {
            self.ended.push((outcome, reason.to_string()));
        }
    }

    fn default_charges() -> BoosterCharges {
        BoosterCharges {
            swap_left: DEFAULT_SWAP_CHARGES,
            bomb_left: DEFAULT_BOMB_CHARGES,
        }
    }

    fn controller() -> TurnController {
        TurnController::new(0, 777, default_charges())
    }

    /// Repaint the board so no two adjacent cells share a color.
    fn paint_no_match(board: &mut Board) {
        for y in 0..board.height() {
            for x in 0..board.width() {
                let color = PALETTE[((x + 2 * y).rem_euclid(5)) as usize];
                board.set_tile(x, y, color, None);
            }
        }
    }

    /// Drive the pending turn to completion the way a frontend would.
    fn run_turn(ctrl: &mut TurnController, presenter: &mut RecordingPresenter) {
        ctrl.on_burn_animation_complete(presenter);
        ctrl.on_refill_animation_complete(presenter);
    }

    /// Like [`run_turn`], but plants a guaranteed pair before the end check so
    /// the random refill can never produce a dead board mid-test.
    fn run_turn_live(ctrl: &mut TurnController, presenter: &mut RecordingPresenter) {
        ctrl.on_burn_animation_complete(presenter);
        ctrl.board_mut().set_tile(6, 0, TileColor::Red, None);
        ctrl.board_mut().set_tile(7, 0, TileColor::Red, None);
        ctrl.on_refill_animation_complete(presenter);
    }

    #[test]
    fn test_ordinary_match_spends_move_and_scores() {
        let mut ctrl = controller();
        let mut presenter = RecordingPresenter::default();
        let mut store = MemoryProgressStore::default();
        paint_no_match(ctrl.board_mut());
        // Purple never borders this trio in the painted pattern.
        ctrl.board_mut().set_tile(2, 6, TileColor::Purple, None);
        ctrl.board_mut().set_tile(2, 7, TileColor::Purple, None);
        ctrl.board_mut().set_tile(3, 7, TileColor::Purple, None);
        let moves_before = ctrl.state().moves_left();

        ctrl.handle_field_click(CellPos::new(2, 6), &mut presenter, &mut store);
        assert!(ctrl.is_busy());
        assert_eq!(presenter.burn_requests.len(), 1);
        assert_eq!(presenter.burn_requests[0].len(), 3);

        run_turn(&mut ctrl, &mut presenter);
        assert!(!ctrl.is_busy());
        assert_eq!(ctrl.state().moves_left(), moves_before - 1);
        // 3 tiles: 3 * 10 + 1 * 5.
        assert_eq!(ctrl.state().score(), 35);
        assert_eq!(presenter.moves, Some(moves_before - 1));
    }

    #[test]
    fn test_single_tile_click_is_free() {
        let mut ctrl = controller();
        let mut presenter = RecordingPresenter::default();
        let mut store = MemoryProgressStore::default();
        paint_no_match(ctrl.board_mut());
        let moves_before = ctrl.state().moves_left();

        ctrl.handle_field_click(CellPos::new(3, 3), &mut presenter, &mut store);
        assert!(!ctrl.is_busy());
        assert_eq!(ctrl.state().moves_left(), moves_before);
        assert!(presenter.burn_requests.is_empty());
    }

    #[test]
    fn test_clicks_ignored_while_busy() {
        let mut ctrl = controller();
        let mut presenter = RecordingPresenter::default();
        let mut store = MemoryProgressStore::default();
        paint_no_match(ctrl.board_mut());
        ctrl.board_mut().set_tile(2, 6, TileColor::Red, None);
        ctrl.board_mut().set_tile(2, 7, TileColor::Red, None);
        ctrl.board_mut().set_tile(5, 0, TileColor::Blue, None);
        ctrl.board_mut().set_tile(5, 1, TileColor::Blue, None);

        ctrl.handle_field_click(CellPos::new(2, 6), &mut presenter, &mut store);
        // Second click lands mid-animation and must not start another turn.
        ctrl.handle_field_click(CellPos::new(5, 0), &mut presenter, &mut store);
        assert_eq!(presenter.burn_requests.len(), 1);

        run_turn(&mut ctrl, &mut presenter);
        assert_eq!(presenter.refill_requests, 1);
    }

    #[test]
    fn test_special_click_runs_cascade_without_spawning() {
        let mut ctrl = controller();
        let mut presenter = RecordingPresenter::default();
        let mut store = MemoryProgressStore::default();
        paint_no_match(ctrl.board_mut());
        ctrl.board_mut()
            .set_tile(4, 4, TileColor::Red, Some(SpecialKind::Bomb));
        let moves_before = ctrl.state().moves_left();

        ctrl.handle_field_click(CellPos::new(4, 4), &mut presenter, &mut store);
        assert_eq!(presenter.burn_requests[0].len(), 9);

        run_turn(&mut ctrl, &mut presenter);
        // 9 tiles: 9 * 10 + 7 * 5, for exactly one move.
        assert_eq!(ctrl.state().score(), 125);
        assert_eq!(ctrl.state().moves_left(), moves_before - 1);
        let specials = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| ctrl.board().get(x, y).is_some_and(|t| t.is_special()))
            .count();
        assert_eq!(specials, 0);
    }

    #[test]
    fn test_bomb_booster_turn() {
        let mut ctrl = controller();
        let mut presenter = RecordingPresenter::default();
        let mut store = MemoryProgressStore::default();
        paint_no_match(ctrl.board_mut());

        ctrl.toggle_booster(BoosterKind::Bomb, &mut presenter);
        assert_eq!(ctrl.active_booster(), Some(BoosterKind::Bomb));

        let moves_before = ctrl.state().moves_left();
        ctrl.handle_field_click(CellPos::new(4, 4), &mut presenter, &mut store);
        assert_eq!(presenter.burn_requests[0].len(), 25);
        // Spending the charge persists immediately and disarms the booster.
        assert_eq!(ctrl.charges().bomb_left, DEFAULT_BOMB_CHARGES - 1);
        assert_eq!(store.saves, 1);
        assert_eq!(ctrl.active_booster(), None);

        run_turn(&mut ctrl, &mut presenter);
        assert_eq!(ctrl.state().moves_left(), moves_before - 1);
        // Booster burns never mint specials even at 25 tiles.
        let specials = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| ctrl.board().get(x, y).is_some_and(|t| t.is_special()))
            .count();
        assert_eq!(specials, 0);
    }

    #[test]
    fn test_swap_booster_turn_costs_a_move() {
        let mut ctrl = controller();
        let mut presenter = RecordingPresenter::default();
        let mut store = MemoryProgressStore::default();
        paint_no_match(ctrl.board_mut());
        ctrl.board_mut().set_tile(0, 0, TileColor::Red, None);
        ctrl.board_mut().set_tile(7, 7, TileColor::Blue, None);

        ctrl.toggle_booster(BoosterKind::Swap, &mut presenter);
        let moves_before = ctrl.state().moves_left();
        ctrl.handle_field_click(CellPos::new(0, 0), &mut presenter, &mut store);
        assert!(!ctrl.is_busy());
        ctrl.handle_field_click(CellPos::new(7, 7), &mut presenter, &mut store);

        // No burn animation, but the settle still plays and the move is spent.
        assert!(presenter.burn_requests.is_empty());
        assert_eq!(presenter.refill_requests, 1);
        ctrl.on_refill_animation_complete(&mut presenter);
        assert_eq!(ctrl.state().moves_left(), moves_before - 1);
        assert_eq!(ctrl.state().score(), 0);
        assert_eq!(ctrl.charges().swap_left, DEFAULT_SWAP_CHARGES - 1);
        assert_eq!(ctrl.board().get(0, 0).unwrap().color, TileColor::Blue);
    }

    #[test]
    fn test_toggle_booster_gating() {
        let mut ctrl = TurnController::new(
            0,
            777,
            BoosterCharges {
                swap_left: 0,
                bomb_left: 1,
            },
        );
        let mut presenter = RecordingPresenter::default();

        // Zero charges: arming is refused.
        ctrl.toggle_booster(BoosterKind::Swap, &mut presenter);
        assert_eq!(ctrl.active_booster(), None);

        // Re-toggling disarms; switching kinds swaps the active mode.
        ctrl.toggle_booster(BoosterKind::Bomb, &mut presenter);
        assert_eq!(ctrl.active_booster(), Some(BoosterKind::Bomb));
        ctrl.toggle_booster(BoosterKind::Bomb, &mut presenter);
        assert_eq!(ctrl.active_booster(), None);
    }

    #[test]
    fn test_secondary_click_exits_booster_mode() {
        let mut ctrl = controller();
        let mut presenter = RecordingPresenter::default();

        ctrl.toggle_booster(BoosterKind::Swap, &mut presenter);
        ctrl.handle_secondary(&mut presenter);
        assert_eq!(ctrl.active_booster(), None);
        assert_eq!(presenter.active_booster.last(), Some(&None));
    }

    #[test]
    fn test_win_fires_once() {
        let mut ctrl = controller();
        let mut presenter = RecordingPresenter::default();
        let mut store = MemoryProgressStore::default();
        // A 9-cell blob scores 9 * 10 + 7 * 5 = 125 per click; repeat to pass
        // the level-0 target of 500.
        for round in 0..4 {
            paint_no_match(ctrl.board_mut());
            // The painted pattern puts no purple next to this corner block.
            for y in 0..3 {
                for x in 0..3 {
                    ctrl.board_mut().set_tile(x, y, TileColor::Purple, None);
                }
            }
            ctrl.handle_field_click(CellPos::new(1, 1), &mut presenter, &mut store);
            run_turn_live(&mut ctrl, &mut presenter);
            assert_eq!(ctrl.state().score(), 125 * (round + 1));
        }

        assert!(ctrl.is_finished());
        assert_eq!(ctrl.outcome(), Some(GameOutcome::Win));
        assert_eq!(presenter.ended.len(), 1);
        assert_eq!(presenter.ended[0].1, "target score reached");

        // Further input is dead after the end.
        ctrl.board_mut().set_tile(0, 0, TileColor::Red, None);
        ctrl.board_mut().set_tile(0, 1, TileColor::Red, None);
        ctrl.handle_field_click(CellPos::new(0, 0), &mut presenter, &mut store);
        assert!(!ctrl.is_busy());
        assert_eq!(presenter.ended.len(), 1);
    }

    #[test]
    fn test_out_of_moves_loses() {
        // Level 4: 20 moves toward 1100; pair burns at 20 points each can
        // never reach the target before the budget runs dry.
        let mut ctrl = TurnController::new(4, 777, default_charges());
        let mut presenter = RecordingPresenter::default();
        let mut store = MemoryProgressStore::default();

        // Burn pairs until the move budget runs dry.
        while ctrl.state().moves_left() > 0 && !ctrl.is_finished() {
            paint_no_match(ctrl.board_mut());
            ctrl.board_mut().set_tile(0, 6, TileColor::Red, None);
            ctrl.board_mut().set_tile(0, 7, TileColor::Red, None);
            ctrl.handle_field_click(CellPos::new(0, 7), &mut presenter, &mut store);
            run_turn_live(&mut ctrl, &mut presenter);
        }

        assert!(ctrl.is_finished());
        assert_eq!(ctrl.outcome(), Some(GameOutcome::Lose));
        assert_eq!(presenter.ended.len(), 1);
        assert_eq!(presenter.ended[0].1, "out of moves");
    }

    #[test]
    fn test_dead_board_loses_with_moves_left() {
        let mut ctrl = controller();
        let mut presenter = RecordingPresenter::default();
        let mut store = MemoryProgressStore::default();
        paint_no_match(ctrl.board_mut());
        ctrl.board_mut().set_tile(0, 6, TileColor::Red, None);
        ctrl.board_mut().set_tile(0, 7, TileColor::Red, None);

        ctrl.handle_field_click(CellPos::new(0, 7), &mut presenter, &mut store);
        ctrl.on_burn_animation_complete(&mut presenter);
        // Force a dead board before the end check runs.
        paint_no_match(ctrl.board_mut());
        ctrl.on_refill_animation_complete(&mut presenter);

        assert!(ctrl.is_finished());
        assert!(ctrl.state().moves_left() > 0);
        assert_eq!(presenter.ended[0].1, "no moves available");
    }

    #[test]
    fn test_start_pushes_full_hud() {
        let ctrl = controller();
        let mut presenter = RecordingPresenter::default();
        ctrl.start(&mut presenter);

        assert_eq!(presenter.moves, Some(config::level(0).moves));
        assert_eq!(presenter.score, Some((0, config::level(0).target_score)));
        assert_eq!(presenter.swap_count, Some(DEFAULT_SWAP_CHARGES));
        assert_eq!(presenter.bomb_count, Some(DEFAULT_BOMB_CHARGES));
    }
}
