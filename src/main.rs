//! Terminal blast-puzzle runner (default binary).
//!
//! Uses crossterm for input and a framebuffer renderer; the board cursor
//! stands in for the pointer. One controller instance runs one level; the
//! session loop here restarts or advances it from the end overlay.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blast::boosters::BoosterCharges;
use tui_blast::config;
use tui_blast::controller::TurnController;
use tui_blast::input::{handle_key_event, should_quit, UiAction};
use tui_blast::progress::{FileProgressStore, ProgressStore};
use tui_blast::term::{GameView, PendingAnimation, SceneFrame, Screen, TermPresenter, Viewport};
use tui_blast::types::{
    BoosterKind, CellPos, GameOutcome, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_BOMB_CHARGES,
    DEFAULT_SWAP_CHARGES,
};

const BURN_FLASH: Duration = Duration::from_millis(140);
const REFILL_PAUSE: Duration = Duration::from_millis(90);

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let mut store = FileProgressStore::new(progress_path());
    let defaults = BoosterCharges {
        swap_left: DEFAULT_SWAP_CHARGES,
        bomb_left: DEFAULT_BOMB_CHARGES,
    };
    let view = GameView::default();
    let mut level = store.load_level_index();

    'session: loop {
        let charges = store.load_booster_counts(defaults);
        let mut ctrl = TurnController::new(level, clock_seed(), charges);
        let mut presenter = TermPresenter::new();
        ctrl.start(&mut presenter);

        let mut cursor = CellPos::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2);
        let mut progress_saved = false;

        loop {
            play_animations(&mut ctrl, &mut presenter, screen, &view, cursor)?;

            // Persist the advance as soon as the level is won, not when the
            // player leaves the overlay.
            if !progress_saved {
                if let Some((GameOutcome::Win, _)) = presenter.ended {
                    store.save_level_index(next_level(level));
                    progress_saved = true;
                }
            }

            let overlay = presenter
                .ended
                .as_ref()
                .map(|(outcome, reason)| overlay_lines(*outcome, reason, level));
            draw_frame(screen, &view, &ctrl, &presenter, cursor, &[], overlay.as_deref())?;

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }
            let key = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                Event::Resize(..) => {
                    screen.invalidate();
                    continue;
                }
                _ => continue,
            };
            if should_quit(key) {
                return Ok(());
            }
            let Some(action) = handle_key_event(key) else {
                continue;
            };

            if let Some((outcome, _)) = presenter.ended {
                match (outcome, action) {
                    (GameOutcome::Win, UiAction::NextLevel | UiAction::Activate) => {
                        if config::is_last_level(level) {
                            // Playing again restarts the whole run.
                            store.save_booster_counts(defaults);
                        }
                        level = next_level(level);
                        continue 'session;
                    }
                    (GameOutcome::Lose, UiAction::Restart | UiAction::Activate) => {
                        continue 'session;
                    }
                    _ => {}
                }
                continue;
            }

            match action {
                UiAction::CursorLeft => cursor.x = (cursor.x - 1).max(0),
                UiAction::CursorRight => cursor.x = (cursor.x + 1).min(BOARD_WIDTH - 1),
                UiAction::CursorUp => cursor.y = (cursor.y - 1).max(0),
                UiAction::CursorDown => cursor.y = (cursor.y + 1).min(BOARD_HEIGHT - 1),
                UiAction::Activate => ctrl.handle_field_click(cursor, &mut presenter, &mut store),
                UiAction::Cancel => ctrl.handle_secondary(&mut presenter),
                UiAction::ToggleBombBooster => ctrl.toggle_booster(BoosterKind::Bomb, &mut presenter),
                UiAction::ToggleSwapBooster => ctrl.toggle_booster(BoosterKind::Swap, &mut presenter),
                UiAction::Restart | UiAction::NextLevel => {}
            }
        }
    }
}

/// Play queued animations to completion, answering each with its completion
/// call; completions may queue follow-up animations.
fn play_animations(
    ctrl: &mut TurnController,
    presenter: &mut TermPresenter,
    screen: &mut Screen,
    view: &GameView,
    cursor: CellPos,
) -> Result<()> {
    while let Some(pending) = presenter.take_pending() {
        match pending {
            PendingAnimation::Burn(cells) => {
                draw_frame(screen, view, ctrl, presenter, cursor, &cells, None)?;
                thread::sleep(BURN_FLASH);
                ctrl.on_burn_animation_complete(presenter);
            }
            PendingAnimation::Refill => {
                draw_frame(screen, view, ctrl, presenter, cursor, &[], None)?;
                thread::sleep(REFILL_PAUSE);
                ctrl.on_refill_animation_complete(presenter);
            }
        }
    }
    Ok(())
}

fn draw_frame(
    screen: &mut Screen,
    view: &GameView,
    ctrl: &TurnController,
    presenter: &TermPresenter,
    cursor: CellPos,
    burning: &[CellPos],
    overlay: Option<&[String]>,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let frame = SceneFrame {
        board: ctrl.board(),
        hud: &presenter.hud,
        cursor,
        burning,
        overlay,
    };
    screen.present(&view.render(&frame, Viewport::new(w, h)))
}

fn overlay_lines(outcome: GameOutcome, reason: &str, level: usize) -> Vec<String> {
    match outcome {
        GameOutcome::Win if config::is_last_level(level) => vec![
            " ALL LEVELS CLEAR ".to_string(),
            format!(" {} ", reason),
            " [n] play again   [q] quit ".to_string(),
        ],
        GameOutcome::Win => vec![
            " LEVEL COMPLETE ".to_string(),
            format!(" {} ", reason),
            " [n] next level   [q] quit ".to_string(),
        ],
        GameOutcome::Lose => vec![
            " GAME OVER ".to_string(),
            format!(" {} ", reason),
            " [r] restart   [q] quit ".to_string(),
        ],
    }
}

fn next_level(level: usize) -> usize {
    if config::is_last_level(level) {
        0
    } else {
        level + 1
    }
}

fn progress_path() -> PathBuf {
    std::env::var_os("TUI_BLAST_PROGRESS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tui-blast-progress.json"))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
