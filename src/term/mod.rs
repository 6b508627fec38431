//! Terminal frontend.
//!
//! Renders the board into a simple framebuffer (no widget toolkit) and
//! flushes it with diffed writes. The presenter layer translates controller
//! callbacks into data the frame loop consumes.

pub mod fb;
pub mod game_view;
pub mod presenter;
pub mod screen;

pub use fb::{Cell, FrameBuffer};
pub use game_view::{GameView, SceneFrame, Viewport};
pub use presenter::{Hud, PendingAnimation, TermPresenter};
pub use screen::Screen;
