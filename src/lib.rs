//! TUI Blast: a terminal match-blast puzzle.
//!
//! `core` holds the pure board simulation (matching, specials, cascades,
//! gravity and scoring); `boosters` and `controller` run turns on top of it;
//! `term` is the crossterm frontend. Everything outside `term` and `main` is
//! deterministic and headless.

pub mod boosters;
pub mod config;
pub mod controller;
pub mod core;
pub mod input;
pub mod progress;
pub mod term;
pub mod types;
pub mod view;
