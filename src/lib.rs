//! Edutainment - terminal times tables quiz.
//!
//! The quiz logic (`game`, `question`, `stats`) is UI-agnostic; `input` and
//! `ui` drive it from a crossterm terminal.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod profile;
pub mod question;
pub mod stats;
pub mod ui;

pub use game::{AnswerError, Feedback, Game, GameState};
pub use question::{generate_questions, Question};
pub use stats::{GameSummary, UserStats};
