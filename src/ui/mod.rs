//! Terminal rendering. Reads the `App` state; never mutates it.

pub mod dialogs;
pub mod game_common;
mod quiz_scene;
mod setup_scene;

use crate::game::GameState;
use crate::input::{App, Overlay};
use ratatui::Frame;

/// Draw the screen for the current game state, then any overlay on top.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let game = &app.game;

    match game.game_state {
        GameState::NotStarted => setup_scene::render_setup(frame, area, game),
        GameState::InProgress => quiz_scene::render_quiz(frame, area, game, app.restart_pending),
        GameState::Finished => quiz_scene::render_finished(frame, area, game),
    }

    match app.overlay {
        Overlay::None => {}
        Overlay::Alert(feedback) => dialogs::render_alert(frame, area, feedback),
        Overlay::GameOver { note } => dialogs::render_game_over(frame, area, game, note),
        Overlay::Stats => dialogs::render_stats(frame, area, game),
    }
}
