//! Input handling for the quiz.
//!
//! Keeps the key dispatch out of main.rs as a priority chain: overlays first,
//! then whichever screen the game state selects.

use crate::game::{Feedback, Game, GameState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use tracing::debug;

/// Modal shown on top of the current screen. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Per-question advisory message (dismissed by any key).
    Alert(Feedback),
    /// "You got x/y" summary. `note` carries the message from skipping the last question.
    GameOver { note: Option<Feedback> },
    /// Lifetime stats sheet.
    Stats,
}

/// Everything the terminal front end needs between frames.
pub struct App {
    pub game: Game,
    pub overlay: Overlay,
    /// First Esc during a quiz arms the restart; a second one confirms it.
    pub restart_pending: bool,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            overlay: Overlay::None,
            restart_pending: false,
        }
    }
}

/// Result of handling one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// The session was reset; the profile should be saved.
    NeedsSave,
    Quit,
}

/// Main dispatcher. Handles the priority chain.
pub fn handle_key<R: Rng>(key: KeyEvent, app: &mut App, rng: &mut R) -> InputResult {
    // 0. Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return quit(app);
    }

    // 1. Alerts and the stats sheet: any key dismisses
    if matches!(app.overlay, Overlay::Alert(_) | Overlay::Stats) {
        app.overlay = Overlay::None;
        return InputResult::Continue;
    }

    // 2. Game over dialog
    if matches!(app.overlay, Overlay::GameOver { .. }) {
        return handle_game_over(key, app);
    }

    // 3. Screen for the current state
    match app.game.game_state {
        GameState::NotStarted => handle_setup(key, app, rng),
        GameState::InProgress => handle_quiz(key, app),
        GameState::Finished => handle_finished(key, app),
    }
}

fn handle_game_over(key: KeyEvent, app: &mut App) -> InputResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
            app.overlay = Overlay::None;
            play_again(app)
        }
        KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C') => {
            app.overlay = Overlay::None;
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}

fn handle_setup<R: Rng>(key: KeyEvent, app: &mut App, rng: &mut R) -> InputResult {
    let game = &mut app.game;
    match key.code {
        KeyCode::Left | KeyCode::Char('-') => {
            game.decrease_max_multiplier();
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            game.increase_max_multiplier();
        }
        KeyCode::Up => {
            game.previous_question_count();
        }
        KeyCode::Down => {
            game.next_question_count();
        }
        KeyCode::Enter => {
            game.start_game(rng);
            app.restart_pending = false;
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.overlay = Overlay::Stats;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return quit(app),
        _ => {}
    }
    InputResult::Continue
}

fn handle_quiz(key: KeyEvent, app: &mut App) -> InputResult {
    // Restart confirmation (double-Esc pattern)
    if app.restart_pending {
        app.restart_pending = false;
        if key.code == KeyCode::Esc {
            return play_again(app);
        }
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Enter => {
            let feedback = app.game.submit_answer();
            show_feedback(app, feedback);
        }
        KeyCode::Tab => {
            let feedback = app.game.skip_question();
            show_feedback(app, feedback);
        }
        KeyCode::Esc => {
            app.restart_pending = true;
        }
        KeyCode::Backspace => app.game.backspace(),
        KeyCode::Delete => app.game.clear_input(),
        KeyCode::Char(c) => app.game.push_char(c),
        _ => {}
    }
    InputResult::Continue
}

fn handle_finished(key: KeyEvent, app: &mut App) -> InputResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => play_again(app),
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.overlay = Overlay::Stats;
            InputResult::Continue
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => quit(app),
        _ => InputResult::Continue,
    }
}

/// Route the result of an answer or skip to the right dialog.
fn show_feedback(app: &mut App, feedback: Option<Feedback>) {
    app.overlay = if app.game.is_finished() {
        Overlay::GameOver { note: feedback }
    } else {
        match feedback {
            Some(feedback) => {
                if feedback.is_rejection() {
                    debug!(%feedback, input = %app.game.pending_input, "question kept");
                }
                Overlay::Alert(feedback)
            }
            None => Overlay::None,
        }
    };
}

/// A finished session is folded into the high score and stats before the
/// quit-time save, as "Play Again" would.
fn quit(app: &mut App) -> InputResult {
    if app.game.is_finished() {
        app.game.play_again();
    }
    app.overlay = Overlay::None;
    InputResult::Quit
}

fn play_again(app: &mut App) -> InputResult {
    let summary = app.game.play_again();
    debug!(recorded = summary.is_some(), "returned to setup");
    app.restart_pending = false;
    InputResult::NeedsSave
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::AnswerError;
    use crate::profile::Profile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) -> InputResult {
        handle_key(key(code), app, &mut ChaCha8Rng::seed_from_u64(1))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn started_app() -> App {
        let mut app = App::new(Game::new());
        press(&mut app, KeyCode::Enter);
        app
    }

    fn type_correct(app: &mut App) {
        let answer = app.game.current_question().unwrap().answer;
        type_text(app, &answer.to_string());
    }

    #[test]
    fn test_setup_keys() {
        let mut app = App::new(Game::new());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.game.max_multiplier, 3);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.game.question_count, 10);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.game.question_count, 5);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.overlay, Overlay::Stats);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.overlay, Overlay::None);

        assert_eq!(press(&mut app, KeyCode::Char('q')), InputResult::Quit);
    }

    #[test]
    fn test_enter_starts_game() {
        let app = started_app();
        assert_eq!(app.game.game_state, GameState::InProgress);
        assert_eq!(app.game.questions.len(), 5);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = started_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let result = handle_key(ctrl_c, &mut app, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(result, InputResult::Quit);
        assert!(app.game.pending_input.is_empty());
    }

    #[test]
    fn test_empty_submit_shows_alert() {
        let mut app = started_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.overlay,
            Overlay::Alert(Feedback::Rejected(AnswerError::EmptyInput))
        );
        assert_eq!(app.game.current_index, 0);

        // Any key dismisses without reaching the quiz
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.game.pending_input.is_empty());
    }

    #[test]
    fn test_typing_and_answering() {
        let mut app = started_app();
        type_text(&mut app, "9x");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.pending_input, "9");
        press(&mut app, KeyCode::Delete);
        assert!(app.game.pending_input.is_empty());

        type_correct(&mut app);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::Alert(Feedback::Correct));
        assert_eq!(app.game.correct_answers, 1);
    }

    #[test]
    fn test_finishing_opens_game_over() {
        let mut app = started_app();
        for _ in 0..5 {
            type_correct(&mut app);
            press(&mut app, KeyCode::Enter);
            if matches!(app.overlay, Overlay::Alert(_)) {
                press(&mut app, KeyCode::Enter);
            }
        }
        assert_eq!(app.overlay, Overlay::GameOver { note: None });
        assert!(app.game.is_finished());

        assert_eq!(press(&mut app, KeyCode::Enter), InputResult::NeedsSave);
        assert_eq!(app.game.game_state, GameState::NotStarted);
        assert_eq!(app.game.high_score, 5);
        assert_eq!(app.game.stats.games_played, 1);
    }

    #[test]
    fn test_skipping_last_question_notes_it() {
        let mut app = started_app();
        for _ in 0..4 {
            type_correct(&mut app);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.overlay,
            Overlay::GameOver {
                note: Some(Feedback::LastQuestionSkipped)
            }
        );
    }

    #[test]
    fn test_cancel_game_over_then_play_again() {
        let mut app = started_app();
        app.game.current_index = 4;
        press(&mut app, KeyCode::Tab);
        assert!(matches!(app.overlay, Overlay::GameOver { .. }));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.game.is_finished());

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.overlay, Overlay::Stats);
        press(&mut app, KeyCode::Esc);

        assert_eq!(press(&mut app, KeyCode::Char('p')), InputResult::NeedsSave);
        assert_eq!(app.game.game_state, GameState::NotStarted);
    }

    #[test]
    fn test_double_esc_restarts() {
        let mut app = started_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.restart_pending);

        // Any other key cancels
        press(&mut app, KeyCode::Char('1'));
        assert!(!app.restart_pending);
        assert!(app.game.pending_input.is_empty());
        assert_eq!(app.game.game_state, GameState::InProgress);

        press(&mut app, KeyCode::Esc);
        assert_eq!(press(&mut app, KeyCode::Esc), InputResult::NeedsSave);
        assert_eq!(app.game.game_state, GameState::NotStarted);
        assert_eq!(app.game.stats.games_played, 0);
    }

    fn finish_perfect_game(app: &mut App) {
        for _ in 0..5 {
            type_correct(app);
            press(app, KeyCode::Enter);
            if matches!(app.overlay, Overlay::Alert(_)) {
                press(app, KeyCode::Enter);
            }
        }
        assert!(app.game.is_finished());
    }

    #[test]
    fn test_quit_after_finishing_keeps_result() {
        let mut app = started_app();
        finish_perfect_game(&mut app);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);

        assert_eq!(press(&mut app, KeyCode::Char('q')), InputResult::Quit);
        let saved = Profile::from_game(&app.game, 0);
        assert_eq!(saved.high_score, 5);
        assert_eq!(saved.stats.games_played, 1);
        assert_eq!(saved.stats.perfect_games, 1);
    }

    #[test]
    fn test_ctrl_c_from_game_over_keeps_result() {
        let mut app = started_app();
        finish_perfect_game(&mut app);
        assert!(matches!(app.overlay, Overlay::GameOver { .. }));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let result = handle_key(ctrl_c, &mut app, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(result, InputResult::Quit);
        let saved = Profile::from_game(&app.game, 0);
        assert_eq!(saved.high_score, 5);
        assert_eq!(saved.stats.games_played, 1);
    }

    #[test]
    fn test_quit_mid_game_records_nothing() {
        let mut app = started_app();
        type_correct(&mut app);
        press(&mut app, KeyCode::Enter);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key(ctrl_c, &mut app, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(app.game.game_state, GameState::InProgress);
        assert_eq!(app.game.stats.games_played, 0);
    }
}
