//! Modal dialogs: per-question alerts, game over, lifetime stats.

use super::game_common::{controls_line, render_modal};
use crate::game::{Feedback, Game};
use crate::stats::UserStats;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Correct => Color::Green,
        Feedback::IncorrectPenalized | Feedback::IncorrectNoPenalty => Color::Red,
        Feedback::Skipped | Feedback::LastQuestionSkipped => Color::Cyan,
        Feedback::SkipDenied | Feedback::Rejected(_) => Color::Yellow,
    }
}

pub fn render_alert(frame: &mut Frame, area: Rect, feedback: Feedback) {
    let color = feedback_color(feedback);
    let lines = vec![
        Line::from(Span::styled(
            feedback.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Press any key]",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_modal(frame, area, "Edutainment", color, lines, 48);
}

pub fn render_game_over(frame: &mut Frame, area: Rect, game: &Game, note: Option<Feedback>) {
    let mut lines = Vec::new();

    if let Some(note) = note {
        lines.push(Line::from(Span::styled(
            note.to_string(),
            Style::default().fg(feedback_color(note)),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!(
            "You got {}/{}",
            game.correct_answers,
            game.total_questions()
        ),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));

    if game.correct_answers > game.high_score {
        lines.push(Line::from(Span::styled(
            "New high score!",
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(controls_line(&[("[Enter]", "Play Again"), ("[Esc]", "Cancel")]));

    render_modal(frame, area, "Game Over", Color::Yellow, lines, 44);
}

/// Lines of the lifetime stats sheet.
pub fn stats_lines(stats: &UserStats, high_score: u32) -> Vec<String> {
    vec![
        format!("Player has played {} games", stats.games_played),
        format!("Player has won {} games", stats.games_won),
        format!("Player has lost {} games", stats.games_lost),
        format!("Player win rate is {:.0}%", stats.win_rate() * 100.0),
        format!("Player average score is {:.2}", stats.average_score()),
        format!("Player perfect games is {}", stats.perfect_games),
        format!("High score is {}", high_score),
    ]
}

pub fn render_stats(frame: &mut Frame, area: Rect, game: &Game) {
    let colors = [
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::LightGreen,
        Color::Cyan,
        Color::Magenta,
        Color::White,
    ];

    let mut lines: Vec<Line> = stats_lines(&game.stats, game.high_score)
        .into_iter()
        .zip(colors)
        .map(|(text, color)| Line::from(Span::styled(text, Style::default().fg(color))))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Press any key]",
        Style::default().fg(Color::DarkGray),
    )));

    render_modal(frame, area, "Player's Life Stats", Color::Gray, lines, 44);
}
