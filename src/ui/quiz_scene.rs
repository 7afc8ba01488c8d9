//! Quiz screen: score panel, current question and answer field.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_restart_status_bar, render_status_bar,
};
use crate::game::Game;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_quiz(frame: &mut Frame, area: Rect, game: &Game, restart_pending: bool) {
    let layout = create_game_layout(frame, area, " Edutainment ", Color::Cyan, 9, 30);

    render_question(frame, layout.content, game);
    if !render_restart_status_bar(frame, layout.status_bar, restart_pending) {
        render_status_bar(
            frame,
            layout.status_bar,
            "Type your answer",
            Color::Green,
            &[
                ("[Enter]", "Check Answer"),
                ("[Tab]", "Skip"),
                ("[Esc]", "Restart"),
            ],
        );
    }
    render_score_panel(frame, layout.info_panel, game);
}

fn render_question(frame: &mut Frame, area: Rect, game: &Game) {
    let Some(question) = game.current_question() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Question number
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Answer field
            Constraint::Min(0),
        ])
        .split(area);

    let number = Paragraph::new(format!("Question {}", game.question_number()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(number, chunks[1]);

    let prompt = Paragraph::new(question.text.as_str())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[2]);

    let field_width = 24.min(chunks[3].width);
    let field_area = Rect {
        x: chunks[3].x + (chunks[3].width - field_width) / 2,
        width: field_width,
        ..chunks[3]
    };
    let input = if game.pending_input.is_empty() {
        Line::from(Span::styled(
            "What is your answer?",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!("{}_", game.pending_input),
            Style::default().fg(Color::Yellow),
        ))
    };
    let field = Paragraph::new(input)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(field, field_area);
}

fn render_score_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let inner = render_info_panel_frame(frame, area, " Score ");

    let skips_color = if game.skips_remaining == 0 {
        Color::Red
    } else {
        Color::White
    };

    let lines = vec![
        Line::from(format!("Current High Score is {}", game.high_score)),
        Line::from(format!(
            "Current Score is {} / {}",
            game.correct_answers,
            game.total_questions()
        )),
        Line::from(Span::styled(
            format!("Skips left: {}", game.skips_remaining),
            Style::default().fg(skips_color),
        )),
        Line::from(format!("{} questions left", game.questions_left())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Max multiplier: {}", game.max_multiplier),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Shown once the game over dialog is dismissed without playing again.
pub fn render_finished(frame: &mut Frame, area: Rect, game: &Game) {
    let layout = create_game_layout(frame, area, " Edutainment ", Color::Cyan, 6, 30);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Game Over",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "You got {}/{}",
            game.correct_answers,
            game.total_questions()
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        layout.content,
    );

    render_status_bar(
        frame,
        layout.status_bar,
        "",
        Color::White,
        &[("[P]", "Play Again"), ("[S]", "Stats"), ("[Q]", "Quit")],
    );
    render_score_panel(frame, layout.info_panel, game);
}
