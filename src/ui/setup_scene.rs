//! Setup screen: difficulty stepper and question count picker.

use super::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use crate::constants::{MAX_MULTIPLIER, MIN_MULTIPLIER, QUESTION_CHOICES};
use crate::game::Game;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_setup(frame: &mut Frame, area: Rect, game: &Game) {
    let layout = create_game_layout(frame, area, " Edutainment ", Color::Cyan, 12, 24);

    render_choices(frame, layout.content, game);
    render_status_bar(
        frame,
        layout.status_bar,
        "Pick your practice settings",
        Color::Yellow,
        &[
            ("[\u{2190}\u{2192}]", "Multiplier"),
            ("[\u{2191}\u{2193}]", "Questions"),
            ("[Enter]", "Play"),
            ("[S]", "Stats"),
            ("[Q]", "Quit"),
        ],
    );
    render_profile_panel(frame, layout.info_panel, game);
}

fn render_choices(frame: &mut Frame, area: Rect, game: &Game) {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let arrow = |enabled: bool| {
        Style::default().fg(if enabled { Color::White } else { Color::DarkGray })
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Welcome to Edutainment!", heading)),
        Line::from(""),
        Line::from(Span::styled(
            "Practice Choices",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("\u{25C0} ", arrow(game.max_multiplier > MIN_MULTIPLIER)),
            Span::styled(
                format!("Max Multiplier is {}", game.max_multiplier),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" \u{25B6}", arrow(game.max_multiplier < MAX_MULTIPLIER)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Choose Number of Questions",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let mut picker = Vec::new();
    for (i, &choice) in QUESTION_CHOICES.iter().enumerate() {
        if i > 0 {
            picker.push(Span::raw(" "));
        }
        let style = if choice == game.question_count {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        picker.push(Span::styled(format!(" {:>2} ", choice), style));
    }
    lines.push(Line::from(picker));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_profile_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let inner = render_info_panel_frame(frame, area, " Profile ");
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(vec![
            Span::styled("High score: ", label),
            Span::styled(
                game.high_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Played: ", label),
            Span::styled(
                game.stats.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Average: ", label),
            Span::styled(
                format!("{:.2}", game.stats.average_score()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
