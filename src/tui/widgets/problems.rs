use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::models::Difficulty;
use crate::srs;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let today = srs::local_date(Utc::now(), app.zone());

    let items: Vec<ListItem> = app
        .problems
        .items
        .iter()
        .map(|problem| {
            let difficulty_color = match problem.difficulty {
                Difficulty::Easy => Color::Green,
                Difficulty::Medium => Color::Yellow,
                Difficulty::Hard => Color::Red,
            };
            let next = srs::local_date(problem.card.next_review, app.zone());
            let (next_color, next_text) = if next <= today {
                (Color::Red, format!("{} !", next.format("%b %d")))
            } else {
                (Color::White, next.format("%b %d").to_string())
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<7}", problem.difficulty.as_str()),
                    Style::default().fg(difficulty_color),
                ),
                Span::styled(
                    format!("{:<34}", truncate(&problem.title, 32)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(stage_bar(problem.card.stage), Style::default().fg(Color::Green)),
                Span::styled(
                    format!(" {}/5  ", problem.card.stage),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("{:<10}", next_text), Style::default().fg(next_color)),
                Span::styled(
                    problem.topics.join(", "),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Problems: {} ", app.filter.label()))
        .title_style(Style::default().fg(Color::Cyan));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.problems.selected);

    f.render_stateful_widget(list, area, &mut state);
}

fn stage_bar(stage: u8) -> String {
    let filled = usize::from(stage.min(5));
    let empty = 5 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
