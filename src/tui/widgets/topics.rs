use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::srs;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let today = srs::local_date(Utc::now(), app.zone());

    let items: Vec<ListItem> = app
        .topics
        .items
        .iter()
        .map(|topic| {
            let next = srs::local_date(topic.card.next_review, app.zone());
            let (next_color, next_text) = if next <= today {
                (Color::Red, format!("{} !", next.format("%b %d")))
            } else {
                (Color::White, next.format("%b %d").to_string())
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<30}", truncate(&topic.title, 28)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<14}", topic.area.as_deref().unwrap_or("-")),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(stage_bar(topic.card.stage), Style::default().fg(Color::Green)),
                Span::styled(
                    format!(" {}/5  ", topic.card.stage),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("{:<10}", next_text), Style::default().fg(next_color)),
                Span::styled(topic.tags.join(", "), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Topics: {} ", app.filter.label()))
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
    state.select(app.topics.selected);

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
