use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::models::TaskStatus;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .items
        .iter()
        .map(|task| {
            let completed = task.status == TaskStatus::Completed;
            let checkbox = if completed { "[x]" } else { "[ ]" };
            let status_color = match task.status {
                TaskStatus::Todo => Color::White,
                TaskStatus::InProgress => Color::Cyan,
                TaskStatus::Blocked => Color::Red,
                TaskStatus::Completed => Color::Green,
            };
            let title_style = if completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            let due = task
                .due_date
                .map(|d| d.format("%b %d").to_string())
                .unwrap_or_default();

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", checkbox), Style::default().fg(status_color)),
                Span::styled(format!("{:<40}", truncate(&task.title, 38)), title_style),
                Span::styled(
                    format!("{:<12}", task.category.label()),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    format!("{:<12}", task.status.label()),
                    Style::default().fg(status_color),
                ),
                Span::styled(due, Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Board ")
        .title_style(Style::default().fg(Color::Magenta));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.tasks.selected);

    f.render_stateful_widget(list, area, &mut state);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
