use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::TaskStatus;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Stats + due reviews row
            Constraint::Min(0),    // Open tasks
        ])
        .split(area);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_stats(f, app, top_chunks[0]);
    draw_due_reviews(f, app, top_chunks[1]);
    draw_open_tasks(f, app, chunks[1]);
}

fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;

    let mut text = vec![
        Line::from(vec![
            Span::styled("Tasks: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} open / {} total", stats.open_tasks, stats.total_tasks),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Problems due: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.due_problems),
                Style::default().fg(if stats.due_problems > 0 {
                    Color::Yellow
                } else {
                    Color::White
                }),
            ),
        ]),
        Line::from(vec![
            Span::styled("Topics due: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.due_topics),
                Style::default().fg(if stats.due_topics > 0 {
                    Color::Yellow
                } else {
                    Color::White
                }),
            ),
        ]),
        Line::from(vec![
            Span::styled("Mastered: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.mastered_problems + stats.mastered_topics),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    if let Some(days) = stats.days_to_target {
        text.push(Line::from(vec![
            Span::styled("Days to target: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", days),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let title = if app.display_name().is_empty() {
        " Stats ".to_string()
    } else {
        format!(" Stats: {} ", app.display_name())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(text).block(block);
    f.render_widget(paragraph, area);
}

fn draw_due_reviews(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    for problem in app.problems.items.iter().take(3) {
        items.push(ListItem::new(Line::from(vec![
            Span::styled("P ", Style::default().fg(Color::Magenta)),
            Span::styled(
                truncate(&problem.title, 24),
                Style::default().fg(Color::White),
            ),
            Span::raw(" "),
            Span::styled(
                stage_bar(problem.card.stage),
                Style::default().fg(Color::Green),
            ),
        ])));
    }
    for topic in app.topics.items.iter().take(3) {
        items.push(ListItem::new(Line::from(vec![
            Span::styled("T ", Style::default().fg(Color::Blue)),
            Span::styled(truncate(&topic.title, 24), Style::default().fg(Color::White)),
            Span::raw(" "),
            Span::styled(stage_bar(topic.card.stage), Style::default().fg(Color::Green)),
        ])));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Due for Review ")
        .title_style(Style::default().fg(Color::Yellow));

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn draw_open_tasks(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .items
        .iter()
        .filter(|t| t.status != TaskStatus::Completed)
        .map(|task| {
            let status_color = match task.status {
                TaskStatus::Todo => Color::White,
                TaskStatus::InProgress => Color::Cyan,
                TaskStatus::Blocked => Color::Red,
                TaskStatus::Completed => Color::Green,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", task.status.label()),
                    Style::default().fg(status_color),
                ),
                Span::styled(
                    format!("{:<36}", truncate(&task.title, 34)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(task.category.label(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Open Tasks ")
        .title_style(Style::default().fg(Color::Magenta));

    let list = List::new(items).block(block);
    f.render_widget(list, area);
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
