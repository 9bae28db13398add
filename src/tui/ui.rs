use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::widgets::{board, dashboard, problems, topics};
use super::{App, View};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_help_bar(f, app, chunks[2]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let tab_titles = vec!["Dashboard", "Board", "Problems", "Topics"];
    let selected = match app.view {
        View::Dashboard => 0,
        View::Board => 1,
        View::Problems => 2,
        View::Topics => 3,
    };

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL).title(" Cadence "))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.view {
        View::Dashboard => dashboard::draw(f, app, area),
        View::Board => board::draw(f, app, area),
        View::Problems => problems::draw(f, app, area),
        View::Topics => topics::draw(f, app, area),
    }
}

fn draw_help_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("h/l", Style::default().fg(Color::Cyan)),
        Span::raw(" Views  "),
    ];

    match app.view {
        View::Dashboard => {
            spans.extend(vec![
                Span::styled("^r", Style::default().fg(Color::Cyan)),
                Span::raw(" Refresh  "),
            ]);
        }
        View::Board => {
            spans.extend(vec![
                Span::styled("j/k", Style::default().fg(Color::Cyan)),
                Span::raw(" Nav  "),
                Span::styled("<Space>", Style::default().fg(Color::Cyan)),
                Span::raw(" Toggle  "),
                Span::styled("d", Style::default().fg(Color::Cyan)),
                Span::raw(" Delete  "),
                Span::styled("C", Style::default().fg(Color::Cyan)),
                Span::raw(" Clear  "),
            ]);
        }
        View::Problems | View::Topics => {
            spans.extend(vec![
                Span::styled("j/k", Style::default().fg(Color::Cyan)),
                Span::raw(" Nav  "),
                Span::styled("r", Style::default().fg(Color::Cyan)),
                Span::raw(" Reviewed  "),
                Span::styled("f", Style::default().fg(Color::Cyan)),
                Span::raw(" Forgot  "),
                Span::styled("v", Style::default().fg(Color::Cyan)),
                Span::raw(format!(" View ({})  ", app.filter.label())),
                Span::styled("d", Style::default().fg(Color::Cyan)),
                Span::raw(" Delete  "),
            ]);
        }
    }

    spans.extend(vec![
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]);

    let help = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    f.render_widget(help, area);
}
