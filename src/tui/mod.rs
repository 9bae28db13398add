mod ui;
mod widgets;

use std::io;
use std::time::Duration;

use chrono::{FixedOffset, Utc};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::models::{Problem, Task, Topic};
use crate::srs::{IntervalTable, ReviewOutcome};
use crate::state::{ReviewFilter, Session, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Board,
    Problems,
    Topics,
}

impl View {
    fn next(&self) -> Self {
        match self {
            View::Dashboard => View::Board,
            View::Board => View::Problems,
            View::Problems => View::Topics,
            View::Topics => View::Dashboard,
        }
    }

    fn prev(&self) -> Self {
        match self {
            View::Dashboard => View::Topics,
            View::Board => View::Dashboard,
            View::Problems => View::Board,
            View::Topics => View::Problems,
        }
    }
}

pub struct StatefulList<T> {
    pub items: Vec<T>,
    pub selected: Option<usize>,
}

impl<T> StatefulList<T> {
    fn with_items(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self { items, selected }
    }

    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

pub struct App {
    session: Session,
    zone: FixedOffset,
    problem_intervals: IntervalTable,
    topic_intervals: IntervalTable,
    pub view: View,
    pub filter: ReviewFilter,
    pub tasks: StatefulList<Task>,
    pub problems: StatefulList<Problem>,
    pub topics: StatefulList<Topic>,
    pub stats: Stats,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, config: &Config) -> Self {
        let zone = config.zone;
        let now = Utc::now();
        let stats = session.stats(now, zone);
        let tasks = StatefulList::with_items(session.state().tasks.clone());
        let problems = StatefulList::with_items(
            session
                .filtered_problems(ReviewFilter::Due, now, zone)
                .cloned()
                .collect(),
        );
        let topics = StatefulList::with_items(
            session
                .filtered_topics(ReviewFilter::Due, now, zone)
                .cloned()
                .collect(),
        );

        Self {
            session,
            zone,
            problem_intervals: config.problem_intervals,
            topic_intervals: config.topic_intervals,
            view: View::Dashboard,
            filter: ReviewFilter::Due,
            tasks,
            problems,
            topics,
            stats,
            should_quit: false,
        }
    }

    pub fn zone(&self) -> FixedOffset {
        self.zone
    }

    pub fn display_name(&self) -> &str {
        &self.session.settings().name
    }

    fn refresh(&mut self) {
        let now = Utc::now();
        self.stats = self.session.stats(now, self.zone);
        self.tasks = StatefulList::with_items(self.session.state().tasks.clone());
        self.problems = StatefulList::with_items(
            self.session
                .filtered_problems(self.filter, now, self.zone)
                .cloned()
                .collect(),
        );
        self.topics = StatefulList::with_items(
            self.session
                .filtered_topics(self.filter, now, self.zone)
                .cloned()
                .collect(),
        );
    }

    fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.refresh();
    }

    fn toggle_selected_task(&mut self) {
        if let Some(task) = self.tasks.selected_item() {
            let id = task.id.to_string();
            self.session.toggle_task(&id);
            self.refresh();
        }
    }

    fn delete_selected(&mut self) {
        match self.view {
            View::Board => {
                if let Some(task) = self.tasks.selected_item() {
                    let id = task.id.to_string();
                    self.session.remove_task(&id);
                }
            }
            View::Problems => {
                if let Some(problem) = self.problems.selected_item() {
                    let id = problem.id.to_string();
                    self.session.remove_problem(&id);
                }
            }
            View::Topics => {
                if let Some(topic) = self.topics.selected_item() {
                    let id = topic.id.to_string();
                    self.session.remove_topic(&id);
                }
            }
            View::Dashboard => {}
        }
        self.refresh();
    }

    fn review_selected(&mut self, outcome: ReviewOutcome) {
        let now = Utc::now();
        match self.view {
            View::Problems => {
                if let Some(problem) = self.problems.selected_item() {
                    let id = problem.id.to_string();
                    self.session
                        .review_problem(&id, outcome, now, &self.problem_intervals);
                }
            }
            View::Topics => {
                if let Some(topic) = self.topics.selected_item() {
                    let id = topic.id.to_string();
                    self.session
                        .review_topic(&id, outcome, now, &self.topic_intervals);
                }
            }
            _ => return,
        }
        self.refresh();
    }

    fn clear_board(&mut self) {
        self.session.clear_tasks();
        self.refresh();
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.refresh();
            }

            // Navigation between views: h/l (left/right like vim)
            KeyCode::Char('h') | KeyCode::Left => self.view = self.view.prev(),
            KeyCode::Char('l') | KeyCode::Right => self.view = self.view.next(),
            KeyCode::Tab => {
                if modifiers.contains(KeyModifiers::SHIFT) {
                    self.view = self.view.prev();
                } else {
                    self.view = self.view.next();
                }
            }
            KeyCode::BackTab => self.view = self.view.prev(),

            // List navigation: j/k (vim up/down)
            KeyCode::Char('j') | KeyCode::Down => match self.view {
                View::Board => self.tasks.next(),
                View::Problems => self.problems.next(),
                View::Topics => self.topics.next(),
                View::Dashboard => {}
            },
            KeyCode::Char('k') | KeyCode::Up => match self.view {
                View::Board => self.tasks.previous(),
                View::Problems => self.problems.previous(),
                View::Topics => self.topics.previous(),
                View::Dashboard => {}
            },
            KeyCode::Char('g') => match self.view {
                View::Board if !self.tasks.items.is_empty() => self.tasks.selected = Some(0),
                View::Problems if !self.problems.items.is_empty() => {
                    self.problems.selected = Some(0)
                }
                View::Topics if !self.topics.items.is_empty() => self.topics.selected = Some(0),
                _ => {}
            },
            KeyCode::Char('G') => match self.view {
                View::Board if !self.tasks.items.is_empty() => {
                    self.tasks.selected = Some(self.tasks.items.len() - 1)
                }
                View::Problems if !self.problems.items.is_empty() => {
                    self.problems.selected = Some(self.problems.items.len() - 1)
                }
                View::Topics if !self.topics.items.is_empty() => {
                    self.topics.selected = Some(self.topics.items.len() - 1)
                }
                _ => {}
            },

            // Board actions
            KeyCode::Char(' ') if self.view == View::Board => self.toggle_selected_task(),
            KeyCode::Char('C') if self.view == View::Board => self.clear_board(),

            // Review actions: r = reviewed (success), f = forgot (failure)
            KeyCode::Char('r') if matches!(self.view, View::Problems | View::Topics) => {
                self.review_selected(ReviewOutcome::Success)
            }
            KeyCode::Char('f') if matches!(self.view, View::Problems | View::Topics) => {
                self.review_selected(ReviewOutcome::Failure)
            }

            // Cycle the Due/All/Mastered slice
            KeyCode::Char('v') if matches!(self.view, View::Problems | View::Topics) => {
                self.cycle_filter()
            }

            KeyCode::Char('d') if self.view != View::Dashboard => self.delete_selected(),

            _ => {}
        }
    }
}

pub fn run(session: Session, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, &config);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code, key.modifiers);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
