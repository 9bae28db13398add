mod assist;
mod config;
mod error;
mod models;
mod srs;
mod state;
mod store;
mod tui;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};

use assist::Assistant;
use config::Config;
use models::{
    Difficulty, JsonOutput, Problem, ProblemDraft, Task, TaskCategory, TaskStatus, Theme, Topic,
    TopicDraft,
};
use srs::ReviewOutcome;
use state::{DuePick, PickScope, ReviewFilter, Session, SettingsUpdate};
use store::SqliteStore;

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "A personal task board and spaced-repetition review tracker")]
#[command(version)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the snapshot database
    Init,

    /// Manage board tasks
    #[command(subcommand)]
    Task(TaskCommands),

    /// Manage coding problems on the review ladder
    #[command(subcommand)]
    Problem(ProblemCommands),

    /// Manage study topics on the review ladder
    #[command(subcommand)]
    Topic(TopicCommands),

    /// Pick a due item to review (weighted random)
    Next {
        /// Only pick among problems
        #[arg(long, conflicts_with = "topics")]
        problems: bool,

        /// Only pick among topics
        #[arg(long)]
        topics: bool,
    },

    /// Show board and review statistics
    Stats,

    /// Fetch a motivational quote
    Quote,

    /// Get a conceptual hint for a problem
    Hint {
        /// Problem ID (or unique prefix)
        id: String,
    },

    /// Break a task into subtasks
    Breakdown {
        /// Task title to break down
        title: String,

        /// Add the subtasks to the board
        #[arg(long)]
        add: bool,

        /// Category for added subtasks
        #[arg(long, short, default_value = "personal")]
        category: String,
    },

    /// Show or change user settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Launch interactive terminal UI
    Tui,
}

#[derive(Subcommand)]
enum TaskCommands {
    /// List tasks
    List {
        /// Filter by status: todo/in-progress/blocked/completed
        #[arg(long, short)]
        status: Option<String>,
    },

    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(long, short = 'D')]
        description: Option<String>,

        /// Category: dsa/webdev/ml/personal/internship
        #[arg(long, short, default_value = "personal")]
        category: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long, short)]
        due: Option<String>,
    },

    /// Set a task's status
    Status {
        /// Task ID (or unique prefix)
        id: String,

        /// New status: todo/in-progress/blocked/completed
        status: String,
    },

    /// Toggle a task between todo and completed
    Toggle {
        /// Task ID (or unique prefix)
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID (or unique prefix)
        id: String,
    },

    /// Remove all tasks from the board
    Clear,
}

#[derive(Subcommand)]
enum ProblemCommands {
    /// List problems
    List {
        /// Which slice: due/all/mastered
        #[arg(long, short, default_value = "due")]
        filter: String,
    },

    /// Add a new problem
    Add {
        /// Problem title
        title: String,

        /// Problem URL
        #[arg(long, short)]
        link: String,

        /// Comma-separated topics
        #[arg(long, short)]
        topics: String,

        /// Difficulty: easy/medium/hard
        #[arg(long, short, default_value = "medium")]
        difficulty: String,

        /// Date learned (YYYY-MM-DD, default today)
        #[arg(long)]
        learned: Option<String>,

        /// Starting stage (1-5)
        #[arg(long, short, default_value_t = 1)]
        stage: u8,

        /// Optional notes
        #[arg(long, short)]
        notes: Option<String>,
    },

    /// Record a review outcome
    Review {
        /// Problem ID (or unique prefix)
        id: String,

        /// Outcome: success/failure (also: reviewed/forgot)
        #[arg(long, short)]
        outcome: String,
    },

    /// Delete a problem
    Delete {
        /// Problem ID (or unique prefix)
        id: String,
    },
}

#[derive(Subcommand)]
enum TopicCommands {
    /// List topics
    List {
        /// Which slice: due/all/mastered
        #[arg(long, short, default_value = "due")]
        filter: String,
    },

    /// Add a new topic
    Add {
        /// Topic title
        title: String,

        /// Subject area, e.g. "Databases"
        #[arg(long, short)]
        area: Option<String>,

        /// Comma-separated tags
        #[arg(long, short)]
        tags: Option<String>,

        /// Date learned (YYYY-MM-DD, default today)
        #[arg(long)]
        learned: Option<String>,

        /// Starting stage (1-5)
        #[arg(long, short, default_value_t = 1)]
        stage: u8,

        /// Optional notes
        #[arg(long, short)]
        notes: Option<String>,
    },

    /// Record a review outcome
    Review {
        /// Topic ID (or unique prefix)
        id: String,

        /// Outcome: success/failure (also: reviewed/forgot)
        #[arg(long, short)]
        outcome: String,
    },

    /// Delete a topic
    Delete {
        /// Topic ID (or unique prefix)
        id: String,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show current settings
    Show,

    /// Update settings
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Countdown target date (YYYY-MM-DD), or "none" to clear
        #[arg(long)]
        target_date: Option<String>,

        /// Theme: dark/light
        #[arg(long)]
        theme: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let store = SqliteStore::open(&config.db_path, &config.owner_id)?;

    if let Commands::Init = cli.command {
        // Opening the store created the schema; nothing else to do.
        if cli.json {
            println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
        } else {
            println!("Database initialized at: {}", config.db_path.display());
        }
        return Ok(());
    }

    let mut session = Session::open(Box::new(store));
    let now = Utc::now();

    match cli.command {
        Commands::Init => unreachable!(),

        Commands::Task(cmd) => run_task(cmd, &mut session, cli.json, now)?,
        Commands::Problem(cmd) => run_problem(cmd, &mut session, &config, cli.json, now)?,
        Commands::Topic(cmd) => run_topic(cmd, &mut session, &config, cli.json, now)?,

        Commands::Next { problems, topics } => {
            let scope = if problems {
                PickScope::Problems
            } else if topics {
                PickScope::Topics
            } else {
                PickScope::All
            };
            match session.pick_next(scope, now, config.zone) {
                Some(DuePick::Problem(p)) => {
                    if cli.json {
                        println!("{}", serde_json::to_string(&JsonOutput::ok(p))?);
                    } else {
                        println!("=== Next Up: Problem ===");
                        println!();
                        print_problem(p, config.zone);
                        println!();
                        println!(
                            "Record the outcome with:\n  cadence problem review {} --outcome <success|failure>",
                            short_id(&p.id)
                        );
                    }
                }
                Some(DuePick::Topic(t)) => {
                    if cli.json {
                        println!("{}", serde_json::to_string(&JsonOutput::ok(t))?);
                    } else {
                        println!("=== Next Up: Topic ===");
                        println!();
                        print_topic(t, config.zone);
                        println!();
                        println!(
                            "Record the outcome with:\n  cadence topic review {} --outcome <success|failure>",
                            short_id(&t.id)
                        );
                    }
                }
                None => {
                    if cli.json {
                        println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
                    } else {
                        println!("Nothing is due. Enjoy the slack or add something new!");
                    }
                }
            }
        }

        Commands::Stats => {
            let stats = session.stats(now, config.zone);
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&stats))?);
            } else {
                println!("=== Cadence ===");
                println!(
                    "Tasks: {} ({} open, {} completed, {} blocked)",
                    stats.total_tasks, stats.open_tasks, stats.completed_tasks, stats.blocked_tasks
                );
                println!(
                    "Problems: {} ({} due, {} mastered)",
                    stats.total_problems, stats.due_problems, stats.mastered_problems
                );
                println!(
                    "Topics: {} ({} due, {} mastered)",
                    stats.total_topics, stats.due_topics, stats.mastered_topics
                );
                if let Some(days) = stats.days_to_target {
                    println!("Days to target: {}", days);
                }
            }
        }

        Commands::Quote => {
            let assistant = Assistant::new(config.api_key.clone());
            let quote = assistant.motivational_quote();
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&quote))?);
            } else {
                println!("{}", quote);
            }
        }

        Commands::Hint { id } => {
            let problem = session
                .find_problem(&id)
                .ok_or(error::CadenceError::NotFound(id))?;
            let assistant = Assistant::new(config.api_key.clone());
            let hint = assistant.hint(&problem.title, &problem.topics);
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&hint))?);
            } else {
                println!("Hint for '{}':", problem.title);
                println!("{}", hint);
            }
        }

        Commands::Breakdown {
            title,
            add,
            category,
        } => {
            let category = parse_category(&category)?;
            let assistant = Assistant::new(config.api_key.clone());
            let subtasks = assistant.breakdown_task(&title);

            if add {
                for subtask in &subtasks {
                    let task = Task::new(subtask, category, None, now)?;
                    session.add_task(task);
                }
            }

            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&subtasks))?);
            } else {
                println!("Subtasks for '{}':", title);
                for subtask in &subtasks {
                    println!("  - {}", subtask);
                }
                if add {
                    println!();
                    println!("Added {} tasks to the board.", subtasks.len());
                }
            }
        }

        Commands::Settings(cmd) => run_settings(cmd, &mut session, cli.json)?,

        Commands::Tui => {
            tui::run(session, config)?;
        }
    }

    Ok(())
}

fn run_task(
    cmd: TaskCommands,
    session: &mut Session,
    json: bool,
    now: DateTime<Utc>,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        TaskCommands::List { status } => {
            let filter = status.as_deref().map(parse_status).transpose()?;
            let tasks: Vec<&Task> = session
                .state()
                .tasks
                .iter()
                .filter(|t| filter.map_or(true, |wanted| t.status == wanted))
                .collect();

            if json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&tasks))?);
            } else if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                println!("{:<10} {:<40} {:<12} {:<12} DUE", "ID", "TITLE", "CATEGORY", "STATUS");
                println!("{}", "-".repeat(86));
                for task in tasks {
                    let due = task
                        .due_date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:<10} {:<40} {:<12} {:<12} {}",
                        short_id(&task.id),
                        truncate(&task.title, 38),
                        task.category.label(),
                        task.status.label(),
                        due
                    );
                }
            }
        }

        TaskCommands::Add {
            title,
            description,
            category,
            due,
        } => {
            let category = parse_category(&category)?;
            let due_date = due.as_deref().map(parse_date).transpose()?;
            let mut task = Task::new(&title, category, due_date, now)?;
            task.description = description.filter(|d| !d.trim().is_empty());
            let added = session.add_task(task);

            if json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "id": added.id,
                        "title": added.title
                    })))?
                );
            } else {
                println!("Added task '{}' with ID: {}", added.title, short_id(&added.id));
            }
        }

        TaskCommands::Status { id, status } => {
            let status = parse_status(&status)?;
            if session.set_task_status(&id, status) {
                if json {
                    println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
                } else {
                    println!("Task {} is now {}.", id, status.label());
                }
            } else {
                report_missing(json, "Task not found")?;
            }
        }

        TaskCommands::Toggle { id } => match session.toggle_task(&id) {
            Some(status) => {
                if json {
                    println!("{}", serde_json::to_string(&JsonOutput::ok(status.as_str()))?);
                } else {
                    println!("Task {} is now {}.", id, status.label());
                }
            }
            None => report_missing(json, "Task not found")?,
        },

        TaskCommands::Delete { id } => {
            if session.remove_task(&id) {
                if json {
                    println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
                } else {
                    println!("Task {} deleted.", id);
                }
            } else {
                report_missing(json, "Task not found")?;
            }
        }

        TaskCommands::Clear => {
            let removed = session.clear_tasks();
            if json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(removed))?);
            } else {
                println!("Cleared {} tasks.", removed);
            }
        }
    }

    Ok(())
}

fn run_problem(
    cmd: ProblemCommands,
    session: &mut Session,
    config: &Config,
    json: bool,
    now: DateTime<Utc>,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ProblemCommands::List { filter } => {
            let filter = parse_filter(&filter)?;
            let problems: Vec<&Problem> =
                session.filtered_problems(filter, now, config.zone).collect();

            if json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&problems))?);
            } else if problems.is_empty() {
                println!("No problems in the '{}' view.", filter.label());
            } else {
                println!(
                    "{:<10} {:<34} {:<8} {:<7} {:<12} TOPICS",
                    "ID", "TITLE", "DIFF", "STAGE", "NEXT"
                );
                println!("{}", "-".repeat(88));
                for problem in problems {
                    println!(
                        "{:<10} {:<34} {:<8} {:<7} {:<12} {}",
                        short_id(&problem.id),
                        truncate(&problem.title, 32),
                        problem.difficulty.as_str(),
                        format!("{}/5", problem.card.stage),
                        local_day(problem.card.next_review, config.zone),
                        problem.topics.join(", ")
                    );
                }
            }
        }

        ProblemCommands::Add {
            title,
            link,
            topics,
            difficulty,
            learned,
            stage,
            notes,
        } => {
            let difficulty = Difficulty::from_str(&difficulty)
                .ok_or_else(|| format!("Invalid difficulty '{}'. Use: easy, medium, or hard", difficulty))?;
            let learned_on = match learned.as_deref() {
                Some(s) => date_to_utc(parse_date(s)?, config.zone),
                None => now,
            };
            let draft = ProblemDraft {
                title,
                link,
                topics: split_list(&topics),
                difficulty,
                learned_on,
                stage,
                notes,
            };
            let problem = draft.build(&config.problem_intervals)?;
            let added = session.add_problem(problem);

            if json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "id": added.id,
                        "title": added.title,
                        "next_review": added.card.next_review
                    })))?
                );
            } else {
                println!("Added problem '{}' with ID: {}", added.title, short_id(&added.id));
                println!("First review: {}", local_day(added.card.next_review, config.zone));
            }
        }

        ProblemCommands::Review { id, outcome } => {
            let outcome = parse_outcome(&outcome)?;
            match session.review_problem(&id, outcome, now, &config.problem_intervals) {
                Some(problem) => {
                    if json {
                        println!("{}", serde_json::to_string(&JsonOutput::ok(problem))?);
                    } else {
                        println!(
                            "Recorded {}. '{}' is now stage {}/5 ({}).",
                            outcome.as_str(),
                            problem.title,
                            problem.card.stage,
                            problem.card.status.as_str()
                        );
                        println!(
                            "Next review: {}",
                            local_day(problem.card.next_review, config.zone)
                        );
                    }
                }
                None => report_missing(json, "Problem not found")?,
            }
        }

        ProblemCommands::Delete { id } => {
            if session.remove_problem(&id) {
                if json {
                    println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
                } else {
                    println!("Problem {} deleted.", id);
                }
            } else {
                report_missing(json, "Problem not found")?;
            }
        }
    }

    Ok(())
}

fn run_topic(
    cmd: TopicCommands,
    session: &mut Session,
    config: &Config,
    json: bool,
    now: DateTime<Utc>,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        TopicCommands::List { filter } => {
            let filter = parse_filter(&filter)?;
            let topics: Vec<&Topic> = session.filtered_topics(filter, now, config.zone).collect();

            if json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&topics))?);
            } else if topics.is_empty() {
                println!("No topics in the '{}' view.", filter.label());
            } else {
                println!(
                    "{:<10} {:<34} {:<14} {:<7} {:<12} TAGS",
                    "ID", "TITLE", "AREA", "STAGE", "NEXT"
                );
                println!("{}", "-".repeat(90));
                for topic in topics {
                    println!(
                        "{:<10} {:<34} {:<14} {:<7} {:<12} {}",
                        short_id(&topic.id),
                        truncate(&topic.title, 32),
                        topic.area.as_deref().unwrap_or("-"),
                        format!("{}/5", topic.card.stage),
                        local_day(topic.card.next_review, config.zone),
                        topic.tags.join(", ")
                    );
                }
            }
        }

        TopicCommands::Add {
            title,
            area,
            tags,
            learned,
            stage,
            notes,
        } => {
            let learned_on = match learned.as_deref() {
                Some(s) => date_to_utc(parse_date(s)?, config.zone),
                None => now,
            };
            let draft = TopicDraft {
                title,
                area,
                tags: tags.as_deref().map(split_list).unwrap_or_default(),
                learned_on,
                stage,
                notes,
            };
            let topic = draft.build(&config.topic_intervals)?;
            let added = session.add_topic(topic);

            if json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "id": added.id,
                        "title": added.title,
                        "next_review": added.card.next_review
                    })))?
                );
            } else {
                println!("Added topic '{}' with ID: {}", added.title, short_id(&added.id));
                println!("First review: {}", local_day(added.card.next_review, config.zone));
            }
        }

        TopicCommands::Review { id, outcome } => {
            let outcome = parse_outcome(&outcome)?;
            match session.review_topic(&id, outcome, now, &config.topic_intervals) {
                Some(topic) => {
                    if json {
                        println!("{}", serde_json::to_string(&JsonOutput::ok(topic))?);
                    } else {
                        println!(
                            "Recorded {}. '{}' is now stage {}/5 ({}).",
                            outcome.as_str(),
                            topic.title,
                            topic.card.stage,
                            topic.card.status.as_str()
                        );
                        println!(
                            "Next review: {}",
                            local_day(topic.card.next_review, config.zone)
                        );
                    }
                }
                None => report_missing(json, "Topic not found")?,
            }
        }

        TopicCommands::Delete { id } => {
            if session.remove_topic(&id) {
                if json {
                    println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
                } else {
                    println!("Topic {} deleted.", id);
                }
            } else {
                report_missing(json, "Topic not found")?;
            }
        }
    }

    Ok(())
}

fn run_settings(
    cmd: SettingsCommands,
    session: &mut Session,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        SettingsCommands::Show => {
            let settings = session.settings();
            if json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(settings))?);
            } else {
                println!("Name: {}", if settings.name.is_empty() { "-" } else { &settings.name });
                println!(
                    "Target date: {}",
                    settings
                        .target_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string())
                );
                println!("Theme: {}", settings.theme.as_str());
            }
        }

        SettingsCommands::Set {
            name,
            target_date,
            theme,
        } => {
            let theme = theme
                .as_deref()
                .map(|s| {
                    Theme::from_str(s)
                        .ok_or_else(|| format!("Invalid theme '{}'. Use: dark or light", s))
                })
                .transpose()?;
            let target_date = target_date
                .as_deref()
                .map(|s| -> Result<Option<NaiveDate>, Box<dyn std::error::Error>> {
                    if s.eq_ignore_ascii_case("none") {
                        Ok(None)
                    } else {
                        Ok(Some(parse_date(s)?))
                    }
                })
                .transpose()?;

            let settings = session.update_settings(SettingsUpdate {
                name,
                target_date,
                theme,
            });

            if json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(settings))?);
            } else {
                println!("Settings updated.");
            }
        }
    }

    Ok(())
}

fn print_problem(problem: &Problem, zone: FixedOffset) {
    println!("{} [{}]", problem.title, problem.difficulty.as_str());
    println!("Link: {}", problem.link);
    println!("Topics: {}", problem.topics.join(", "));
    println!(
        "Stage: {}/5  Next review: {}",
        problem.card.stage,
        local_day(problem.card.next_review, zone)
    );
    if let Some(notes) = &problem.notes {
        println!("Notes: {}", notes);
    }
}

fn print_topic(topic: &Topic, zone: FixedOffset) {
    println!("{}", topic.title);
    if let Some(area) = &topic.area {
        println!("Area: {}", area);
    }
    if !topic.tags.is_empty() {
        println!("Tags: {}", topic.tags.join(", "));
    }
    println!(
        "Stage: {}/5  Next review: {}",
        topic.card.stage,
        local_day(topic.card.next_review, zone)
    );
    if let Some(notes) = &topic.notes {
        println!("Notes: {}", notes);
    }
}

fn report_missing(json: bool, message: &str) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(&JsonOutput::<()>::err(message))?);
    } else {
        println!("{}.", message.trim_end_matches('.'));
    }
    Ok(())
}

fn parse_category(s: &str) -> Result<TaskCategory, String> {
    TaskCategory::from_str(s).ok_or_else(|| {
        format!(
            "Invalid category '{}'. Use: dsa, webdev, ml, personal, or internship",
            s
        )
    })
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    TaskStatus::from_str(s).ok_or_else(|| {
        format!(
            "Invalid status '{}'. Use: todo, in-progress, blocked, or completed",
            s
        )
    })
}

fn parse_filter(s: &str) -> Result<ReviewFilter, String> {
    match s.to_lowercase().as_str() {
        "due" => Ok(ReviewFilter::Due),
        "all" => Ok(ReviewFilter::All),
        "mastered" => Ok(ReviewFilter::Mastered),
        _ => Err(format!("Invalid filter '{}'. Use: due, all, or mastered", s)),
    }
}

fn parse_outcome(s: &str) -> Result<ReviewOutcome, String> {
    ReviewOutcome::from_str(s)
        .ok_or_else(|| format!("Invalid outcome '{}'. Use: success or failure", s))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD", s))
}

/// Interprets a civil date as local midnight in the configured zone.
fn date_to_utc(date: NaiveDate, zone: FixedOffset) -> DateTime<Utc> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    match zone.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(dt) => dt.with_timezone(&Utc),
        _ => Utc.from_utc_datetime(&midnight),
    }
}

fn local_day(ts: DateTime<Utc>, zone: FixedOffset) -> String {
    srs::local_date(ts, zone).format("%Y-%m-%d").to_string()
}

fn short_id(id: &uuid::Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
