// Enum string forms are part of the CLI/JSON surface; not every one is
// exercised outside the tests yet
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::srs::{IntervalTable, ReviewCard, MAX_STAGE, MIN_STAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    Dsa,
    WebDev,
    Ml,
    Personal,
    Internship,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 5] = [
        TaskCategory::Dsa,
        TaskCategory::WebDev,
        TaskCategory::Ml,
        TaskCategory::Personal,
        TaskCategory::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Dsa => "dsa",
            TaskCategory::WebDev => "webdev",
            TaskCategory::Ml => "ml",
            TaskCategory::Personal => "personal",
            TaskCategory::Internship => "internship",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dsa" => Some(TaskCategory::Dsa),
            "webdev" | "web" => Some(TaskCategory::WebDev),
            "ml" => Some(TaskCategory::Ml),
            "personal" => Some(TaskCategory::Personal),
            "internship" | "intern" => Some(TaskCategory::Internship),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::Dsa => "DSA",
            TaskCategory::WebDev => "WebDev",
            TaskCategory::Ml => "ML",
            TaskCategory::Personal => "Personal",
            TaskCategory::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Blocked,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "todo" | "t" => Some(TaskStatus::Todo),
            "in_progress" | "in-progress" | "progress" | "p" => Some(TaskStatus::InProgress),
            "blocked" | "b" => Some(TaskStatus::Blocked),
            "completed" | "complete" | "done" | "d" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Some(Difficulty::Easy),
            "medium" | "m" => Some(Difficulty::Medium),
            "hard" | "h" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

// A plain board task. No scheduling; status changes are free-form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: TaskCategory,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        title: &str,
        category: TaskCategory,
        due_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            category,
            status: TaskStatus::Todo,
            due_date,
            created_at: now,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    pub topics: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub card: ReviewCard,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    pub title: String,
    pub area: Option<String>,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub card: ReviewCard,
    pub notes: Option<String>,
}

/// Unvalidated problem input, straight from the CLI/TUI form.
#[derive(Debug, Clone)]
pub struct ProblemDraft {
    pub title: String,
    pub link: String,
    pub topics: Vec<String>,
    pub difficulty: Difficulty,
    pub learned_on: DateTime<Utc>,
    pub stage: u8,
    pub notes: Option<String>,
}

impl ProblemDraft {
    pub fn build(self, table: &IntervalTable) -> Result<Problem, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let link = self.link.trim();
        if link.is_empty() {
            return Err(ValidationError::MissingLink);
        }
        if Url::parse(link).is_err() {
            return Err(ValidationError::InvalidLink(link.to_string()));
        }
        let topics: Vec<String> = self
            .topics
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if topics.is_empty() {
            return Err(ValidationError::NoTopics);
        }
        if !(MIN_STAGE..=MAX_STAGE).contains(&self.stage) {
            return Err(ValidationError::StageOutOfRange(self.stage));
        }
        Ok(Problem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            link: link.to_string(),
            topics,
            difficulty: self.difficulty,
            card: ReviewCard::new(self.learned_on, self.stage, table),
            notes: self.notes,
        })
    }
}

/// Unvalidated topic input.
#[derive(Debug, Clone)]
pub struct TopicDraft {
    pub title: String,
    pub area: Option<String>,
    pub tags: Vec<String>,
    pub learned_on: DateTime<Utc>,
    pub stage: u8,
    pub notes: Option<String>,
}

impl TopicDraft {
    pub fn build(self, table: &IntervalTable) -> Result<Topic, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if !(MIN_STAGE..=MAX_STAGE).contains(&self.stage) {
            return Err(ValidationError::StageOutOfRange(self.stage));
        }
        let tags: Vec<String> = self
            .tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Ok(Topic {
            id: Uuid::new_v4(),
            title: title.to_string(),
            area: self
                .area
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            tags,
            card: ReviewCard::new(self.learned_on, self.stage, table),
            notes: self.notes,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            name: String::new(),
            target_date: None,
            theme: Theme::Dark,
        }
    }
}

/// The whole application snapshot. Every field is defaulted so a snapshot
/// written by an older build deserializes cleanly, with missing fields
/// backfilled instead of failing the load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub problems: Vec<Problem>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub settings: UserSettings,
}

// JSON output wrapper for CLI
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
