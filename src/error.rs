use thiserror::Error;

pub type Result<T> = std::result::Result<T, CadenceError>;

#[derive(Error, Debug)]
pub enum CadenceError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("assistant error: {0}")]
    Assist(Box<reqwest::Error>),

    #[error("assistant returned an unusable response")]
    AssistResponse,

    #[error("config error: {0}")]
    Config(String),

    #[error("no item matches id '{0}'")]
    NotFound(String),
}

impl From<reqwest::Error> for CadenceError {
    fn from(error: reqwest::Error) -> Self {
        CadenceError::Assist(Box::new(error))
    }
}

// Input errors that block an add and are recoverable by re-input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("link must not be empty")]
    MissingLink,

    #[error("'{0}' is not a valid URL")]
    InvalidLink(String),

    #[error("at least one topic is required")]
    NoTopics,

    #[error("stage must be between 1 and 5, got {0}")]
    StageOutOfRange(u8),
}
