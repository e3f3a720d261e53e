//! Error types for task orchestration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("bundle error: {0}")]
    Bundle(#[from] hearth_bundler::Error),

    #[error("configuration error: {0}")]
    Config(#[from] hearth_config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("background task failed: {0}")]
    Join(String),
}

impl From<tokio::task::JoinError> for TaskError {
    fn from(err: tokio::task::JoinError) -> Self {
        TaskError::Join(err.to_string())
    }
}
