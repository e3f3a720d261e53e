//! CLI error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] hearth_config::ConfigError),

    #[error("bundle error: {0}")]
    Bundle(#[from] hearth_bundler::Error),

    #[error("task error: {0}")]
    Task(#[from] hearth_tasks::TaskError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl miette::Diagnostic for CliError {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            CliError::Config(_) => "CONFIG_ERROR",
            CliError::Bundle(_) => "BUNDLE_ERROR",
            CliError::Task(_) => "TASK_ERROR",
            CliError::Io(_) => "IO_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            CliError::Bundle(inner) => miette::Diagnostic::help(inner),
            _ => None,
        }
    }
}
