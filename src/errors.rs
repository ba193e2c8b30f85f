// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CritpathError {
    /// A task id or dependency endpoint falls outside `[0, task_count)`.
    ///
    /// The id is kept as `i64` so shell layers can report negative ids read
    /// from user input without losing the offending value.
    #[error("task id {id} out of range (project has {task_count} tasks)")]
    OutOfRange { id: i64, task_count: usize },

    /// The dependency graph is not a DAG; no path result is produced.
    #[error("dependency graph contains a cycle")]
    CycleDetected,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CritpathError>;
