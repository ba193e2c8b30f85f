// src/config/model.rs

use serde::Deserialize;

/// Top-level project description as read from a TOML file.
///
/// ```toml
/// [project]
/// tasks = 3
///
/// [[task]]
/// id = 0
/// duration = 3
///
/// [[dependency]]
/// from = 0
/// to = 1
/// weight = 0
/// ```
///
/// Task ids run from 0 to `tasks - 1`. Ids without a `[[task]]` entry keep
/// the default duration 0, matching the registry default.
///
/// Ids and values are deserialized as `i64` on purpose: range validation
/// (not the TOML parser) rejects negative input, so a negative id surfaces
/// as an out-of-range error with the offending value intact.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectFile {
    /// The `[project]` section.
    pub project: ProjectSection,

    /// All `[[task]]` entries.
    #[serde(default)]
    pub task: Vec<TaskEntry>,

    /// All `[[dependency]]` entries.
    #[serde(default)]
    pub dependency: Vec<DependencyEntry>,
}

/// `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Total number of tasks. Zero is a valid (empty) project.
    pub tasks: i64,
}

/// A `[[task]]` entry: duration for one task id.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEntry {
    pub id: i64,

    /// Duration in abstract time units; zero is valid.
    #[serde(default)]
    pub duration: i64,
}

/// A `[[dependency]]` entry: `from` must precede `to`.
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyEntry {
    pub from: i64,
    pub to: i64,

    /// Weight added when traversing this edge; zero is valid.
    #[serde(default)]
    pub weight: i64,
}
