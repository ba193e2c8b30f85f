// src/config/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::config::model::ProjectFile;
use crate::errors::{CritpathError, Result};

/// Run semantic validation against a loaded project file.
///
/// This checks:
/// - `[project].tasks` is non-negative
/// - every `[[task]]` id is in `[0, tasks)` and its duration non-negative
/// - every `[[dependency]]` endpoint is in `[0, tasks)` and its weight
///   non-negative
///
/// It does **not** check for cycles; the path engine does that as a
/// precondition of the computation.
pub fn validate_config(cfg: &ProjectFile) -> Result<()> {
    let task_count = ensure_task_count(cfg)?;
    validate_tasks(cfg, task_count)?;
    validate_dependencies(cfg, task_count)?;
    Ok(())
}

fn ensure_task_count(cfg: &ProjectFile) -> Result<usize> {
    if cfg.project.tasks < 0 {
        return Err(CritpathError::Config(format!(
            "[project].tasks must be non-negative (got {})",
            cfg.project.tasks
        )));
    }
    Ok(cfg.project.tasks as usize)
}

fn validate_tasks(cfg: &ProjectFile, task_count: usize) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in &cfg.task {
        check_id(entry.id, task_count)?;
        if entry.duration < 0 {
            return Err(CritpathError::Config(format!(
                "task {} has negative duration {}",
                entry.id, entry.duration
            )));
        }
        if !seen.insert(entry.id) {
            // Last write wins, same as setting a duration twice.
            warn!(id = entry.id, "duplicate [[task]] entry; later duration overwrites");
        }
    }

    Ok(())
}

fn validate_dependencies(cfg: &ProjectFile, task_count: usize) -> Result<()> {
    for dep in &cfg.dependency {
        check_id(dep.from, task_count)?;
        check_id(dep.to, task_count)?;
        if dep.weight < 0 {
            return Err(CritpathError::Config(format!(
                "dependency {} -> {} has negative weight {}",
                dep.from, dep.to, dep.weight
            )));
        }
    }

    Ok(())
}

fn check_id(id: i64, task_count: usize) -> Result<()> {
    let in_range = usize::try_from(id).is_ok_and(|id| id < task_count);
    if !in_range {
        return Err(CritpathError::OutOfRange { id, task_count });
    }
    Ok(())
}
