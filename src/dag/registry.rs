// src/dag/registry.rs

use crate::dag::TaskId;
use crate::errors::{CritpathError, Result};

/// A single task: identifier plus duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub duration: u64,
}

/// Fixed-size mapping from task id (`0..task_count`) to duration.
///
/// Every id starts with the default duration 0 and stays there until the
/// caller sets it explicitly. There is no deletion; the registry is sized
/// once and torn down with the project.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    durations: Vec<u64>,
}

impl TaskRegistry {
    /// Create a registry for `task_count` tasks, all with duration 0.
    pub fn new(task_count: usize) -> Self {
        Self {
            durations: vec![0; task_count],
        }
    }

    /// Number of tasks this registry was sized for.
    pub fn task_count(&self) -> usize {
        self.durations.len()
    }

    /// Set the duration of a task.
    ///
    /// Durations are unbounded and zero is valid. Setting the same id twice
    /// overwrites the previous value.
    pub fn set_duration(&mut self, id: TaskId, duration: u64) -> Result<()> {
        if id >= self.durations.len() {
            return Err(CritpathError::OutOfRange {
                id: id as i64,
                task_count: self.durations.len(),
            });
        }
        self.durations[id] = duration;
        Ok(())
    }

    /// Duration of a task, or the default 0 if it was never set (or the id
    /// is unknown).
    pub fn duration_of(&self, id: TaskId) -> u64 {
        self.durations.get(id).copied().unwrap_or(0)
    }

    /// The task stored under `id` (with the default duration 0 if never
    /// explicitly set).
    pub fn get(&self, id: TaskId) -> Task {
        Task {
            id,
            duration: self.duration_of(id),
        }
    }
}
