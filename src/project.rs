// src/project.rs

//! Project facade: one task registry plus one dependency graph, created
//! together and sized for a fixed number of tasks.

use tracing::debug;

use crate::config::model::ProjectFile;
use crate::dag::path::{self, CriticalPath, PathTable};
use crate::dag::{DependencyGraph, TaskId, TaskRegistry};
use crate::errors::{CritpathError, Result};

/// A task project: durations plus weighted precedence edges.
///
/// Populate with [`set_task_duration`](Project::set_task_duration) and
/// [`add_dependency`](Project::add_dependency), then call
/// [`compute_critical_path`](Project::compute_critical_path). Computation
/// reads the structures without mutating them, so repeating it on an
/// unmodified project returns identical results.
#[derive(Debug, Clone)]
pub struct Project {
    registry: TaskRegistry,
    graph: DependencyGraph,
}

impl Project {
    /// Create an empty project sized for `task_count` tasks.
    pub fn new(task_count: usize) -> Self {
        Self {
            registry: TaskRegistry::new(task_count),
            graph: DependencyGraph::new(task_count),
        }
    }

    /// Build a project from a parsed project file.
    ///
    /// Entries are applied in file order; a `[[task]]` entry repeated for
    /// the same id overwrites the earlier duration. Out-of-range ids and
    /// negative values are rejected here even if the model skipped
    /// validation.
    pub fn from_config(cfg: &ProjectFile) -> Result<Self> {
        let task_count = cfg.project.tasks;
        if task_count < 0 {
            return Err(CritpathError::Config(format!(
                "[project].tasks must be non-negative (got {task_count})"
            )));
        }
        let mut project = Project::new(task_count as usize);

        for entry in &cfg.task {
            let id = project.resolve_id(entry.id)?;
            let duration = non_negative(entry.duration, "duration")?;
            project.set_task_duration(id, duration)?;
        }

        for dep in &cfg.dependency {
            let from = project.resolve_id(dep.from)?;
            let to = project.resolve_id(dep.to)?;
            let weight = non_negative(dep.weight, "weight")?;
            project.add_dependency(from, to, weight)?;
        }

        debug!(
            tasks = project.task_count(),
            dependencies = project.graph.edge_count(),
            "project built from config"
        );

        Ok(project)
    }

    /// Number of tasks in the project.
    pub fn task_count(&self) -> usize {
        self.registry.task_count()
    }

    /// Convert a possibly-negative id read from input into a [`TaskId`].
    ///
    /// Fails with `OutOfRange` for negative ids and ids `>= task_count`.
    pub fn resolve_id(&self, id: i64) -> Result<TaskId> {
        let task_count = self.task_count();
        match usize::try_from(id) {
            Ok(id) if id < task_count => Ok(id),
            _ => Err(CritpathError::OutOfRange { id, task_count }),
        }
    }

    /// Set the duration of a task. Fails with `OutOfRange` for invalid ids.
    pub fn set_task_duration(&mut self, id: TaskId, duration: u64) -> Result<()> {
        self.registry.set_duration(id, duration)
    }

    /// Add a weighted precedence edge `from -> to`.
    ///
    /// Fails with `OutOfRange` if either endpoint is invalid; no edge is
    /// added in that case. Duplicate edges are kept and relaxed
    /// independently.
    pub fn add_dependency(&mut self, from: TaskId, to: TaskId, weight: u64) -> Result<()> {
        self.graph.add_edge(from, to, weight)
    }

    /// Read-only view of the task registry.
    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Read-only view of the dependency graph.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Build the per-task longest-path table.
    ///
    /// Fails with `CycleDetected` if the dependency graph is not a DAG.
    pub fn compute_path_table(&self) -> Result<PathTable> {
        path::compute_table(&self.registry, &self.graph)
    }

    /// Compute the critical path.
    ///
    /// Fails with `CycleDetected` if the dependency graph is not a DAG; no
    /// partial path is returned.
    pub fn compute_critical_path(&self) -> Result<CriticalPath> {
        path::compute(&self.registry, &self.graph)
    }
}

fn non_negative(value: i64, what: &str) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| CritpathError::Config(format!("{what} must be non-negative (got {value})")))
}
