// src/dag/path.rs

//! Longest-path computation over the dependency graph.
//!
//! Kahn-style topological processing: seed a FIFO worklist with every
//! in-degree-0 task, relax outgoing edges with a strict-`>` update, and
//! track each task's predecessor so the critical path can be reconstructed
//! afterwards.

use std::collections::VecDeque;

use tracing::debug;

use crate::dag::cycle;
use crate::dag::graph::DependencyGraph;
use crate::dag::registry::TaskRegistry;
use crate::dag::TaskId;
use crate::errors::{CritpathError, Result};

/// Per-task longest-path table produced by one computation.
///
/// For every task id this records the longest accumulated weighted duration
/// reaching it and its predecessor on that path (`None` for tasks that are
/// the start of their own longest path).
#[derive(Debug, Clone)]
pub struct PathTable {
    longest: Vec<u64>,
    predecessor: Vec<Option<TaskId>>,
}

impl PathTable {
    /// Longest accumulated weighted duration reaching `task`.
    pub fn longest_to(&self, task: TaskId) -> u64 {
        self.longest[task]
    }

    /// Predecessor of `task` on its longest path, if any.
    pub fn predecessor_of(&self, task: TaskId) -> Option<TaskId> {
        self.predecessor[task]
    }

    /// Number of tasks covered by the table.
    pub fn task_count(&self) -> usize {
        self.longest.len()
    }
}

/// Result of a critical-path computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPath {
    /// Total weighted duration along the path: the sum of the durations of
    /// its tasks plus the weights of the traversed edges.
    pub length: u64,
    /// Task ids in source-to-terminal order.
    pub tasks: Vec<TaskId>,
}

/// Build the longest-path table for the whole graph.
///
/// Cycle detection runs first as a hard precondition: on cyclic input this
/// fails with `CycleDetected` and no table is produced. The registry and
/// graph must be sized for the same task count.
pub fn compute_table(registry: &TaskRegistry, graph: &DependencyGraph) -> Result<PathTable> {
    if cycle::has_cycle(graph) {
        return Err(CritpathError::CycleDetected);
    }

    let n = graph.task_count();

    let mut in_degree = vec![0usize; n];
    for task in 0..n {
        for edge in graph.edges_of(task) {
            in_degree[edge.to] += 1;
        }
    }

    let mut longest = vec![0u64; n];
    let mut predecessor: Vec<Option<TaskId>> = vec![None; n];

    // Seed the worklist with every task nothing depends on; its trivial
    // longest path is its own duration. Ascending id order here fixes the
    // processing order for equal-length paths.
    let mut worklist: VecDeque<TaskId> = VecDeque::with_capacity(n);
    for task in 0..n {
        if in_degree[task] == 0 {
            longest[task] = registry.duration_of(task);
            worklist.push_back(task);
        }
    }

    while let Some(task) = worklist.pop_front() {
        for edge in graph.edges_of(task) {
            // Strict `>` keeps the earliest-discovered value on ties, so the
            // reported predecessor is deterministic given insertion order.
            let candidate = longest[task] + edge.weight + registry.duration_of(edge.to);
            if candidate > longest[edge.to] {
                longest[edge.to] = candidate;
                predecessor[edge.to] = Some(task);
            }
            in_degree[edge.to] -= 1;
            if in_degree[edge.to] == 0 {
                worklist.push_back(edge.to);
            }
        }
    }

    debug!(
        tasks = n,
        edges = graph.edge_count(),
        "longest-path table computed"
    );

    Ok(PathTable { longest, predecessor })
}

/// Compute the critical path: the globally longest weighted path.
///
/// An empty project (zero tasks) yields length 0 and an empty path. When
/// every duration and weight is 0, the result is length 0 with path `[0]`.
pub fn compute(registry: &TaskRegistry, graph: &DependencyGraph) -> Result<CriticalPath> {
    let table = compute_table(registry, graph)?;
    Ok(critical_path_from_table(&table))
}

/// Pick the terminal task and walk the predecessor chain back to a source.
///
/// The linear scan takes the first task achieving the maximum, so ties on
/// length go to the lowest task id.
pub fn critical_path_from_table(table: &PathTable) -> CriticalPath {
    let n = table.task_count();
    if n == 0 {
        return CriticalPath {
            length: 0,
            tasks: Vec::new(),
        };
    }

    let mut length = 0;
    let mut terminal = 0;
    for task in 0..n {
        if table.longest_to(task) > length {
            length = table.longest_to(task);
            terminal = task;
        }
    }

    let mut tasks = Vec::new();
    let mut cursor = Some(terminal);
    while let Some(task) = cursor {
        tasks.push(task);
        cursor = table.predecessor_of(task);
    }
    tasks.reverse();

    debug!(length, terminal, hops = tasks.len(), "critical path reconstructed");

    CriticalPath { length, tasks }
}
