// src/dag/graph.rs

use crate::dag::TaskId;
use crate::errors::{CritpathError, Result};

/// A weighted directed edge to a dependent task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The task that depends on the edge's owner.
    pub to: TaskId,
    /// Weight added when traversing this edge.
    pub weight: u64,
}

/// Adjacency-list representation of the weighted dependency graph.
///
/// Each task owns a growable ordered list of outgoing edges. Insertion
/// order is preserved and multiple edges between the same pair are kept;
/// the path engine relaxes edges in this order, which is what makes its
/// tie-breaking deterministic.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    edges: Vec<Vec<Edge>>,
}

impl DependencyGraph {
    /// Create a graph for `task_count` tasks with no edges.
    pub fn new(task_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); task_count],
        }
    }

    /// Number of tasks this graph was sized for.
    pub fn task_count(&self) -> usize {
        self.edges.len()
    }

    /// Append an edge `from -> to` with the given weight.
    ///
    /// Fails if either endpoint is outside `[0, task_count)`; the edge list
    /// is left untouched in that case.
    pub fn add_edge(&mut self, from: TaskId, to: TaskId, weight: u64) -> Result<()> {
        let task_count = self.edges.len();
        for id in [from, to] {
            if id >= task_count {
                return Err(CritpathError::OutOfRange {
                    id: id as i64,
                    task_count,
                });
            }
        }
        self.edges[from].push(Edge { to, weight });
        Ok(())
    }

    /// Outgoing edges of a task, in insertion order.
    pub fn edges_of(&self, task: TaskId) -> &[Edge] {
        self.edges
            .get(task)
            .map(|e| e.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|e| e.len()).sum()
    }
}
