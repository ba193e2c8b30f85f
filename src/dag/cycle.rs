// src/dag/cycle.rs

//! Cycle detection over the dependency graph.
//!
//! Depth-first traversal with recursion-stack tracking: a global `visited`
//! set keeps separate DFS roots from re-exploring finished subgraphs, and a
//! per-active-path `on_stack` set flags back edges.

use crate::dag::graph::DependencyGraph;
use crate::dag::TaskId;

/// Returns `true` if the graph contains at least one cycle.
///
/// Every task id is tried as a DFS root, so disconnected components are
/// covered. This is an existence check only; the members of the offending
/// cycle are not reported. Runs in O(tasks + edges).
///
/// The traversal is recursive, so stack depth equals the longest dependency
/// chain in the graph.
pub fn has_cycle(graph: &DependencyGraph) -> bool {
    let n = graph.task_count();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];

    (0..n).any(|task| !visited[task] && visit(graph, task, &mut visited, &mut on_stack))
}

fn visit(
    graph: &DependencyGraph,
    task: TaskId,
    visited: &mut [bool],
    on_stack: &mut [bool],
) -> bool {
    visited[task] = true;
    on_stack[task] = true;

    for edge in graph.edges_of(task) {
        if on_stack[edge.to] {
            return true;
        }
        if !visited[edge.to] && visit(graph, edge.to, visited, on_stack) {
            return true;
        }
    }

    on_stack[task] = false;
    false
}
