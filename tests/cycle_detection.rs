use std::error::Error;

use critpath::dag::cycle::has_cycle;
use critpath::dag::DependencyGraph;
use critpath::errors::CritpathError;
use critpath::project::Project;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn back_edge_on_chain_fails_the_computation() -> TestResult {
    let mut project = Project::new(3);
    for id in 0..3 {
        project.set_task_duration(id, 1)?;
    }
    project.add_dependency(0, 1, 0)?;
    project.add_dependency(1, 2, 0)?;
    project.add_dependency(2, 0, 0)?;

    let err = project.compute_critical_path().unwrap_err();
    assert!(matches!(err, CritpathError::CycleDetected));

    Ok(())
}

#[test]
fn self_loop_is_a_cycle() -> TestResult {
    let mut graph = DependencyGraph::new(1);
    graph.add_edge(0, 0, 0)?;

    assert!(has_cycle(&graph));
    Ok(())
}

#[test]
fn acyclic_graph_passes() -> TestResult {
    let mut graph = DependencyGraph::new(4);
    graph.add_edge(0, 1, 1)?;
    graph.add_edge(0, 2, 1)?;
    graph.add_edge(1, 3, 1)?;
    graph.add_edge(2, 3, 1)?;

    assert!(!has_cycle(&graph));
    Ok(())
}

#[test]
fn cycle_in_component_unreachable_from_task_zero_is_found() -> TestResult {
    // 0 -> 1 is clean; the cycle lives entirely in {2, 3}.
    let mut graph = DependencyGraph::new(4);
    graph.add_edge(0, 1, 0)?;
    graph.add_edge(2, 3, 0)?;
    graph.add_edge(3, 2, 0)?;

    assert!(has_cycle(&graph));
    Ok(())
}

#[test]
fn parallel_edges_alone_are_not_a_cycle() -> TestResult {
    let mut graph = DependencyGraph::new(2);
    graph.add_edge(0, 1, 1)?;
    graph.add_edge(0, 1, 2)?;

    assert!(!has_cycle(&graph));
    Ok(())
}

#[test]
fn empty_graph_has_no_cycle() {
    let graph = DependencyGraph::new(0);
    assert!(!has_cycle(&graph));
}

#[test]
fn no_partial_path_escapes_a_cyclic_project() -> TestResult {
    // A clean prefix before the cycle must not produce a best-effort result.
    let mut project = Project::new(4);
    project.set_task_duration(0, 9)?;
    project.add_dependency(0, 1, 0)?;
    project.add_dependency(2, 3, 0)?;
    project.add_dependency(3, 2, 0)?;

    assert!(matches!(
        project.compute_critical_path(),
        Err(CritpathError::CycleDetected)
    ));
    assert!(matches!(
        project.compute_path_table(),
        Err(CritpathError::CycleDetected)
    ));

    Ok(())
}
