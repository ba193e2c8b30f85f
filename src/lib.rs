// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod project;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::project::Project;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - project input (TOML file, or the interactive stdin protocol)
/// - validation
/// - the critical-path computation
/// - result printing
pub fn run(args: CliArgs) -> Result<()> {
    if args.stdin {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        console::run_session(stdin.lock(), &mut stdout)?;
        return Ok(());
    }

    let cfg = load_and_validate(&args.config)?;
    let project = Project::from_config(&cfg)?;

    if args.dry_run {
        print_overview(&project)?;
        return Ok(());
    }

    info!(
        tasks = project.task_count(),
        dependencies = project.graph().edge_count(),
        "computing critical path"
    );

    let path = project.compute_critical_path()?;

    let mut stdout = std::io::stdout();
    console::print_summary(&mut stdout, &path)?;
    Ok(())
}

/// Dry-run output: print tasks, dependencies and the per-task longest-path
/// table without the final summary.
fn print_overview(project: &Project) -> Result<()> {
    println!("critpath dry-run");
    println!();

    println!("tasks ({}):", project.task_count());
    for id in 0..project.task_count() {
        println!("  - Task {id}: duration {}", project.registry().duration_of(id));
    }

    println!("dependencies ({}):", project.graph().edge_count());
    for from in 0..project.task_count() {
        for edge in project.graph().edges_of(from) {
            println!("  - {from} -> {} (weight {})", edge.to, edge.weight);
        }
    }

    let table = project.compute_path_table()?;
    println!();
    println!("longest path to each task:");
    for id in 0..table.task_count() {
        match table.predecessor_of(id) {
            Some(prev) => println!("  - Task {id}: {} (via Task {prev})", table.longest_to(id)),
            None => println!("  - Task {id}: {}", table.longest_to(id)),
        }
    }

    debug!("dry-run complete (no summary printed)");
    Ok(())
}
