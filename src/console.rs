// src/console.rs

//! Interactive console shell.
//!
//! Reads a project in the classic prompt order: total task count, one
//! duration per task, the dependency count, then `from to weight` triples.
//! Values are whitespace-separated tokens, so they may be entered one per
//! line or several per line. The summary is printed with the terminal task
//! first, matching the traditional report format.
//!
//! Reader and writer are generic so tests can drive a session from a
//! string buffer.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::dag::path::CriticalPath;
use crate::errors::{CritpathError, Result};
use crate::project::Project;

/// Pulls whitespace-separated integer tokens out of a `BufRead`.
struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_i64(&mut self) -> Result<i64> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token.parse::<i64>().map_err(|_| {
                    CritpathError::Config(format!("expected an integer, got {token:?}"))
                });
            }

            let mut line = String::new();
            let read = self.input.read_line(&mut line)?;
            if read == 0 {
                return Err(CritpathError::Config(
                    "unexpected end of input".to_string(),
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Run one interactive session: read a project, compute, print the summary.
pub fn run_session<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    let mut reader = TokenReader::new(input);

    write!(output, "Enter the total number of tasks: ")?;
    output.flush()?;
    let task_count = reader.next_i64()?;
    if task_count < 0 {
        return Err(CritpathError::Config(format!(
            "task count must be non-negative (got {task_count})"
        )));
    }
    let mut project = Project::new(task_count as usize);

    writeln!(output, "Enter the duration for each task:")?;
    for id in 0..project.task_count() {
        write!(output, "Duration of Task {id}: ")?;
        output.flush()?;
        let duration = non_negative(reader.next_i64()?, "duration")?;
        project.set_task_duration(id, duration)?;
    }

    write!(output, "Enter the number of dependencies: ")?;
    output.flush()?;
    let dep_count = reader.next_i64()?;
    if dep_count < 0 {
        return Err(CritpathError::Config(format!(
            "dependency count must be non-negative (got {dep_count})"
        )));
    }

    writeln!(output, "Enter each dependency as: <FromTask> <ToTask> <Weight>")?;
    for i in 0..dep_count {
        write!(output, "Dependency {}: ", i + 1)?;
        output.flush()?;
        let from = project.resolve_id(reader.next_i64()?)?;
        let to = project.resolve_id(reader.next_i64()?)?;
        let weight = non_negative(reader.next_i64()?, "weight")?;
        project.add_dependency(from, to, weight)?;
    }

    debug!(
        tasks = project.task_count(),
        dependencies = dep_count,
        "console session: project populated"
    );

    let path = project.compute_critical_path()?;
    print_summary(output, &path)?;

    Ok(())
}

/// Print the result summary, terminal task first.
pub fn print_summary<W: Write>(output: &mut W, path: &CriticalPath) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Longest Path Length: {} units of time", path.length)?;
    write!(output, "Tasks in Longest Path (in reverse order): ")?;
    for task in path.tasks.iter().rev() {
        write!(output, "Task {task} ")?;
    }
    writeln!(output)?;
    Ok(())
}

fn non_negative(value: i64, what: &str) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| CritpathError::Config(format!("{what} must be non-negative (got {value})")))
}
