use std::error::Error;
use std::fs;

use critpath::config::loader::{default_config_path, load_and_validate, load_from_path};
use critpath::errors::CritpathError;
use critpath::project::Project;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> Result<(tempfile::TempDir, std::path::PathBuf), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Critpath.toml");
    fs::write(&path, contents)?;
    Ok((dir, path))
}

#[test]
fn full_project_file_loads_and_computes() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[project]
tasks = 3

[[task]]
id = 0
duration = 3

[[task]]
id = 1
duration = 2

[[task]]
id = 2
duration = 4

[[dependency]]
from = 0
to = 1
weight = 0

[[dependency]]
from = 1
to = 2
weight = 0
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    let project = Project::from_config(&cfg)?;

    let result = project.compute_critical_path()?;
    assert_eq!(result.length, 9);
    assert_eq!(result.tasks, vec![0, 1, 2]);

    Ok(())
}

#[test]
fn unlisted_task_ids_default_to_zero_duration() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[project]
tasks = 3

[[task]]
id = 2
duration = 7

[[dependency]]
from = 0
to = 2
weight = 1
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    let project = Project::from_config(&cfg)?;
    assert_eq!(project.registry().duration_of(0), 0);
    assert_eq!(project.registry().duration_of(1), 0);

    let result = project.compute_critical_path()?;
    assert_eq!(result.length, 0 + 1 + 7);
    assert_eq!(result.tasks, vec![0, 2]);

    Ok(())
}

#[test]
fn empty_project_is_valid() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[project]
tasks = 0
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    let project = Project::from_config(&cfg)?;

    let result = project.compute_critical_path()?;
    assert_eq!(result.length, 0);
    assert!(result.tasks.is_empty());

    Ok(())
}

#[test]
fn model_built_in_code_converts_like_a_loaded_file() -> TestResult {
    use critpath::config::{DependencyEntry, ProjectFile, ProjectSection, TaskEntry};

    let cfg = ProjectFile {
        project: ProjectSection { tasks: 2 },
        task: vec![
            TaskEntry { id: 0, duration: 2 },
            TaskEntry { id: 1, duration: 3 },
        ],
        dependency: vec![DependencyEntry {
            from: 0,
            to: 1,
            weight: 4,
        }],
    };

    let project = Project::from_config(&cfg)?;
    let result = project.compute_critical_path()?;
    assert_eq!(result.length, 2 + 4 + 3);
    assert_eq!(result.tasks, vec![0, 1]);

    Ok(())
}

#[test]
fn dependency_endpoint_out_of_range_is_rejected() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[project]
tasks = 2

[[dependency]]
from = 0
to = 2
weight = 1
"#,
    )?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(
        err,
        CritpathError::OutOfRange { id: 2, task_count: 2 }
    ));

    Ok(())
}

#[test]
fn negative_task_id_is_rejected_as_out_of_range() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[project]
tasks = 2

[[task]]
id = -1
duration = 3
"#,
    )?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(
        err,
        CritpathError::OutOfRange { id: -1, task_count: 2 }
    ));

    Ok(())
}

#[test]
fn negative_weight_is_a_config_error() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[project]
tasks = 2

[[dependency]]
from = 0
to = 1
weight = -5
"#,
    )?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, CritpathError::Config(_)));

    Ok(())
}

#[test]
fn negative_duration_is_a_config_error() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[project]
tasks = 1

[[task]]
id = 0
duration = -3
"#,
    )?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, CritpathError::Config(_)));

    Ok(())
}

#[test]
fn malformed_toml_is_a_parse_error() -> TestResult {
    let (_dir, path) = write_config("[project\ntasks = 1\n")?;

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, CritpathError::Toml(_)));

    Ok(())
}

#[test]
fn missing_file_reports_the_path() {
    let err = load_from_path("does-not-exist/Critpath.toml").unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn default_path_is_critpath_toml() {
    assert_eq!(default_config_path().to_str(), Some("Critpath.toml"));
}
