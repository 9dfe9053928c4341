/*
[INPUT]:  YAML task file
[OUTPUT]: Validated Task loaded from disk
[POS]:    Configuration layer - task file input
[UPDATE]: When the task file schema changes
*/

use std::path::Path;

use anyhow::{Context, Result};
use tforce_logic::{Task, TaskSnapshot};

/// Load a task from a YAML snapshot file
pub fn load_task(path: &Path) -> Result<Task> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read task file {}", path.display()))?;
    let snapshot: TaskSnapshot = serde_yaml::from_str(&content).context("parse task file")?;
    let task = Task::try_from(snapshot).context("validate task")?;
    Ok(task)
}

/// Render a task as a YAML snapshot
pub fn render_task(task: &Task) -> Result<String> {
    serde_yaml::to_string(&task.snapshot()).context("serialize task snapshot")
}
