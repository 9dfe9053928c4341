/*
[INPUT]:  Parsed CLI command and loaded task
[OUTPUT]: Text written to stdout
[POS]:    Presentation layer - renders task queries and transitions
[UPDATE]: When adding new commands or output formats
*/

use std::io::Write;

use anyhow::{Context, Result};
use tforce_logic::{Action, Status, Task};
use tracing::info;

use crate::task_file::render_task;

pub fn show(task: &Task, out: &mut impl Write) -> Result<()> {
    writeln!(out, "customer: {}", task.customer_id())?;
    writeln!(out, "executor: {}", task.executor_id())?;
    writeln!(
        out,
        "status:   {} ({})",
        task.current_status(),
        task.current_status().display_name()
    )?;

    writeln!(out, "\ntransitions:")?;
    for (status, actions) in task.map_status_to_actions() {
        if actions.is_empty() {
            writeln!(out, "  {status}: terminal")?;
            continue;
        }
        for action in actions {
            writeln!(
                out,
                "  {status} --{action} ({})--> {}",
                action.role(),
                task.status_after_action(*action)
            )?;
        }
    }
    Ok(())
}

pub fn statuses(task: &Task, out: &mut impl Write) -> Result<()> {
    for status in task.all_statuses() {
        let marker = if *status == task.current_status() { "*" } else { " " };
        writeln!(out, "{marker} {:<12} {}", status.as_str(), status.display_name())?;
    }
    Ok(())
}

pub fn actions(
    task: &Task,
    user_id: i64,
    status: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let actions = match status {
        Some(status) => task
            .actions_by_status(user_id, status)
            .context("list actions")?,
        None => task.available_actions(user_id),
    };

    if actions.is_empty() {
        writeln!(out, "no actions available")?;
        return Ok(());
    }
    for action in actions {
        writeln!(out, "{:<14} {}", action.id(), action.display_name())?;
    }
    Ok(())
}

pub fn apply(task: &mut Task, user_id: i64, action: &str, out: &mut impl Write) -> Result<Status> {
    let action: Action = action.parse().context("parse action")?;
    let status = task
        .perform(user_id, action)
        .with_context(|| format!("apply {action} as user {user_id}"))?;
    info!(user_id, %action, %status, "action applied");

    write!(out, "{}", render_task(task)?)?;
    Ok(status)
}
