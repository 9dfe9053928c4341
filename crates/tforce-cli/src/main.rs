/*
[INPUT]:  CLI arguments, YAML task file
[OUTPUT]: Task queries and checked transitions printed to stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or commands
*/

mod commands;
mod task_file;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tforce-cli", version, about = "Inspect and drive TForce task transitions")]
struct Cli {
    #[arg(long = "task", value_name = "PATH")]
    task_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the task and the transition tables
    Show,
    /// List the status catalog
    Statuses,
    /// List actions available to a user
    Actions {
        #[arg(long = "user", value_name = "ID", allow_negative_numbers = true)]
        user_id: i64,
        /// Status token to query instead of the current one
        #[arg(long = "status", value_name = "STATUS")]
        status: Option<String>,
    },
    /// Apply an action as a user and print the updated task
    Apply {
        #[arg(long = "user", value_name = "ID", allow_negative_numbers = true)]
        user_id: i64,
        #[arg(long = "action", value_name = "ACTION_ID")]
        action: String,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut task = task_file::load_task(&args.task_path)?;
    debug!(
        task_path = %args.task_path.display(),
        status = %task.current_status(),
        "task loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Command::Show => commands::show(&task, &mut out),
        Command::Statuses => commands::statuses(&task, &mut out),
        Command::Actions { user_id, status } => {
            commands::actions(&task, user_id, status.as_deref(), &mut out)
        }
        Command::Apply { user_id, action } => {
            commands::apply(&mut task, user_id, &action, &mut out).map(|_| ())
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
