use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tally", about = concat!("tally v", env!("CARGO_PKG_VERSION"), " - projects and tasks in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database file (overrides [storage] path)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/tally/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output listings as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long, conflicts_with = "db")]
    pub memory: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects with task counts
    Projects,
    /// List the tasks of a project
    Tasks(ProjectArg),
    /// Create a project
    New(NewArgs),
    /// Add a task to a project
    Add(AddArgs),
    /// Mark a task done
    Done(TaskArg),
    /// Delete a task
    #[command(name = "rm-task")]
    RmTask(TaskArg),
    /// Delete a project and all of its tasks
    #[command(name = "rm-project")]
    RmProject(ProjectArg),
}

#[derive(Args, Debug)]
pub struct ProjectArg {
    /// Project name or numeric id
    pub project: String,
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name (must be unique)
    pub name: String,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project name or numeric id
    pub project: String,
    /// Task text
    pub text: String,
}

#[derive(Args, Debug)]
pub struct TaskArg {
    /// Task id as shown by `tally tasks`
    pub id: i64,
}
