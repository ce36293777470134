use std::error::Error;
use std::io::Write;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::{Project, ProjectId, TaskId};
use crate::store::Store;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one non-interactive command against `store`, writing results to `out`
pub fn dispatch<S: Store>(
    store: &mut S,
    command: Commands,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    match command {
        // Read commands
        Commands::Projects => cmd_projects(store, json, out),
        Commands::Tasks(args) => cmd_tasks(store, &args.project, json, out),

        // Write commands
        Commands::New(args) => cmd_new(store, &args.name, out),
        Commands::Add(args) => cmd_add(store, &args.project, &args.text, out),
        Commands::Done(args) => cmd_done(store, TaskId(args.id), out),
        Commands::RmTask(args) => cmd_rm_task(store, TaskId(args.id), out),
        Commands::RmProject(args) => cmd_rm_project(store, &args.project, out),
    }
}

/// Find a project by exact name, or by id when the argument is numeric.
/// A name match wins, so a project called "42" stays reachable.
pub fn resolve_project<S: Store>(store: &S, spec: &str) -> Result<Project, Box<dyn Error>> {
    if let Some(project) = store.find_project(spec.trim())? {
        return Ok(project);
    }
    match spec.trim().parse::<i64>() {
        Ok(id) => Ok(store.project(ProjectId(id))?),
        Err(_) => Err(format!("no project named \"{}\"", spec.trim()).into()),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_projects<S: Store>(
    store: &S,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let projects = store.list_projects()?;
    let mut rows = Vec::with_capacity(projects.len());
    for project in &projects {
        let tasks = store.list_tasks(project.id)?;
        rows.push(project_to_json(project, &tasks));
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else if rows.is_empty() {
        writeln!(out, "(no projects)")?;
    } else {
        for row in &rows {
            writeln!(out, "{}", format_project_line(row))?;
        }
    }
    Ok(())
}

fn cmd_tasks<S: Store>(
    store: &S,
    spec: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let project = resolve_project(store, spec)?;
    let tasks = store.list_tasks(project.id)?;

    if json {
        let list = TaskListJson {
            project: project.name,
            project_id: project.id,
            tasks: tasks.iter().map(task_to_json).collect(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&list)?)?;
    } else if tasks.is_empty() {
        writeln!(out, "(no tasks in {})", project.name)?;
    } else {
        for task in &tasks {
            writeln!(out, "{}", format_task_line(task))?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_new<S: Store>(
    store: &mut S,
    name: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let id = store.create_project(name)?;
    tracing::info!(project = %id, name = name.trim(), "created project");
    writeln!(out, "created project {} \"{}\"", id, name.trim())?;
    Ok(())
}

fn cmd_add<S: Store>(
    store: &mut S,
    spec: &str,
    text: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let project = resolve_project(store, spec)?;
    let id = store.create_task(project.id, text)?;
    tracing::info!(project = %project.id, task = %id, "created task");
    writeln!(out, "added task {} to {}", id, project.name)?;
    Ok(())
}

fn cmd_done<S: Store>(
    store: &mut S,
    id: TaskId,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    store.complete_task(id)?;
    tracing::info!(task = %id, "completed task");
    writeln!(out, "completed task {}", id)?;
    Ok(())
}

fn cmd_rm_task<S: Store>(
    store: &mut S,
    id: TaskId,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    store.delete_task(id)?;
    tracing::info!(task = %id, "deleted task");
    writeln!(out, "deleted task {}", id)?;
    Ok(())
}

fn cmd_rm_project<S: Store>(
    store: &mut S,
    spec: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let project = resolve_project(store, spec)?;
    store.delete_project(project.id)?;
    tracing::info!(project = %project.id, name = %project.name, "deleted project");
    writeln!(out, "deleted project \"{}\" and its tasks", project.name)?;
    Ok(())
}
