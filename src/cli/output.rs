use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Project, ProjectId, Task, TaskId};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectJson {
    pub id: ProjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub tasks: usize,
    pub done: usize,
}

#[derive(Serialize)]
pub struct TaskJson {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub project: String,
    pub project_id: ProjectId,
    pub tasks: Vec<TaskJson>,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

pub fn project_to_json(project: &Project, tasks: &[Task]) -> ProjectJson {
    ProjectJson {
        id: project.id,
        name: project.name.clone(),
        created_at: project.created_at,
        tasks: tasks.len(),
        done: tasks.iter().filter(|t| t.done).count(),
    }
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        text: task.text.clone(),
        done: task.done,
        created_at: task.created_at,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `3  Groceries  (2 tasks, 1 done)`
pub fn format_project_line(p: &ProjectJson) -> String {
    let noun = if p.tasks == 1 { "task" } else { "tasks" };
    format!("{:>3}  {}  ({} {}, {} done)", p.id, p.name, p.tasks, noun, p.done)
}

/// `12  [x] Milk`
pub fn format_task_line(task: &Task) -> String {
    format!("{:>3}  {} {}", task.id, task.checkbox(), task.text)
}
