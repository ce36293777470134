//! Persistence boundary for projects and tasks.
//!
//! The [`Store`] trait is the only way the rest of the crate touches
//! persisted data. Every call either fully succeeds or leaves the store
//! unchanged, and every mutating call is durable before it returns, so
//! callers may re-query immediately after a write and see the result.

pub mod memory;
pub mod sqlite;

#[cfg(test)]
pub mod counting;

use std::path::PathBuf;

use crate::model::{Project, ProjectId, Task, TaskId};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a project named \"{name}\" already exists")]
    Conflict { name: String },
    #[error("{what} {id} not found")]
    NotFound { what: &'static str, id: i64 },
    #[error("{0}")]
    Invalid(&'static str),
    #[error("storage unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn project_not_found(id: ProjectId) -> Self {
        StoreError::NotFound {
            what: "project",
            id: id.0,
        }
    }

    pub fn task_not_found(id: TaskId) -> Self {
        StoreError::NotFound {
            what: "task",
            id: id.0,
        }
    }
}

/// Durable CRUD over projects and tasks.
///
/// Listings are ordered by id, which is creation order. Mutations take
/// `&mut self`, so a store shared across threads must sit behind a lock.
pub trait Store {
    fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    /// Look up a single project by id
    fn project(&self, id: ProjectId) -> Result<Project, StoreError>;

    /// Look up a project by exact name
    fn find_project(&self, name: &str) -> Result<Option<Project>, StoreError>;

    /// Create a project. Fails with `Conflict` if the name is taken.
    fn create_project(&mut self, name: &str) -> Result<ProjectId, StoreError>;

    /// Delete a project's tasks, then the project itself.
    fn delete_project(&mut self, id: ProjectId) -> Result<(), StoreError>;

    /// Tasks of one project. Fails with `NotFound` for an unknown project.
    fn list_tasks(&self, project: ProjectId) -> Result<Vec<Task>, StoreError>;

    fn create_task(&mut self, project: ProjectId, text: &str) -> Result<TaskId, StoreError>;

    /// Mark a task done. Completing a done task succeeds and changes nothing.
    fn complete_task(&mut self, id: TaskId) -> Result<(), StoreError>;

    fn delete_task(&mut self, id: TaskId) -> Result<(), StoreError>;
}

/// Trim and reject empty names before they reach storage
pub(crate) fn normalize_text<'a>(text: &'a str, what: &'static str) -> Result<&'a str, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Invalid(what));
    }
    Ok(trimmed)
}
