use std::collections::BTreeMap;

use chrono::Utc;

use crate::model::{Project, ProjectId, Task, TaskId};

use super::{Store, StoreError, normalize_text};

/// Volatile store backed by ordered maps.
///
/// Used for `--memory` sessions and as the reference implementation in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: BTreeMap<ProjectId, Project>,
    tasks: BTreeMap<TaskId, Task>,
    next_project: i64,
    next_task: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn require_project(&self, id: ProjectId) -> Result<&Project, StoreError> {
        self.projects
            .get(&id)
            .ok_or_else(|| StoreError::project_not_found(id))
    }
}

impl Store for MemoryStore {
    fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.values().cloned().collect())
    }

    fn project(&self, id: ProjectId) -> Result<Project, StoreError> {
        self.require_project(id).cloned()
    }

    fn find_project(&self, name: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.projects.values().find(|p| p.name == name).cloned())
    }

    fn create_project(&mut self, name: &str) -> Result<ProjectId, StoreError> {
        let name = normalize_text(name, "project name cannot be empty")?;
        if self.projects.values().any(|p| p.name == name) {
            return Err(StoreError::Conflict {
                name: name.to_string(),
            });
        }
        self.next_project += 1;
        let id = ProjectId(self.next_project);
        self.projects.insert(
            id,
            Project {
                id,
                name: name.to_string(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    fn delete_project(&mut self, id: ProjectId) -> Result<(), StoreError> {
        self.require_project(id)?;
        self.tasks.retain(|_, t| t.project_id != id);
        self.projects.remove(&id);
        Ok(())
    }

    fn list_tasks(&self, project: ProjectId) -> Result<Vec<Task>, StoreError> {
        self.require_project(project)?;
        Ok(self
            .tasks
            .values()
            .filter(|t| t.project_id == project)
            .cloned()
            .collect())
    }

    fn create_task(&mut self, project: ProjectId, text: &str) -> Result<TaskId, StoreError> {
        let text = normalize_text(text, "task text cannot be empty")?;
        self.require_project(project)?;
        self.next_task += 1;
        let id = TaskId(self.next_task);
        self.tasks.insert(
            id,
            Task {
                id,
                project_id: project,
                text: text.to_string(),
                done: false,
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    fn complete_task(&mut self, id: TaskId) -> Result<(), StoreError> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or_else(|| StoreError::task_not_found(id))?;
        task.done = true;
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> Result<(), StoreError> {
        self.tasks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::task_not_found(id))
    }
}
