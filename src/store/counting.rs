//! Test double that records how many times the store was called.

use std::cell::Cell;

use crate::model::{Project, ProjectId, Task, TaskId};

use super::{MemoryStore, Store, StoreError};

#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    reads: Cell<usize>,
    writes: usize,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        CountingStore {
            inner,
            reads: Cell::new(0),
            writes: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.reads.get() + self.writes
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    fn read(&self) {
        self.reads.set(self.reads.get() + 1);
    }
}

impl Store for CountingStore {
    fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.read();
        self.inner.list_projects()
    }

    fn project(&self, id: ProjectId) -> Result<Project, StoreError> {
        self.read();
        self.inner.project(id)
    }

    fn find_project(&self, name: &str) -> Result<Option<Project>, StoreError> {
        self.read();
        self.inner.find_project(name)
    }

    fn create_project(&mut self, name: &str) -> Result<ProjectId, StoreError> {
        self.writes += 1;
        self.inner.create_project(name)
    }

    fn delete_project(&mut self, id: ProjectId) -> Result<(), StoreError> {
        self.writes += 1;
        self.inner.delete_project(id)
    }

    fn list_tasks(&self, project: ProjectId) -> Result<Vec<Task>, StoreError> {
        self.read();
        self.inner.list_tasks(project)
    }

    fn create_task(&mut self, project: ProjectId, text: &str) -> Result<TaskId, StoreError> {
        self.writes += 1;
        self.inner.create_task(project, text)
    }

    fn complete_task(&mut self, id: TaskId) -> Result<(), StoreError> {
        self.writes += 1;
        self.inner.complete_task(id)
    }

    fn delete_task(&mut self, id: TaskId) -> Result<(), StoreError> {
        self.writes += 1;
        self.inner.delete_task(id)
    }
}
