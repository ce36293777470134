use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::model::{Project, ProjectId, Task, TaskId};

use super::{Store, StoreError, normalize_text};

const SCHEMA: &str = r#"
PRAGMA foreign_keys = ON;
PRAGMA synchronous = FULL;

CREATE TABLE IF NOT EXISTS projects (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL UNIQUE,
  created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tasks (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  text TEXT NOT NULL,
  project_id INTEGER NOT NULL REFERENCES projects(id),
  done INTEGER NOT NULL DEFAULT 0,
  created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_tasks_project ON tasks(project_id, id);
"#;

/// SQLite-backed store. Each mutation runs in autocommit mode or inside a
/// committed transaction, so it is on disk when the call returns.
#[derive(Debug)]
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file, creating parent directories.
    ///
    /// Any failure here is reported as `StoreError::Unavailable`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let unavailable = |source: Box<dyn std::error::Error + Send + Sync>| {
            StoreError::Unavailable {
                path: path.clone(),
                source,
            }
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| unavailable(Box::new(e)))?;
        }
        let conn = Connection::open(&path).map_err(|e| unavailable(Box::new(e)))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| unavailable(Box::new(e)))?;

        tracing::debug!(path = %path.display(), "opened sqlite store");
        Ok(SqliteStore {
            path: Some(path),
            conn,
        })
    }

    /// A private database that disappears with the connection
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore { path: None, conn })
    }

    /// The database file, or `None` for an in-memory store
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn project_exists(conn: &Connection, id: ProjectId) -> Result<bool, StoreError> {
        let found = conn
            .query_row(
                "SELECT 1 FROM projects WHERE id = ?1",
                params![id.0],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: ProjectId(row.get(0)?),
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: TaskId(row.get(0)?),
        project_id: ProjectId(row.get(1)?),
        text: row.get(2)?,
        done: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl Store for SqliteStore {
    fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at FROM projects ORDER BY id")?;
        let rows = stmt.query_map([], project_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn project(&self, id: ProjectId) -> Result<Project, StoreError> {
        self.conn
            .query_row(
                "SELECT id, name, created_at FROM projects WHERE id = ?1",
                params![id.0],
                project_from_row,
            )
            .optional()?
            .ok_or_else(|| StoreError::project_not_found(id))
    }

    fn find_project(&self, name: &str) -> Result<Option<Project>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name, created_at FROM projects WHERE name = ?1",
                params![name],
                project_from_row,
            )
            .optional()?)
    }

    fn create_project(&mut self, name: &str) -> Result<ProjectId, StoreError> {
        let name = normalize_text(name, "project name cannot be empty")?;
        let tx = self.conn.transaction()?;
        let taken = tx
            .query_row(
                "SELECT 1 FROM projects WHERE name = ?1",
                params![name],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if taken {
            return Err(StoreError::Conflict {
                name: name.to_string(),
            });
        }
        tx.execute(
            "INSERT INTO projects(name, created_at) VALUES (?1, ?2)",
            params![name, Utc::now()],
        )?;
        let id = ProjectId(tx.last_insert_rowid());
        tx.commit()?;
        Ok(id)
    }

    fn delete_project(&mut self, id: ProjectId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        if !Self::project_exists(&tx, id)? {
            return Err(StoreError::project_not_found(id));
        }
        // Tasks first: the foreign key does not cascade
        tx.execute("DELETE FROM tasks WHERE project_id = ?1", params![id.0])?;
        tx.execute("DELETE FROM projects WHERE id = ?1", params![id.0])?;
        tx.commit()?;
        Ok(())
    }

    fn list_tasks(&self, project: ProjectId) -> Result<Vec<Task>, StoreError> {
        if !Self::project_exists(&self.conn, project)? {
            return Err(StoreError::project_not_found(project));
        }
        let mut stmt = self.conn.prepare(
            "SELECT id, project_id, text, done, created_at FROM tasks \
             WHERE project_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![project.0], task_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn create_task(&mut self, project: ProjectId, text: &str) -> Result<TaskId, StoreError> {
        let text = normalize_text(text, "task text cannot be empty")?;
        let tx = self.conn.transaction()?;
        if !Self::project_exists(&tx, project)? {
            return Err(StoreError::project_not_found(project));
        }
        tx.execute(
            "INSERT INTO tasks(text, project_id, done, created_at) VALUES (?1, ?2, 0, ?3)",
            params![text, project.0, Utc::now()],
        )?;
        let id = TaskId(tx.last_insert_rowid());
        tx.commit()?;
        Ok(id)
    }

    fn complete_task(&mut self, id: TaskId) -> Result<(), StoreError> {
        // Matched rows count as changed even when already done
        let changed = self
            .conn
            .execute("UPDATE tasks SET done = 1 WHERE id = ?1", params![id.0])?;
        if changed == 0 {
            return Err(StoreError::task_not_found(id));
        }
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id.0])?;
        if changed == 0 {
            return Err(StoreError::task_not_found(id));
        }
        Ok(())
    }
}
