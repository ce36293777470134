use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::ProjectId;

/// Store-assigned task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single to-do item owned by a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    /// Task text as typed; completion is never encoded here
    pub text: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// The checkbox shown in plain-text listings
    pub fn checkbox(&self) -> &'static str {
        if self.done { "[x]" } else { "[ ]" }
    }
}
