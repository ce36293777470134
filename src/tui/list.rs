use crate::model::{Project, ProjectId, Task, TaskId};

/// One displayed row. The renderer matches on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Project { id: ProjectId, name: String },
    Task { id: TaskId, text: String, done: bool },
}

impl Row {
    /// Text shown for the row
    pub fn label(&self) -> &str {
        match self {
            Row::Project { name, .. } => name,
            Row::Task { text, .. } => text,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Row::Task { done: true, .. })
    }
}

impl From<Project> for Row {
    fn from(p: Project) -> Self {
        Row::Project {
            id: p.id,
            name: p.name,
        }
    }
}

impl From<Task> for Row {
    fn from(t: Task) -> Self {
        Row::Task {
            id: t.id,
            text: t.text,
            done: t.done,
        }
    }
}

/// Ordered rows with a cursor and a breadcrumb title.
///
/// The cursor is `None` exactly when there are no rows; otherwise it is a
/// valid index. Every operation preserves that.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    items: Vec<Row>,
    selected: Option<usize>,
    title: String,
}

impl ListState {
    pub fn new(title: impl Into<String>) -> Self {
        ListState {
            items: Vec::new(),
            selected: None,
            title: title.into(),
        }
    }

    /// Replace all rows, keeping the cursor at the same index where possible
    pub fn set_items(&mut self, items: Vec<Row>) {
        self.items = items;
        self.selected = match (self.selected, self.items.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
    }

    pub fn items(&self) -> &[Row] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Row> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Move the cursor by `delta`, clamping at both ends
    pub fn move_selection(&mut self, delta: isize) {
        if let Some(i) = self.selected {
            let last = self.items.len() as isize - 1;
            self.selected = Some((i as isize + delta).clamp(0, last) as usize);
        }
    }

    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(self.items.len() - 1);
        }
    }

    /// Put the cursor on `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Remove the row at `index`. The cursor stays on the same row when a
    /// row above it goes away and is clamped otherwise.
    pub fn remove_at(&mut self, index: usize) -> Option<Row> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.selected = match self.selected {
            _ if self.items.is_empty() => None,
            Some(i) if i > index => Some(i - 1),
            Some(i) => Some(i.min(self.items.len() - 1)),
            None => Some(0),
        };
        Some(removed)
    }

    /// Append a row
    pub fn insert(&mut self, item: Row) {
        self.items.push(item);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
    }

    /// Replace the row at `index` in place
    pub fn update_at(&mut self, index: usize, item: Row) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
