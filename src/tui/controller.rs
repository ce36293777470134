//! The interactive state machine.
//!
//! A [`Controller`] owns the displayed list, the input buffer, the current
//! [`Mode`] and the store it was built with. [`Controller::handle`] applies
//! one semantic [`Action`]: it may call the store, mutate the list or the
//! buffer, and move to another mode. A failed store call leaves the mode
//! and the buffer as they were and records a [`Notice`] for the next frame.

use crate::model::{ProjectId, TaskId};
use crate::store::{Store, StoreError};

use super::list::{ListState, Row};
use super::text_input::InputState;

/// Title of the project list
pub const PROJECTS_TITLE: &str = "/projects";

/// Breadcrumb shown above a project's tasks
pub fn task_breadcrumb(project_name: &str) -> String {
    format!("/projects/{}/tasks", project_name)
}

/// The project whose tasks are on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProject {
    pub id: ProjectId,
    pub name: String,
}

/// Which events are meaningful and how they are interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    ViewingProjects,
    ViewingTasks(ActiveProject),
    AddingProject,
    AddingTask(ActiveProject),
}

impl Mode {
    pub fn is_adding(&self) -> bool {
        matches!(self, Mode::AddingProject | Mode::AddingTask(_))
    }
}

/// Semantic input events, already decoded from keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Select,
    Delete,
    Back,
    Submit,
    Cancel,
    Quit,
    Move(isize),
    First,
    Last,
    Type(char),
    Paste(String),
    Backspace,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Resize,
}

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A one-frame message for the status row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Read-only snapshot handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    pub mode: &'a Mode,
    pub list: &'a ListState,
    pub input: &'a InputState,
    pub notice: Option<&'a Notice>,
}

pub struct Controller<S: Store> {
    store: S,
    mode: Mode,
    list: ListState,
    input: InputState,
    notice: Option<Notice>,
}

impl<S: Store> Controller<S> {
    /// Load the project list and start in `ViewingProjects`
    pub fn new(store: S, input_limit: usize) -> Result<Self, StoreError> {
        let mut list = ListState::new(PROJECTS_TITLE);
        list.set_items(project_rows(&store)?);
        Ok(Controller {
            store,
            mode: Mode::ViewingProjects,
            list,
            input: InputState::new(input_limit),
            notice: None,
        })
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn screen(&self) -> Screen<'_> {
        Screen {
            mode: &self.mode,
            list: &self.list,
            input: &self.input,
            notice: self.notice.as_ref(),
        }
    }

    /// Apply one event. Runs to completion before the next event is read.
    pub fn handle(&mut self, action: Action) -> Flow {
        if action == Action::Resize {
            return Flow::Continue;
        }
        self.notice = None;
        match self.mode.clone() {
            Mode::ViewingProjects => self.on_projects(action),
            Mode::ViewingTasks(project) => self.on_tasks(project, action),
            Mode::AddingProject => {
                self.on_adding_project(action);
                Flow::Continue
            }
            Mode::AddingTask(project) => {
                self.on_adding_task(project, action);
                Flow::Continue
            }
        }
    }

    // -----------------------------------------------------------------------
    // Viewing modes

    fn on_projects(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::Add => {
                self.input.focus();
                self.set_mode(Mode::AddingProject);
            }
            Action::Select => self.open_selected_project(),
            Action::Delete => self.delete_selected_project(),
            action => self.navigate(action),
        }
        Flow::Continue
    }

    fn on_tasks(&mut self, project: ActiveProject, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::Add => {
                self.input.focus();
                self.set_mode(Mode::AddingTask(project));
            }
            Action::Select => self.complete_selected_task(&project),
            Action::Delete => self.delete_selected_task(&project),
            Action::Back => self.back_to_projects(Some(project.id)),
            action => self.navigate(action),
        }
        Flow::Continue
    }

    fn navigate(&mut self, action: Action) {
        match action {
            Action::Move(delta) => self.list.move_selection(delta),
            Action::First => self.list.select_first(),
            Action::Last => self.list.select_last(),
            _ => {}
        }
    }

    fn open_selected_project(&mut self) {
        let Some(Row::Project { id, name }) = self.list.selected().cloned() else {
            return;
        };
        match task_rows(&self.store, id) {
            Ok(rows) => {
                self.list.set_title(task_breadcrumb(&name));
                self.list.set_items(rows);
                self.list.select_first();
                self.set_mode(Mode::ViewingTasks(ActiveProject { id, name }));
            }
            Err(e) => self.fail_and_resync(e, None),
        }
    }

    fn delete_selected_project(&mut self) {
        let Some(Row::Project { id, name }) = self.list.selected().cloned() else {
            return;
        };
        match self.store.delete_project(id) {
            Ok(()) => {
                tracing::info!(project = %id, %name, "deleted project");
                self.reload_projects(None);
                if self.notice.is_none() {
                    self.notice = Some(Notice::Info(format!("deleted \"{name}\" and its tasks")));
                }
            }
            Err(e) => self.fail_and_resync(e, None),
        }
    }

    fn complete_selected_task(&mut self, project: &ActiveProject) {
        let Some(index) = self.list.selected_index() else {
            return;
        };
        let Some(Row::Task {
            id,
            text,
            done: false,
        }) = self.list.selected().cloned()
        else {
            return;
        };
        match self.store.complete_task(id) {
            Ok(()) => {
                tracing::info!(task = %id, "completed task");
                self.list.update_at(
                    index,
                    Row::Task {
                        id,
                        text,
                        done: true,
                    },
                );
            }
            Err(e) => self.fail_and_resync(e, Some(project)),
        }
    }

    fn delete_selected_task(&mut self, project: &ActiveProject) {
        let Some(Row::Task { id, .. }) = self.list.selected().cloned() else {
            return;
        };
        match self.store.delete_task(id) {
            Ok(()) => {
                tracing::info!(task = %id, "deleted task");
                self.reload_tasks(project, None);
            }
            Err(e) => self.fail_and_resync(e, Some(project)),
        }
    }

    fn back_to_projects(&mut self, return_to: Option<ProjectId>) {
        match project_rows(&self.store) {
            Ok(rows) => {
                self.show_projects(rows, return_to);
                self.set_mode(Mode::ViewingProjects);
            }
            Err(e) => self.fail(e),
        }
    }

    // -----------------------------------------------------------------------
    // Adding modes

    fn on_adding_project(&mut self, action: Action) {
        match action {
            Action::Submit => {
                let name = self.input.value().trim().to_string();
                if name.is_empty() {
                    return;
                }
                match self.store.create_project(&name) {
                    Ok(id) => {
                        tracing::info!(project = %id, %name, "created project");
                        self.input.reset();
                        self.set_mode(Mode::ViewingProjects);
                        self.reload_projects(Some(id));
                    }
                    Err(e) => self.fail(e),
                }
            }
            Action::Cancel => {
                self.input.reset();
                self.set_mode(Mode::ViewingProjects);
            }
            action => self.edit(action),
        }
    }

    fn on_adding_task(&mut self, project: ActiveProject, action: Action) {
        match action {
            Action::Submit => {
                let text = self.input.value().trim().to_string();
                if text.is_empty() {
                    return;
                }
                match self.store.create_task(project.id, &text) {
                    Ok(id) => {
                        tracing::info!(project = %project.id, task = %id, "created task");
                        self.input.reset();
                        self.reload_tasks(&project, Some(id));
                        if !matches!(self.mode, Mode::ViewingProjects) {
                            self.set_mode(Mode::ViewingTasks(project));
                        }
                    }
                    Err(e) => self.fail(e),
                }
            }
            Action::Cancel => {
                self.input.reset();
                self.set_mode(Mode::ViewingTasks(project));
            }
            action => self.edit(action),
        }
    }

    fn edit(&mut self, action: Action) {
        match action {
            Action::Type(c) => {
                self.input.type_char(c);
            }
            Action::Paste(text) => self.input.paste(&text),
            Action::Backspace => self.input.backspace(),
            Action::DeleteForward => self.input.delete_forward(),
            Action::CursorLeft => self.input.move_left(),
            Action::CursorRight => self.input.move_right(),
            Action::CursorHome => self.input.move_home(),
            Action::CursorEnd => self.input.move_end(),
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Store synchronization

    /// Re-derive the project list from the store
    fn reload_projects(&mut self, select: Option<ProjectId>) {
        match project_rows(&self.store) {
            Ok(rows) => self.show_projects(rows, select),
            Err(e) => self.fail(e),
        }
    }

    fn show_projects(&mut self, rows: Vec<Row>, select: Option<ProjectId>) {
        self.list.set_title(PROJECTS_TITLE);
        self.list.set_items(rows);
        if let Some(target) = select {
            self.select_where(|row| matches!(row, Row::Project { id, .. } if *id == target));
        }
    }

    /// Re-derive the task list. If the project itself is gone, fall back
    /// to the project list.
    fn reload_tasks(&mut self, project: &ActiveProject, select: Option<TaskId>) {
        match task_rows(&self.store, project.id) {
            Ok(rows) => {
                self.list.set_items(rows);
                if let Some(target) = select {
                    self.select_where(|row| matches!(row, Row::Task { id, .. } if *id == target));
                }
            }
            Err(e @ StoreError::NotFound { .. }) => {
                self.fail(e);
                self.back_to_projects(None);
            }
            Err(e) => self.fail(e),
        }
    }

    fn select_where(&mut self, pred: impl Fn(&Row) -> bool) {
        if let Some(index) = self.list.items().iter().position(pred) {
            self.list.select(index);
        }
    }

    /// Surface the error; when the cached row was stale, refresh the list.
    /// If the active project is gone too, its notice is the one kept.
    fn fail_and_resync(&mut self, err: StoreError, project: Option<&ActiveProject>) {
        if matches!(err, StoreError::NotFound { .. }) {
            match project {
                Some(p) => {
                    self.reload_tasks(p, None);
                    if self.mode == Mode::ViewingProjects {
                        tracing::warn!(error = %err, "stale task in a vanished project");
                        return;
                    }
                }
                None => self.reload_projects(None),
            }
        }
        self.fail(err);
    }

    fn fail(&mut self, err: StoreError) {
        tracing::warn!(error = %err, mode = ?self.mode, "store call failed");
        self.notice = Some(Notice::Error(err.to_string()));
    }

    fn set_mode(&mut self, mode: Mode) {
        tracing::debug!(from = ?self.mode, to = ?mode, "mode transition");
        self.mode = mode;
    }
}

fn project_rows<S: Store>(store: &S) -> Result<Vec<Row>, StoreError> {
    Ok(store.list_projects()?.into_iter().map(Row::from).collect())
}

fn task_rows<S: Store>(store: &S, project: ProjectId) -> Result<Vec<Row>, StoreError> {
    Ok(store.list_tasks(project)?.into_iter().map(Row::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::store::counting::CountingStore;

    fn controller_with(setup: impl FnOnce(&mut MemoryStore)) -> Controller<CountingStore> {
        let mut inner = MemoryStore::new();
        setup(&mut inner);
        Controller::new(CountingStore::new(inner), 100).unwrap()
    }

    fn groceries(store: &mut MemoryStore) {
        let p = store.create_project("Groceries").unwrap();
        store.create_task(p, "Milk").unwrap();
        store.create_task(p, "Eggs").unwrap();
    }

    fn labels<S: Store>(c: &Controller<S>) -> Vec<String> {
        c.list().items().iter().map(|r| r.label().to_string()).collect()
    }

    fn type_str<S: Store>(c: &mut Controller<S>, s: &str) {
        for ch in s.chars() {
            c.handle(Action::Type(ch));
        }
    }

    fn active(c: &Controller<CountingStore>) -> ActiveProject {
        match c.mode() {
            Mode::ViewingTasks(p) | Mode::AddingTask(p) => p.clone(),
            other => panic!("not in a task mode: {other:?}"),
        }
    }

    #[test]
    fn starts_on_project_list() {
        let c = controller_with(groceries);
        assert_eq!(c.mode(), &Mode::ViewingProjects);
        assert_eq!(c.list().title(), PROJECTS_TITLE);
        assert_eq!(labels(&c), vec!["Groceries"]);
        assert_eq!(c.list().selected_index(), Some(0));
    }

    #[test]
    fn adding_first_project() {
        let mut c = controller_with(|_| {});
        assert_eq!(c.list().selected_index(), None);

        c.handle(Action::Add);
        assert_eq!(c.mode(), &Mode::AddingProject);
        assert!(c.input().is_focused());

        type_str(&mut c, "Groceries");
        c.handle(Action::Submit);

        assert_eq!(c.mode(), &Mode::ViewingProjects);
        assert_eq!(labels(&c), vec!["Groceries"]);
        assert_eq!(c.input().value(), "");
        assert!(!c.input().is_focused());
        assert_eq!(c.list().selected_index(), Some(0));
    }

    #[test]
    fn new_project_is_selected_after_submit() {
        let mut c = controller_with(|s| {
            s.create_project("a").unwrap();
            s.create_project("b").unwrap();
        });
        c.handle(Action::Add);
        type_str(&mut c, "  c  ");
        c.handle(Action::Submit);
        assert_eq!(labels(&c), vec!["a", "b", "c"]);
        assert_eq!(c.list().selected_index(), Some(2));
    }

    #[test]
    fn duplicate_project_name_is_recoverable() {
        let mut c = controller_with(groceries);
        c.handle(Action::Add);
        type_str(&mut c, "Groceries");
        let flow = c.handle(Action::Submit);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(c.mode(), &Mode::AddingProject);
        assert_eq!(c.input().value(), "Groceries");
        assert!(c.input().is_focused());
        assert!(matches!(c.notice(), Some(Notice::Error(msg)) if msg.contains("already exists")));
        assert_eq!(labels(&c), vec!["Groceries"]);

        // The user fixes the name and resubmits
        type_str(&mut c, " 2");
        c.handle(Action::Submit);
        assert_eq!(c.mode(), &Mode::ViewingProjects);
        assert_eq!(labels(&c), vec!["Groceries", "Groceries 2"]);
        assert!(c.notice().is_none());
    }

    #[test]
    fn opening_a_project_sets_breadcrumb() {
        let mut c = controller_with(groceries);
        c.handle(Action::Select);
        let p = active(&c);
        assert_eq!(p.name, "Groceries");
        assert_eq!(c.list().title(), "/projects/Groceries/tasks");
        assert_eq!(labels(&c), vec!["Milk", "Eggs"]);
        assert_eq!(c.list().selected_index(), Some(0));
    }

    #[test]
    fn completing_is_idempotent() {
        let mut c = controller_with(groceries);
        c.handle(Action::Select);

        c.handle(Action::Select);
        assert!(c.list().items()[0].is_done());
        assert!(!c.list().items()[1].is_done());
        assert_eq!(c.store().writes(), 1);
        let calls = c.store().calls();

        c.handle(Action::Select);
        assert!(c.list().items()[0].is_done());
        assert_eq!(c.list().items()[0].label(), "Milk");
        assert_eq!(c.store().calls(), calls);

        let p = active(&c);
        let stored = c.store().inner.list_tasks(p.id).unwrap();
        assert!(stored[0].done);
        assert_eq!(stored[0].text, "Milk");
    }

    #[test]
    fn deleting_only_task_leaves_no_selection() {
        let mut c = controller_with(|s| {
            let p = s.create_project("Solo").unwrap();
            s.create_task(p, "only").unwrap();
        });
        c.handle(Action::Select);
        c.handle(Action::Delete);

        assert!(c.list().is_empty());
        assert_eq!(c.list().selected_index(), None);

        let calls = c.store().calls();
        assert_eq!(c.handle(Action::Select), Flow::Continue);
        assert_eq!(c.handle(Action::Delete), Flow::Continue);
        assert_eq!(c.store().calls(), calls);
        assert!(matches!(c.mode(), Mode::ViewingTasks(_)));
    }

    #[test]
    fn deleting_task_keeps_cursor_position() {
        let mut c = controller_with(|s| {
            let p = s.create_project("P").unwrap();
            for t in ["a", "b", "c"] {
                s.create_task(p, t).unwrap();
            }
        });
        c.handle(Action::Select);
        c.handle(Action::Move(1));
        c.handle(Action::Delete);
        assert_eq!(labels(&c), vec!["a", "c"]);
        assert_eq!(c.list().selected().map(Row::label), Some("c"));
        c.handle(Action::Delete);
        assert_eq!(c.list().selected().map(Row::label), Some("a"));
    }

    #[test]
    fn empty_submit_is_ignored() {
        let mut c = controller_with(groceries);
        c.handle(Action::Select);
        c.handle(Action::Add);
        let calls = c.store().calls();

        c.handle(Action::Submit);
        type_str(&mut c, "   ");
        c.handle(Action::Submit);

        assert!(matches!(c.mode(), Mode::AddingTask(_)));
        assert!(c.input().is_focused());
        assert_eq!(c.store().calls(), calls);
        assert!(c.notice().is_none());
    }

    #[test]
    fn adding_task_appends_and_selects_it() {
        let mut c = controller_with(groceries);
        c.handle(Action::Select);
        c.handle(Action::Add);
        type_str(&mut c, "Bread");
        c.handle(Action::Submit);

        assert!(matches!(c.mode(), Mode::ViewingTasks(p) if p.name == "Groceries"));
        assert_eq!(labels(&c), vec!["Milk", "Eggs", "Bread"]);
        assert_eq!(c.list().selected_index(), Some(2));
        assert!(!c.input().is_focused());
    }

    #[test]
    fn cancel_discards_input() {
        let mut c = controller_with(groceries);
        c.handle(Action::Add);
        type_str(&mut c, "half typed");
        c.handle(Action::Cancel);
        assert_eq!(c.mode(), &Mode::ViewingProjects);
        assert_eq!(c.input().value(), "");
        assert_eq!(c.store().writes(), 0);

        c.handle(Action::Select);
        c.handle(Action::Add);
        type_str(&mut c, "also half");
        c.handle(Action::Cancel);
        assert!(matches!(c.mode(), Mode::ViewingTasks(_)));
        assert_eq!(c.input().value(), "");
        assert_eq!(labels(&c), vec!["Milk", "Eggs"]);
    }

    #[test]
    fn back_returns_to_the_project_just_left() {
        let mut c = controller_with(|s| {
            for name in ["a", "b", "c"] {
                s.create_project(name).unwrap();
            }
        });
        c.handle(Action::Last);
        c.handle(Action::Select);
        assert_eq!(c.list().title(), "/projects/c/tasks");
        c.handle(Action::Back);

        assert_eq!(c.mode(), &Mode::ViewingProjects);
        assert_eq!(c.list().title(), PROJECTS_TITLE);
        assert_eq!(labels(&c), vec!["a", "b", "c"]);
        assert_eq!(c.list().selected_index(), Some(2));
    }

    #[test]
    fn back_is_meaningless_on_project_list() {
        let mut c = controller_with(groceries);
        let calls = c.store().calls();
        c.handle(Action::Back);
        assert_eq!(c.mode(), &Mode::ViewingProjects);
        assert_eq!(c.store().calls(), calls);
    }

    #[test]
    fn deleting_project_removes_its_tasks() {
        let mut c = controller_with(|s| {
            groceries(s);
            s.create_project("Work").unwrap();
        });
        let doomed = match c.list().selected() {
            Some(Row::Project { id, .. }) => *id,
            other => panic!("unexpected row {other:?}"),
        };
        c.handle(Action::Delete);

        assert_eq!(labels(&c), vec!["Work"]);
        assert_eq!(c.list().selected_index(), Some(0));
        assert!(c.store().inner.list_tasks(doomed).is_err());
        assert!(matches!(c.notice(), Some(Notice::Info(msg)) if msg.contains("Groceries")));
    }

    #[test]
    fn quit_only_from_viewing_modes() {
        let mut c = controller_with(groceries);
        c.handle(Action::Add);
        assert_eq!(c.handle(Action::Quit), Flow::Continue);
        assert_eq!(c.mode(), &Mode::AddingProject);
        c.handle(Action::Type('q'));
        assert_eq!(c.input().value(), "q");
        c.handle(Action::Cancel);

        assert_eq!(c.handle(Action::Quit), Flow::Quit);
        c.handle(Action::Select);
        assert_eq!(c.handle(Action::Quit), Flow::Quit);
    }

    #[test]
    fn navigation_clamps_and_keeps_mode() {
        let mut c = controller_with(groceries);
        c.handle(Action::Select);
        c.handle(Action::Move(-5));
        assert_eq!(c.list().selected_index(), Some(0));
        c.handle(Action::Move(10));
        assert_eq!(c.list().selected_index(), Some(1));
        c.handle(Action::First);
        assert_eq!(c.list().selected_index(), Some(0));
        assert!(matches!(c.mode(), Mode::ViewingTasks(_)));
    }

    #[test]
    fn input_limit_applies_while_adding() {
        let mut c = Controller::new(MemoryStore::new(), 5).unwrap();
        c.handle(Action::Add);
        type_str(&mut c, "Groceries");
        assert_eq!(c.input().value(), "Groce");
        c.handle(Action::Backspace);
        c.handle(Action::CursorHome);
        c.handle(Action::DeleteForward);
        assert_eq!(c.input().value(), "roc");
    }

    #[test]
    fn stale_task_is_reported_and_list_refreshed() {
        let mut c = controller_with(groceries);
        c.handle(Action::Select);
        let p = active(&c);
        let milk = c.store().inner.list_tasks(p.id).unwrap()[0].id;
        c.store_mut().inner.delete_task(milk).unwrap();

        c.handle(Action::Delete);
        assert!(matches!(c.notice(), Some(Notice::Error(msg)) if msg.contains("not found")));
        assert_eq!(labels(&c), vec!["Eggs"]);
        assert!(matches!(c.mode(), Mode::ViewingTasks(_)));
    }

    #[test]
    fn vanished_project_falls_back_to_project_list() {
        let mut c = controller_with(|s| {
            groceries(s);
            s.create_project("Work").unwrap();
        });
        c.handle(Action::Select);
        let p = active(&c);
        c.store_mut().inner.delete_project(p.id).unwrap();

        c.handle(Action::Select);
        assert_eq!(c.mode(), &Mode::ViewingProjects);
        assert_eq!(labels(&c), vec!["Work"]);
        assert!(matches!(c.notice(), Some(Notice::Error(_))));
    }

    #[test]
    fn stale_task_in_vanished_project_reports_the_project() {
        let mut c = controller_with(|s| {
            groceries(s);
            s.create_project("Work").unwrap();
        });
        c.handle(Action::Select);
        let p = active(&c);
        let milk = c.store().inner.list_tasks(p.id).unwrap()[0].id;
        c.store_mut().inner.delete_task(milk).unwrap();
        c.store_mut().inner.delete_project(p.id).unwrap();

        c.handle(Action::Delete);
        assert_eq!(c.mode(), &Mode::ViewingProjects);
        assert_eq!(labels(&c), vec!["Work"]);
        assert_eq!(
            c.notice(),
            Some(&Notice::Error(format!("project {} not found", p.id)))
        );
    }

    #[test]
    fn task_for_vanished_project_keeps_input() {
        let mut c = controller_with(groceries);
        c.handle(Action::Select);
        let p = active(&c);
        c.handle(Action::Add);
        type_str(&mut c, "Bread");
        c.store_mut().inner.delete_project(p.id).unwrap();

        c.handle(Action::Submit);
        assert!(matches!(c.mode(), Mode::AddingTask(_)));
        assert_eq!(c.input().value(), "Bread");
        assert!(matches!(c.notice(), Some(Notice::Error(_))));
    }

    #[test]
    fn notice_lasts_one_event_but_survives_resize() {
        let mut c = controller_with(groceries);
        c.handle(Action::Add);
        type_str(&mut c, "Groceries");
        c.handle(Action::Submit);
        assert!(c.notice().is_some());
        c.handle(Action::Resize);
        assert!(c.notice().is_some());
        c.handle(Action::Type('!'));
        assert!(c.notice().is_none());
    }

    #[test]
    fn cursor_valid_in_every_reachable_state() {
        let mut c = controller_with(groceries);
        let actions = [
            Action::Add,
            Action::Select,
            Action::Delete,
            Action::Back,
            Action::Submit,
            Action::Cancel,
            Action::Move(1),
            Action::Move(-1),
            Action::Last,
            Action::Type('x'),
            Action::Backspace,
        ];
        let mut seed: u64 = 7;
        for _ in 0..2000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let action = actions[(seed >> 33) as usize % actions.len()].clone();
            c.handle(action);
            match c.list().selected_index() {
                None => assert!(c.list().is_empty()),
                Some(i) => assert!(i < c.list().len()),
            }
        }
    }
}
