use super::enums::AddOutcome;
use super::task::{is_valid_text, Task, TaskId};

/// Owns the active tasks, the completed history, and the add/edit form state.
///
/// Every list mutation goes through this type. Positions passed in come from
/// the rows currently on screen, so an out-of-range position is a caller bug:
/// it trips a debug assertion and is ignored in release builds.
#[derive(Debug, Clone, Default)]
pub struct TaskListController {
    tasks: Vec<Task>,
    history: Vec<Task>,
    editing: Option<TaskId>,
    input: String,
}

impl TaskListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Completed tasks in completion order
    pub fn history(&self) -> &[Task] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Pending text in the input field
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Current position of the task under edit
    pub fn editing_position(&self) -> Option<usize> {
        let id = self.editing?;
        self.position_of(id)
    }

    fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Replace the pending input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// Submit the pending input.
    ///
    /// Appends a new task, or replaces the task under edit in place. Empty or
    /// whitespace-only input is ignored and leaves the input untouched.
    pub fn add_or_update_task(&mut self) -> AddOutcome {
        if !is_valid_text(&self.input) {
            tracing::trace!("ignoring empty task input");
            return AddOutcome::Rejected;
        }

        let text = std::mem::take(&mut self.input);

        if let Some(id) = self.editing.take() {
            if let Some(pos) = self.position_of(id) {
                tracing::debug!(position = pos, %id, "task updated");
                self.tasks[pos].text = text;
                return AddOutcome::Updated;
            }
            // Edit target vanished without going through complete_task; treat as a fresh add
            tracing::warn!(%id, "edit target missing, appending instead");
        }

        let task = Task::new(text);
        tracing::debug!(position = self.tasks.len(), id = %task.id, "task added");
        self.tasks.push(task);
        AddOutcome::Added
    }

    /// Load the task at `position` into the input field for editing
    pub fn start_edit(&mut self, position: usize) {
        if !self.check_position(position, "start_edit") {
            return;
        }
        let task = &self.tasks[position];
        self.editing = Some(task.id);
        self.input = task.text.clone();
        tracing::debug!(position, id = %task.id, "editing task");
    }

    /// Drop any in-progress edit and clear the input
    pub fn cancel_edit(&mut self) {
        if self.editing.take().is_some() {
            self.input.clear();
        }
    }

    /// Move the task at `position` to the end of the history.
    ///
    /// Completing the task that is being edited cancels that edit.
    pub fn complete_task(&mut self, position: usize) -> Option<Task> {
        if !self.check_position(position, "complete_task") {
            return None;
        }
        let task = self.tasks.remove(position);

        if self.editing == Some(task.id) {
            self.editing = None;
            self.input.clear();
        }

        tracing::debug!(position, id = %task.id, "task completed");
        self.history.push(task.clone());
        Some(task)
    }

    fn check_position(&self, position: usize, op: &str) -> bool {
        let valid = position < self.tasks.len();
        debug_assert!(
            valid,
            "{op}: position {position} out of range (len {})",
            self.tasks.len()
        );
        if !valid {
            tracing::warn!(op, position, len = self.tasks.len(), "position out of range");
        }
        valid
    }
}
