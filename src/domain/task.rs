use std::fmt;
use uuid::Uuid;

/// Stable identity for a task, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique ID, never shown to the user
    pub id: TaskId,
    /// The text the user typed
    pub text: String,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
        }
    }
}

/// Text accepted as a task: anything with at least one non-whitespace char
pub fn is_valid_text(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new_assigns_distinct_ids() {
        let a = Task::new("Buy milk");
        let b = Task::new("Buy milk");
        assert_eq!(a.text, b.text);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_is_valid_text() {
        assert!(is_valid_text("Call mom"));
        assert!(is_valid_text("  padded  "));
        assert!(!is_valid_text(""));
        assert!(!is_valid_text("   \t "));
    }
}
