//! Two-screen navigation: the main task list and the history view.
//!
//! ```text
//!     Main ──open_history(params)──► History
//!       ▲                               │
//!       └────────────close()────────────┘
//! ```
//!
//! No other transitions exist. History carries its own copy of the
//! completed tasks and the theme taken when it was opened.

use super::enums::ThemeMode;
use super::task::Task;

/// Parameters handed to the history screen when it is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryParams {
    pub tasks: Vec<Task>,
    pub theme: ThemeMode,
}

/// The screen currently on display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Main,
    History(HistoryParams),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Main => "Main",
            Screen::History(_) => "History",
        }
    }
}

/// Owns which screen is visible
#[derive(Debug, Clone)]
pub struct NavigationHost {
    current: Screen,
}

impl Default for NavigationHost {
    fn default() -> Self {
        Self {
            current: Screen::Main,
        }
    }
}

impl NavigationHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    pub fn is_main(&self) -> bool {
        matches!(self.current, Screen::Main)
    }

    pub fn history_params(&self) -> Option<&HistoryParams> {
        match &self.current {
            Screen::History(params) => Some(params),
            Screen::Main => None,
        }
    }

    /// Move from Main to History. Returns false if already on History.
    pub fn open_history(&mut self, params: HistoryParams) -> bool {
        if !self.is_main() {
            return false;
        }
        let from = self.current.name();
        self.current = Screen::History(params);
        tracing::debug!(from, to = self.current.name(), "navigate");
        true
    }

    /// Move from History back to Main. Returns false if already on Main.
    pub fn close(&mut self) -> bool {
        if self.is_main() {
            return false;
        }
        let from = self.current.name();
        self.current = Screen::Main;
        tracing::debug!(from, to = self.current.name(), "navigate");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(items: &[&str]) -> HistoryParams {
        HistoryParams {
            tasks: items.iter().map(|s| Task::new(*s)).collect(),
            theme: ThemeMode::Dark,
        }
    }

    #[test]
    fn test_starts_on_main() {
        let nav = NavigationHost::new();
        assert!(nav.is_main());
        assert_eq!(nav.current().name(), "Main");
        assert!(nav.history_params().is_none());
    }

    #[test]
    fn test_open_then_close() {
        let mut nav = NavigationHost::new();

        assert!(nav.open_history(params(&["A"])));
        assert_eq!(nav.current().name(), "History");
        let p = nav.history_params().unwrap();
        assert_eq!(p.tasks.len(), 1);
        assert_eq!(p.theme, ThemeMode::Dark);

        assert!(nav.close());
        assert!(nav.is_main());
        assert!(nav.history_params().is_none());
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        let mut nav = NavigationHost::new();
        assert!(!nav.close());
        assert!(nav.is_main());

        nav.open_history(params(&["A"]));
        assert!(!nav.open_history(params(&["B", "C"])));
        // Original params kept
        assert_eq!(nav.history_params().unwrap().tasks[0].text, "A");
    }
}
