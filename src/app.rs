use crate::config::Settings;
use crate::domain::{AddOutcome, Focus, HistoryParams, NavigationHost, Screen, Task, TaskListController, ThemeMode};
use crate::ui::styles::Palette;

/// Main application state
pub struct AppState {
    pub tasks: TaskListController,
    pub nav: NavigationHost,
    pub theme: ThemeMode,
    pub focus: Focus,
    pub selected_index: usize,
    pub history_scroll_offset: usize,
    pub show_hints: bool,
}

impl AppState {
    pub fn new(theme: ThemeMode, settings: &Settings) -> Self {
        Self {
            tasks: TaskListController::new(),
            nav: NavigationHost::new(),
            theme,
            focus: Focus::Normal,
            selected_index: 0,
            history_scroll_offset: 0,
            show_hints: settings.show_hints,
        }
    }

    /// Currently selected task, if the list is not empty
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.tasks().get(self.selected_index)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after it shrinks
    fn clamp_selection(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Start typing into the input field
    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    /// Leave the input field. An in-progress edit is abandoned.
    pub fn unfocus_input(&mut self) {
        self.tasks.cancel_edit();
        self.focus = Focus::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.tasks.push_input(c);
    }

    pub fn input_backspace(&mut self) {
        self.tasks.pop_input();
    }

    /// Submit the input field (add or confirm edit)
    pub fn submit_input(&mut self) -> AddOutcome {
        let outcome = self.tasks.add_or_update_task();
        if outcome == AddOutcome::Added {
            // Follow the new task to the bottom of the list
            self.selected_index = self.tasks.len() - 1;
        }
        if outcome.is_applied() {
            self.focus = Focus::Normal;
        }
        outcome
    }

    /// Load the selected task into the input field
    pub fn edit_selected(&mut self) {
        if self.selected_task().is_some() {
            self.tasks.start_edit(self.selected_index);
            self.focus = Focus::Input;
        }
    }

    /// Complete the selected task and move it to history.
    ///
    /// Completion never leaves an edit pending, so focus always returns to
    /// the list.
    pub fn complete_selected(&mut self) -> Option<Task> {
        if self.selected_index >= self.tasks.len() {
            return None;
        }
        let done = self.tasks.complete_task(self.selected_index);
        self.focus = Focus::Normal;
        self.clamp_selection();
        done
    }

    /// Flip the light/dark switch
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.label(), "theme toggled");
    }

    /// Show the history screen with a snapshot of completed tasks
    pub fn open_history(&mut self) {
        let params = HistoryParams {
            tasks: self.tasks.history().to_vec(),
            theme: self.theme,
        };
        if self.nav.open_history(params) {
            self.history_scroll_offset = 0;
        }
    }

    /// Return to the main screen
    pub fn close_history(&mut self) {
        self.nav.close();
    }

    pub fn scroll_history_up(&mut self) {
        if self.history_scroll_offset > 0 {
            self.history_scroll_offset -= 1;
        }
    }

    pub fn scroll_history_down(&mut self) {
        let total = self.nav.history_params().map_or(0, |p| p.tasks.len());
        if self.history_scroll_offset + 1 < total {
            self.history_scroll_offset += 1;
        }
    }

    /// Theme for the screen on display. History keeps the theme it was opened with.
    pub fn active_theme(&self) -> ThemeMode {
        match self.nav.current() {
            Screen::Main => self.theme,
            Screen::History(params) => params.theme,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.active_theme())
    }
}
