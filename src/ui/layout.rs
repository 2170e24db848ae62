use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout
pub struct MainLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub input_area: Rect,
    pub keybindings_area: Option<Rect>,
}

/// History screen layout
pub struct HistoryLayout {
    pub title_area: Rect,
    pub list_area: Rect,
    pub close_area: Rect,
    pub keybindings_area: Option<Rect>,
}

/// Create the main layout
/// - Header: title, history button, theme switch (3 rows)
/// - Task list (fills)
/// - Input bar (3 rows)
/// - Keybindings bar (1 row, optional)
pub fn create_main_layout(area: Rect, show_hints: bool) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                               // Header
            Constraint::Min(0),                                  // Task list
            Constraint::Length(3),                               // Input bar
            Constraint::Length(if show_hints { 1 } else { 0 }), // Keybindings
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        list_area: chunks[1],
        input_area: chunks[2],
        keybindings_area: show_hints.then_some(chunks[3]),
    }
}

/// Create the history layout: a centred column with title, entries, close label
pub fn create_history_layout(area: Rect, show_hints: bool) -> HistoryLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(if show_hints { 1 } else { 0 }),
        ])
        .split(area);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(rows[0]);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Entries
            Constraint::Length(2), // Close
        ])
        .split(column[1]);

    HistoryLayout {
        title_area: sections[0],
        list_area: sections[1],
        close_area: sections[2],
        keybindings_area: show_hints.then_some(rows[1]),
    }
}
