use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Glyph for the edit action on a row
pub const EDIT_GLYPH: &str = "✎";
/// Glyph for the complete action on a row
pub const COMPLETE_GLYPH: &str = "x";
const MARKER_GLYPH: &str = "■";

/// Render the active task list
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let palette = app.palette();
    let editing = app.tasks.editing_position();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(
            format!(" Tasks ({}) ", app.tasks.len()),
            palette.title_style(),
        ));

    if app.tasks.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "  Nothing to do. Press a to add a task.",
            palette.hint_style(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, editing == Some(idx), &palette);
            let style = if idx == app.selected_index {
                palette.selected_row_style()
            } else {
                palette.row_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);

    // Stateful render so the selected row scrolls into view
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single row
/// Format: ■ Buy milk   ✎ x
fn create_task_line(task: &Task, is_editing: bool, palette: &Palette) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!(" {} ", MARKER_GLYPH), palette.marker_style()),
        Span::raw(task.text.clone()),
    ];

    if is_editing {
        spans.push(Span::styled("  (editing)", palette.glyph_style()));
    }

    spans.push(Span::raw("   "));
    spans.push(Span::styled(EDIT_GLYPH, palette.glyph_style()));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(COMPLETE_GLYPH, palette.glyph_style()));

    Line::from(spans)
}
