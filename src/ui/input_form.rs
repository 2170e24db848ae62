use crate::app::AppState;
use crate::domain::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown in the empty input field
pub const PLACEHOLDER: &str = "Write a task";
/// Submit button label when adding
pub const ADD_GLYPH: &str = "+";
/// Submit button label when confirming an edit
pub const CONFIRM_GLYPH: &str = "✔";

/// Submit button label for the current mode
pub fn submit_glyph(is_editing: bool) -> &'static str {
    if is_editing {
        CONFIRM_GLYPH
    } else {
        ADD_GLYPH
    }
}

/// Render the input bar: text field on the left, submit button on the right
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let palette = app.palette();
    let focused = app.focus == Focus::Input;
    let input = app.tasks.input();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(area);

    let field_line = if input.is_empty() && !focused {
        Line::from(Span::styled(PLACEHOLDER, palette.placeholder_style()))
    } else {
        Line::from(vec![
            Span::styled(input.to_string(), palette.input_style()),
            if focused {
                Span::styled("█", palette.input_style()) // Cursor
            } else {
                Span::raw("")
            },
        ])
    };

    let field_title = if app.tasks.is_editing() {
        " Edit task "
    } else {
        " New task "
    };

    let field = Paragraph::new(field_line).style(palette.input_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.input_border_style(focused))
            .title(Span::styled(field_title, palette.input_border_style(focused))),
    );
    f.render_widget(field, chunks[0]);

    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", submit_glyph(app.tasks.is_editing())),
        palette.input_style(),
    )))
    .style(palette.input_style())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.input_border_style(focused)),
    );
    f.render_widget(button, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_glyph_per_mode() {
        assert_eq!(submit_glyph(false), "+");
        assert_eq!(submit_glyph(true), "✔");
        assert_ne!(submit_glyph(false), submit_glyph(true));
    }
}
