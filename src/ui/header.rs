use crate::app::AppState;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// App title shown in the header
pub const APP_TITLE: &str = "Daily Doer!";

/// Render the header: title and date on the left, history button and theme switch on the right
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let palette = app.palette();
    let date = Local::now().format("%a %b %d");

    let left = Line::from(vec![
        Span::styled(format!(" {} ", APP_TITLE), palette.title_style()),
        Span::styled(format!(" {}", date), palette.hint_style()),
    ]);

    let right = Line::from(vec![
        Span::styled("[h] History", palette.button_style()),
        Span::raw("   "),
        Span::styled(
            format!("[t] {} {} ", app.theme.glyph(), app.theme.label()),
            palette.button_style(),
        ),
    ])
    .alignment(Alignment::Right);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right.width() as u16)])
        .split(inner);

    f.render_widget(Paragraph::new(left), chunks[0]);
    f.render_widget(Paragraph::new(right), chunks[1]);
}
