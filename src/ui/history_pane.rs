use crate::domain::HistoryParams;
use crate::ui::layout::HistoryLayout;
use crate::ui::styles::Palette;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Title of the history screen
pub const HISTORY_TITLE: &str = "Task History";
/// Label of the button that returns to the main screen
pub const CLOSE_LABEL: &str = "Close";

/// Render the history screen from the parameters it was opened with
pub fn render_history_pane(
    f: &mut Frame,
    params: &HistoryParams,
    scroll_offset: usize,
    layout: &HistoryLayout,
) {
    let palette = Palette::for_mode(params.theme);

    let title = Paragraph::new(Line::from(Span::styled(HISTORY_TITLE, palette.title_style())))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(palette.border_style()));
    f.render_widget(title, layout.title_area);

    let total = params.tasks.len();
    let items: Vec<ListItem> = if total == 0 {
        vec![ListItem::new(Line::styled("No completed tasks yet", palette.hint_style()))]
    } else {
        params
            .tasks
            .iter()
            .skip(scroll_offset)
            .map(|task| {
                ListItem::new(Line::from(vec![
                    Span::styled("✓ ", palette.text_style()),
                    Span::styled(task.text.clone(), palette.text_style()),
                ]))
            })
            .collect()
    };

    let count_title = if scroll_offset > 0 {
        format!(" Completed ({}) [scrolled +{}] ", total, scroll_offset)
    } else {
        format!(" Completed ({}) ", total)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::NONE)
            .title(Span::styled(count_title, palette.hint_style())),
    );
    f.render_widget(list, layout.list_area);

    let close = Paragraph::new(Line::from(Span::styled(
        format!("[Esc] {}", CLOSE_LABEL),
        palette.close_style(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(close, layout.close_area);
}
