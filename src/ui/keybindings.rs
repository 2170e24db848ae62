use crate::domain::{Focus, Screen};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints for the current screen and focus
pub fn hints_for(screen: &Screen, focus: Focus, is_editing: bool) -> Vec<&'static str> {
    match screen {
        Screen::History(_) => vec![" ↑/↓ scroll   ", "Esc close"],
        Screen::Main => match focus {
            Focus::Input if is_editing => vec![" Enter save   ", "Esc cancel edit"],
            Focus::Input => vec![" Enter add   ", "Esc leave input"],
            Focus::Normal => vec![
                " ↑/↓ select   ",
                "a add   ",
                "e edit   ",
                "x complete   ",
                "h history   ",
                "t theme   ",
                "q quit",
            ],
        },
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, hints: &[&'static str], style: Style, area: Rect) {
    let line = Line::from(hints.iter().map(|h| Span::raw(*h)).collect::<Vec<_>>());
    let paragraph = Paragraph::new(line).style(style);
    f.render_widget(paragraph, area);
}
