pub mod header;
pub mod history_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::Screen;
use header::render_header;
use history_pane::render_history_pane;
use input_form::render_input_form;
use keybindings::{hints_for, render_keybindings};
use layout::{create_history_layout, create_main_layout};
use list_pane::render_list_pane;
use ratatui::{widgets::Block, Frame};

/// Main render function - draws the screen on top of the navigation stack
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = app.palette();

    // Paint the themed background first
    f.render_widget(Block::default().style(palette.base_style()), size);

    let hints = hints_for(app.nav.current(), app.focus, app.tasks.is_editing());

    match app.nav.current() {
        Screen::Main => {
            let layout = create_main_layout(size, app.show_hints);
            render_header(f, app, layout.header_area);
            render_list_pane(f, app, layout.list_area);
            render_input_form(f, app, layout.input_area);
            if let Some(area) = layout.keybindings_area {
                render_keybindings(f, &hints, palette.hint_style(), area);
            }
        }
        Screen::History(params) => {
            let layout = create_history_layout(size, app.show_hints);
            render_history_pane(f, params, app.history_scroll_offset, &layout);
            if let Some(area) = layout.keybindings_area {
                render_keybindings(f, &hints, palette.hint_style(), area);
            }
        }
    }
}
