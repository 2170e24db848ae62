use crate::app::AppState;
use crate::domain::{Focus, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.nav.current() {
        Screen::History(_) => handle_history_screen(app, key),
        Screen::Main => match app.focus {
            Focus::Normal => handle_normal_mode(app, key),
            Focus::Input => handle_input_mode(app, key),
        },
    }
}

/// Handle keys on the main screen while navigating the list
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            false
        }

        // Focus the input field
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') | KeyCode::Enter => {
            app.focus_input();
            false
        }

        // Edit selected task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.edit_selected();
            false
        }

        // Complete selected task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('d') | KeyCode::Delete => {
            app.complete_selected();
            false
        }

        // Open history
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.open_history();
            false
        }

        // Toggle light/dark
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
            false
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,

        _ => false,
    }
}

/// Handle keys while typing into the input field
fn handle_input_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            app.submit_input();
        }
        KeyCode::Esc => app.unfocus_input(),
        KeyCode::Backspace => app.input_backspace(),
        // Chords are not text
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input_add_char(c)
        }
        _ => {}
    }
    false
}

/// Handle keys on the history screen
fn handle_history_screen(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_history_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_history_down(),
        KeyCode::Esc
        | KeyCode::Backspace
        | KeyCode::Char('c')
        | KeyCode::Char('C')
        | KeyCode::Char('q')
        | KeyCode::Char('Q') => app.close_history(),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::domain::ThemeMode;
    use pretty_assertions::assert_eq;

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn active(app: &AppState) -> Vec<String> {
        app.tasks.tasks().iter().map(|t| t.text.clone()).collect()
    }

    fn new_app() -> AppState {
        AppState::new(ThemeMode::Light, &Settings::default())
    }

    #[test]
    fn test_add_tasks_by_typing() {
        let mut app = new_app();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.focus, Focus::Input);
        type_text(&mut app, "Call mom");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Pay bills");
        press(&mut app, KeyCode::Enter);

        assert_eq!(active(&app), vec!["Call mom", "Pay bills"]);
        assert_eq!(app.focus, Focus::Normal);
    }

    #[test]
    fn test_typed_letters_do_not_trigger_actions() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('a'));
        // 'h', 't', 'q' are plain text while the input has focus
        type_text(&mut app, "hqt");
        assert!(app.nav.is_main());
        assert_eq!(app.theme, ThemeMode::Light);
        assert_eq!(app.tasks.input(), "hqt");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.tasks.input(), "hq");
    }

    #[test]
    fn test_modifier_chords_are_not_typed() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Buy");

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.tasks.input(), "Buy");

        // Shifted letters are still text
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert_eq!(app.tasks.input(), "BuyS");
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut app = new_app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(app.tasks.is_empty());
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_edit_flow() {
        let mut app = new_app();
        for text in ["Call mom", "Pay bills"] {
            press(&mut app, KeyCode::Char('a'));
            type_text(&mut app, text);
            press(&mut app, KeyCode::Enter);
        }

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.tasks.input(), "Call mom");
        for _ in 0.."mom".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "dad");
        press(&mut app, KeyCode::Enter);

        assert_eq!(active(&app), vec!["Call dad", "Pay bills"]);
        assert!(app.tasks.history().is_empty());
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "!!!");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.focus, Focus::Normal);
        assert!(!app.tasks.is_editing());
        assert_eq!(active(&app), vec!["Buy milk"]);
    }

    #[test]
    fn test_complete_and_view_history() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.tasks.is_empty());

        press(&mut app, KeyCode::Char('h'));
        let params = app.nav.history_params().unwrap();
        assert_eq!(params.tasks[0].text, "Buy milk");

        // Actions from the main screen are inert on history
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, ThemeMode::Light);

        press(&mut app, KeyCode::Esc);
        assert!(app.nav.is_main());
    }

    #[test]
    fn test_history_quit_key_closes_instead_of_quitting() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('h'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(app.nav.is_main());
    }

    #[test]
    fn test_toggle_theme_key() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, ThemeMode::Dark);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, ThemeMode::Light);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));

        press(&mut app, KeyCode::Char('a'));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_complete_on_empty_list_is_noop() {
        let mut app = new_app();
        assert!(!press(&mut app, KeyCode::Char('x')));
        assert!(!press(&mut app, KeyCode::Char('e')));
        assert!(app.tasks.history().is_empty());
        assert_eq!(app.focus, Focus::Normal);
    }
}
