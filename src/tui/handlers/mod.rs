use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Pane};

/// Handle input and return true if the app should quit
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys: the input pane takes every printable character, so
    // shortcuts use Esc, Tab, function keys and Ctrl chords
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('s') if ctrl => {
            app.save_output();
            return false;
        }
        KeyCode::Char('l') if ctrl => {
            app.clear_input();
            return false;
        }
        KeyCode::Tab => {
            app.cycle_pane_forward();
            return false;
        }
        KeyCode::BackTab => {
            app.cycle_pane_backward();
            return false;
        }
        KeyCode::F(2) => {
            app.toggle_codepoints();
            return false;
        }
        KeyCode::F(3) => {
            app.toggle_graphemes();
            return false;
        }
        _ => {}
    }

    if !ctrl {
        handle_pane_input(app, key.code);
    }
    false
}

fn handle_pane_input(app: &mut App, key: KeyCode) {
    match app.focused_pane {
        Pane::Input => handle_text_input(app, key),
        Pane::Keyboard => handle_keyboard_input(app, key),
        Pane::Output => handle_output_input(app, key),
    }
}

fn handle_text_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.type_char(c),
        KeyCode::Enter => app.type_char('\n'),
        KeyCode::Backspace => app.delete_char(),
        _ => {}
    }
}

fn handle_keyboard_input(app: &mut App, key: KeyCode) {
    // Arrow keys (or hjkl) move over the on-screen keys
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(0, -1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(0, 1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1, 0),
        KeyCode::Enter | KeyCode::Char(' ') => app.press_selected(),
        _ => {}
    }
}

fn handle_output_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_output(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_output(1),
        _ => {}
    }
}
