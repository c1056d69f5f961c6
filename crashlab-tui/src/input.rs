//! Keyboard input dispatch — overlays → global keys → input field.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.overlay = Overlay::None;
            }
            _ => {}
        }
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // 2. Global keys.
    match key.code {
        KeyCode::Esc => app.running = false,
        KeyCode::Char('c') if ctrl => app.running = false,
        KeyCode::Char('r') if ctrl => app.reset_data(),
        KeyCode::F(1) => app.toggle_help(),
        KeyCode::Char('?') if app.input.is_empty() => app.toggle_help(),
        KeyCode::Enter => app.submit_input(),
        KeyCode::Up => app.scroll_history_up(),
        KeyCode::Down => app.scroll_history_down(),

        // 3. Input field.
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) if !ctrl => app.input.push(c),
        _ => {}
    }
}
