//! Key binding dispatch for the menu screen.
//!
//! q/Esc/Ctrl+C quit. Left/Right move the category selection.
//! Up/Down scroll the item list, PageUp/PageDown page it, Home/End
//! jump to the ends. Everything else is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Left => {
            app.select_prev();
        }
        KeyCode::Right => {
            app.select_next();
        }
        KeyCode::Up => {
            for _ in 0..3 {
                app.scroll_items_up();
            }
        }
        KeyCode::Down => {
            for _ in 0..3 {
                app.scroll_items_down();
            }
        }
        KeyCode::PageUp => {
            app.page_up();
        }
        KeyCode::PageDown => {
            app.page_down();
        }
        KeyCode::Home => {
            app.scroll_to_top();
        }
        KeyCode::End => {
            app.scroll_to_bottom();
        }
        _ => {}
    }
}
