//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] operations.  Category and page keys
//! report back to the main loop whether the filters changed, so it knows to
//! dispatch a new fetch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::category::Category;

/// Process a single key event, updating app state accordingly.
///
/// Returns `true` when the change requires a re-fetch (category switched,
/// page turned, or an explicit refresh).  Only reacts to key-press events so
/// that each physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit = true;
            false
        }

        // -- category selector ----------------------------------------------
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_category(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.prev_category(),
        KeyCode::Char(c @ '1'..='7') => {
            // Number keys jump straight to a tab; '1' is the first.
            let index = (c as usize) - ('1' as usize);
            match Category::from_index(index) {
                Some(cat) => app.set_category(cat),
                None => false,
            }
        }

        // -- pager -----------------------------------------------------------
        KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('p') | KeyCode::PageUp => app.prev_page(),

        // -- refresh ---------------------------------------------------------
        KeyCode::Char('r') => true,

        // -- list scrolling --------------------------------------------------
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous();
            false
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.select_first();
            false
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.select_last();
            false
        }

        _ => false,
    }
}
