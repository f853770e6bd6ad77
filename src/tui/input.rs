// Keyboard input handling.
//
// Translates crossterm key events into local ViewState mutations (tab
// switching, sorting, filtering, scrolling) or a UserCommand for the
// event loop (quit).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::SortKey;

use super::{TabId, UserCommand, ViewState};

/// Table columns addressable with the digit keys, in header order.
pub const SORT_COLUMNS: &[SortKey] = &[
    SortKey::Rank,
    SortKey::Name,
    SortKey::Donations,
    SortKey::Vs,
    SortKey::Power,
    SortKey::ScoreFinal,
];

/// Rows scrolled per PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the event loop must act (quit);
/// `None` when the key was handled locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits regardless of mode (escape hatch).
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if state.confirm_quit {
        return handle_confirm_quit(key_event, state);
    }

    if state.filter_mode {
        return handle_filter_mode(key_event, state);
    }

    match key_event.code {
        // View switching
        KeyCode::Tab => {
            state.active_tab = state.active_tab.toggled();
            None
        }

        // Sort column selection (leaderboard tab only). Selecting the
        // active column flips the direction; a new column resets to
        // descending.
        KeyCode::Char(c @ '1'..='6') if state.active_tab == TabId::Leaderboard => {
            let index = c as usize - '1' as usize;
            state.query.set_sort(SORT_COLUMNS[index]);
            state.table_scroll = 0;
            None
        }

        // Table scrolling
        KeyCode::Up | KeyCode::Char('k') => {
            state.table_scroll = state.table_scroll.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.table_scroll = state.table_scroll.saturating_add(1);
            None
        }
        KeyCode::PageUp => {
            state.table_scroll = state.table_scroll.saturating_sub(PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            state.table_scroll = state.table_scroll.saturating_add(PAGE_SIZE);
            None
        }
        KeyCode::Home => {
            state.table_scroll = 0;
            None
        }

        // Filter entry: only meaningful where the table is visible.
        KeyCode::Char('/') => {
            if state.active_tab == TabId::Leaderboard {
                state.filter_mode = true;
            }
            None
        }

        // Clear the active filter.
        KeyCode::Esc => {
            state.query.set_filter("");
            state.table_scroll = 0;
            None
        }

        // Quit: ask for confirmation first.
        KeyCode::Char('q') => {
            state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Keys while the quit prompt is showing: y/q confirm, n/Esc cancel,
/// everything else is blocked.
fn handle_confirm_quit(key_event: KeyEvent, state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Keys while editing the search term. The filter applies live as the
/// term changes; Enter keeps it, Esc discards it.
fn handle_filter_mode(key_event: KeyEvent, state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Enter => {
            state.filter_mode = false;
        }
        KeyCode::Esc => {
            state.filter_mode = false;
            state.query.set_filter("");
        }
        KeyCode::Backspace => {
            state.query.search_term.pop();
            state.table_scroll = 0;
        }
        KeyCode::Char(c) => {
            state.query.search_term.push(c);
            state.table_scroll = 0;
        }
        _ => {}
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
