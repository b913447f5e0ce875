//! Key resolution. Maps a key press to what it means in the current screen
//! and focus; `App` applies the result.

pub mod search_handlers;

use crate::app::Focus;
use crate::events::{is_ctrl, should_force_quit};
use crate::keybindings::KeybindingAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_domain::ViewState;

pub use search_handlers::{apply_search_edit, SearchEdit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Action(KeybindingAction),
    EditSearch(SearchEdit),
    Ignored,
}

pub fn resolve_key(view: ViewState, focus: Focus, key: &KeyEvent) -> KeyOutcome {
    use KeybindingAction::*;

    if should_force_quit(key) {
        return KeyOutcome::Action(Quit);
    }

    match view {
        ViewState::InitialLoading => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Action(Quit),
            _ => KeyOutcome::Ignored,
        },
        ViewState::ErrorEmpty => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => KeyOutcome::Action(Retry),
            KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Action(Quit),
            _ => KeyOutcome::Ignored,
        },
        ViewState::Loaded => {
            if is_ctrl(key, 'r') {
                return KeyOutcome::Action(Reload);
            }
            if key.code == KeyCode::F(5) {
                return KeyOutcome::Action(Refresh);
            }
            match focus {
                Focus::Search => resolve_search_key(key),
                Focus::Grid => resolve_grid_key(key),
            }
        }
    }
}

fn resolve_search_key(key: &KeyEvent) -> KeyOutcome {
    if is_ctrl(key, 'u') {
        return KeyOutcome::Action(KeybindingAction::ClearSearch);
    }
    if is_ctrl(key, 'w') {
        return KeyOutcome::EditSearch(SearchEdit::DeleteWord);
    }
    match key.code {
        KeyCode::Tab | KeyCode::Enter | KeyCode::Down | KeyCode::Esc => {
            KeyOutcome::Action(KeybindingAction::FocusGrid)
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyOutcome::EditSearch(SearchEdit::Insert(c))
        }
        KeyCode::Backspace => KeyOutcome::EditSearch(SearchEdit::Backspace),
        KeyCode::Delete => KeyOutcome::EditSearch(SearchEdit::Delete),
        KeyCode::Left => KeyOutcome::EditSearch(SearchEdit::Left),
        KeyCode::Right => KeyOutcome::EditSearch(SearchEdit::Right),
        KeyCode::Home => KeyOutcome::EditSearch(SearchEdit::Home),
        KeyCode::End => KeyOutcome::EditSearch(SearchEdit::End),
        _ => KeyOutcome::Ignored,
    }
}

fn resolve_grid_key(key: &KeyEvent) -> KeyOutcome {
    use KeybindingAction::*;

    let action = match key.code {
        KeyCode::Char('j') | KeyCode::Down => NavigateDown,
        KeyCode::Char('k') | KeyCode::Up => NavigateUp,
        KeyCode::Char('h') | KeyCode::Left => NavigateLeft,
        KeyCode::Char('l') | KeyCode::Right => NavigateRight,
        KeyCode::PageDown => PageDown,
        KeyCode::PageUp => PageUp,
        KeyCode::Char('g') | KeyCode::Home => JumpToTop,
        KeyCode::Char('G') | KeyCode::End => JumpToBottom,
        KeyCode::Char('/') | KeyCode::Tab => FocusSearch,
        KeyCode::Char('r') => Reload,
        KeyCode::Char('R') => Refresh,
        KeyCode::Char('q') | KeyCode::Esc => Quit,
        _ => return KeyOutcome::Ignored,
    };
    KeyOutcome::Action(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_q_in_search_box_edits_text() {
        assert_eq!(
            resolve_key(ViewState::Loaded, Focus::Search, &key(KeyCode::Char('q'))),
            KeyOutcome::EditSearch(SearchEdit::Insert('q'))
        );
        assert_eq!(
            resolve_key(ViewState::Loaded, Focus::Grid, &key(KeyCode::Char('q'))),
            KeyOutcome::Action(KeybindingAction::Quit)
        );
    }

    #[test]
    fn test_reload_and_refresh_work_from_both_focuses() {
        for focus in [Focus::Search, Focus::Grid] {
            assert_eq!(
                resolve_key(ViewState::Loaded, focus, &ctrl('r')),
                KeyOutcome::Action(KeybindingAction::Reload)
            );
            assert_eq!(
                resolve_key(ViewState::Loaded, focus, &key(KeyCode::F(5))),
                KeyOutcome::Action(KeybindingAction::Refresh)
            );
        }
    }

    #[test]
    fn test_error_screen_retry() {
        assert_eq!(
            resolve_key(ViewState::ErrorEmpty, Focus::Search, &key(KeyCode::Enter)),
            KeyOutcome::Action(KeybindingAction::Retry)
        );
        assert_eq!(
            resolve_key(ViewState::ErrorEmpty, Focus::Search, &key(KeyCode::Char('x'))),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        for view in [
            ViewState::InitialLoading,
            ViewState::ErrorEmpty,
            ViewState::Loaded,
        ] {
            assert_eq!(
                resolve_key(view, Focus::Search, &ctrl('c')),
                KeyOutcome::Action(KeybindingAction::Quit)
            );
        }
    }
}
