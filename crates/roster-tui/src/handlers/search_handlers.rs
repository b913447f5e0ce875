use roster_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    Insert(char),
    Backspace,
    Delete,
    DeleteWord,
    Left,
    Right,
    Home,
    End,
}

/// Apply an edit to the search box. Returns whether the text changed.
pub fn apply_search_edit(input: &mut InputState, edit: SearchEdit) -> bool {
    match edit {
        SearchEdit::Insert(c) => {
            input.insert_char(c);
            true
        }
        SearchEdit::Backspace => input.backspace(),
        SearchEdit::Delete => input.delete(),
        SearchEdit::DeleteWord => input.delete_word(),
        SearchEdit::Left => {
            input.move_left();
            false
        }
        SearchEdit::Right => {
            input.move_right();
            false
        }
        SearchEdit::Home => {
            input.move_home();
            false
        }
        SearchEdit::End => {
            input.move_end();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_do_not_change_text() {
        let mut input = InputState::with_text("Jerry");
        assert!(!apply_search_edit(&mut input, SearchEdit::Home));
        assert!(!apply_search_edit(&mut input, SearchEdit::Backspace));
        assert!(apply_search_edit(&mut input, SearchEdit::Delete));
        assert_eq!(input.as_str(), "erry");
    }
}
