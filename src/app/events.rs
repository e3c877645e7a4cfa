use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::actions::Action;
use crate::state::{Focus, State};

/// Map a terminal event to an action. `None` means quit.
pub fn handle_event(event: &Event, state: &State) -> Option<Action> {
    match event {
        Event::Key(key) => {
            // Windows terminals report releases too
            if key.kind == KeyEventKind::Release {
                return Some(Action::None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            // Global Ctrl shortcuts (always handled first)
            if ctrl {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('c') => return None,
                    KeyCode::Char('d') => return Some(Action::ToggleDetail),
                    _ => return Some(Action::None),
                }
            }

            match key.code {
                KeyCode::F(2) => return Some(Action::ToggleDetail),
                KeyCode::Tab => return Some(Action::FocusNext),
                KeyCode::BackTab => return Some(Action::FocusPrev),
                _ => {}
            }

            let action = match state.focus {
                Focus::Sidebar => handle_sidebar_key(key),
                Focus::ModelField => handle_field_key(key),
                Focus::Regenerate => handle_button_key(key),
            };
            Some(action)
        }
        // Bracketed paste goes into the field verbatim
        Event::Paste(text) if state.focus == Focus::ModelField => Some(Action::InsertText(text.clone())),
        Event::Resize(_, _) => Some(Action::Refresh),
        _ => Some(Action::None),
    }
}

fn handle_sidebar_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevPage,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNextPage,
        KeyCode::Char(c @ '1'..='4') => Action::SelectPage(c.to_digit(10).map(|d| d as u8)),
        KeyCode::Esc => Action::SelectPage(None),
        KeyCode::Char('[') => Action::ShrinkMainPane,
        KeyCode::Char(']') => Action::GrowMainPane,
        _ => Action::None,
    }
}

fn handle_field_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char(c) => Action::InsertText(c.to_string()),
        KeyCode::Backspace => Action::DeleteBackward,
        KeyCode::Delete => Action::DeleteForward,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        _ => Action::None,
    }
}

fn handle_button_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Action::Regenerate,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn ctrl_q_quits() {
        assert_eq!(handle_event(&ctrl('q'), &State::default()), None);
    }

    #[test]
    fn toolbar_shortcuts_toggle_detail() {
        let state = State::default();
        assert_eq!(handle_event(&ctrl('d'), &state), Some(Action::ToggleDetail));
        assert_eq!(handle_event(&key(KeyCode::F(2)), &state), Some(Action::ToggleDetail));
    }

    #[test]
    fn digits_select_rows_in_sidebar() {
        let state = State::default();
        for (c, v) in [('1', 1), ('2', 2), ('3', 3), ('4', 4)] {
            assert_eq!(handle_event(&key(KeyCode::Char(c)), &state), Some(Action::SelectPage(Some(v))));
        }
        assert_eq!(handle_event(&key(KeyCode::Char('5')), &state), Some(Action::None));
        assert_eq!(handle_event(&key(KeyCode::Esc), &state), Some(Action::SelectPage(None)));
    }

    #[test]
    fn digits_type_into_field() {
        let state = State { focus: Focus::ModelField, ..State::default() };
        assert_eq!(handle_event(&key(KeyCode::Char('3')), &state), Some(Action::InsertText("3".into())));
        assert_eq!(handle_event(&key(KeyCode::Char('j')), &state), Some(Action::InsertText("j".into())));
    }

    #[test]
    fn paste_only_lands_in_focused_field() {
        let paste = Event::Paste("llama3\r\n".into());
        let sidebar = State::default();
        assert_eq!(handle_event(&paste, &sidebar), Some(Action::None));

        let field = State { focus: Focus::ModelField, ..State::default() };
        assert_eq!(handle_event(&paste, &field), Some(Action::InsertText("llama3\r\n".into())));
    }

    #[test]
    fn regenerate_button_activation() {
        let state = State { focus: Focus::Regenerate, ..State::default() };
        assert_eq!(handle_event(&key(KeyCode::Enter), &state), Some(Action::Regenerate));
        assert_eq!(handle_event(&key(KeyCode::Char(' ')), &state), Some(Action::Regenerate));
        assert_eq!(handle_event(&key(KeyCode::Char('x')), &state), Some(Action::None));
    }

    #[test]
    fn tab_cycles_focus() {
        let state = State::default();
        assert_eq!(handle_event(&key(KeyCode::Tab), &state), Some(Action::FocusNext));
        assert_eq!(handle_event(&key(KeyCode::BackTab), &state), Some(Action::FocusPrev));
    }

    #[test]
    fn resize_requests_redraw() {
        assert_eq!(handle_event(&Event::Resize(80, 24), &State::default()), Some(Action::Refresh));
    }
}
