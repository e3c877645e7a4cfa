mod navigation;
mod text;

use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Terminal resized or otherwise needs a fresh frame
    Refresh,
    /// Toolbar button: show/hide the detail pane
    ToggleDetail,
    /// Set the sidebar selection; None clears it
    SelectPage(Option<u8>),
    SelectPrevPage,
    SelectNextPage,
    FocusNext,
    FocusPrev,
    /// Typed characters or pasted text for the model field
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Placeholder for regenerating the translation/summary. Does nothing.
    Regenerate,
    /// Desktop split handle
    GrowMainPane,
    ShrinkMainPane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Nothing changed
    Nop,
    /// State changed; the view must be re-rendered
    Redraw,
}

pub fn apply_action(action: Action, state: &mut State, now_ms: u64) -> ActionResult {
    match action {
        Action::None => ActionResult::Nop,
        Action::Refresh => ActionResult::Redraw,
        Action::ToggleDetail => navigation::handle_toggle_detail(state, now_ms),
        Action::SelectPage(page) => navigation::handle_select_page(state, page),
        Action::SelectPrevPage => navigation::handle_step_page(state, false),
        Action::SelectNextPage => navigation::handle_step_page(state, true),
        Action::FocusNext => navigation::handle_cycle_focus(state, true),
        Action::FocusPrev => navigation::handle_cycle_focus(state, false),
        Action::InsertText(s) => text::handle_insert(state, &s),
        Action::DeleteBackward => text::handle_delete_backward(state),
        Action::DeleteForward => text::handle_delete_forward(state),
        Action::CursorLeft => text::handle_cursor_left(state),
        Action::CursorRight => text::handle_cursor_right(state),
        Action::CursorHome => text::handle_cursor_home(state),
        Action::CursorEnd => text::handle_cursor_end(state),
        Action::Regenerate => ActionResult::Nop,
        Action::GrowMainPane => navigation::handle_resize_split(state, true),
        Action::ShrinkMainPane => navigation::handle_resize_split(state, false),
    }
}
