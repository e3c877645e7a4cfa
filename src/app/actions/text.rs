//! Editing for the single-line model name field.
//!
//! The field is a faithful binding: text is stored exactly as entered.
use crate::state::State;

use super::ActionResult;

fn prev_boundary(s: &str, idx: usize) -> usize {
    s[..idx].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_boundary(s: &str, idx: usize) -> usize {
    s[idx..].chars().next().map(|c| idx + c.len_utf8()).unwrap_or(idx)
}

/// Keep the cursor valid if the text was replaced underneath it
fn clamp_cursor(state: &mut State) {
    let text = &state.llm_model_name;
    let mut cursor = state.model_cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    state.model_cursor = cursor;
}

pub fn handle_insert(state: &mut State, text: &str) -> ActionResult {
    if text.is_empty() {
        return ActionResult::Nop;
    }
    clamp_cursor(state);
    state.llm_model_name.insert_str(state.model_cursor, text);
    state.model_cursor += text.len();
    ActionResult::Redraw
}

pub fn handle_delete_backward(state: &mut State) -> ActionResult {
    clamp_cursor(state);
    if state.model_cursor == 0 {
        return ActionResult::Nop;
    }
    let start = prev_boundary(&state.llm_model_name, state.model_cursor);
    state.llm_model_name.replace_range(start..state.model_cursor, "");
    state.model_cursor = start;
    ActionResult::Redraw
}

pub fn handle_delete_forward(state: &mut State) -> ActionResult {
    clamp_cursor(state);
    let end = next_boundary(&state.llm_model_name, state.model_cursor);
    if end == state.model_cursor {
        return ActionResult::Nop;
    }
    state.llm_model_name.replace_range(state.model_cursor..end, "");
    ActionResult::Redraw
}

pub fn handle_cursor_left(state: &mut State) -> ActionResult {
    clamp_cursor(state);
    let to = prev_boundary(&state.llm_model_name, state.model_cursor);
    move_cursor(state, to)
}

pub fn handle_cursor_right(state: &mut State) -> ActionResult {
    clamp_cursor(state);
    let to = next_boundary(&state.llm_model_name, state.model_cursor);
    move_cursor(state, to)
}

pub fn handle_cursor_home(state: &mut State) -> ActionResult {
    move_cursor(state, 0)
}

pub fn handle_cursor_end(state: &mut State) -> ActionResult {
    let end = state.llm_model_name.len();
    move_cursor(state, end)
}

fn move_cursor(state: &mut State, to: usize) -> ActionResult {
    if state.model_cursor == to {
        return ActionResult::Nop;
    }
    state.model_cursor = to;
    ActionResult::Redraw
}
