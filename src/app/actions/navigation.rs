use bb_base::config::constants::{SIDEBAR_PAGE_COUNT, SPLIT_RATIO_MAX, SPLIT_RATIO_MIN, SPLIT_RATIO_STEP};

use crate::state::{Focus, State, Transition};

use super::ActionResult;

/// Handle ToggleDetail: flip visibility and animate the edge
pub fn handle_toggle_detail(state: &mut State, now_ms: u64) -> ActionResult {
    state.is_detail_visible = !state.is_detail_visible;

    state.detail_transition = Some(match state.detail_transition {
        Some(t) if !t.is_finished(now_ms) => t.reversed(now_ms),
        _ => Transition::new(state.is_detail_visible, now_ms),
    });

    if !state.is_detail_visible && state.focus.in_detail() {
        state.focus = Focus::Sidebar;
    }
    ActionResult::Redraw
}

/// Handle SelectPage. Out-of-range pages are ignored.
pub fn handle_select_page(state: &mut State, page: Option<u8>) -> ActionResult {
    if let Some(p) = page
        && !State::is_valid_page(p)
    {
        return ActionResult::Nop;
    }
    if state.selected_page == page {
        return ActionResult::Nop;
    }
    state.selected_page = page;
    ActionResult::Redraw
}

/// Handle SelectNextPage / SelectPrevPage (clamped, no wrap)
pub fn handle_step_page(state: &mut State, forward: bool) -> ActionResult {
    let next = match (state.selected_page, forward) {
        (None, true) => 1,
        (None, false) => SIDEBAR_PAGE_COUNT,
        (Some(p), true) => (p + 1).min(SIDEBAR_PAGE_COUNT),
        (Some(p), false) => p.saturating_sub(1).max(1),
    };
    handle_select_page(state, Some(next))
}

/// Handle FocusNext / FocusPrev. Detail controls are skipped while hidden.
pub fn handle_cycle_focus(state: &mut State, forward: bool) -> ActionResult {
    let order: &[Focus] = if state.is_detail_visible {
        &[Focus::Sidebar, Focus::ModelField, Focus::Regenerate]
    } else {
        &[Focus::Sidebar]
    };
    let pos = order.iter().position(|f| *f == state.focus).unwrap_or(0);
    let len = order.len();
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };

    if order[next] == state.focus {
        return ActionResult::Nop;
    }
    state.focus = order[next];
    if state.focus == Focus::ModelField {
        state.model_cursor = state.llm_model_name.len();
    }
    ActionResult::Redraw
}

/// Handle GrowMainPane / ShrinkMainPane
pub fn handle_resize_split(state: &mut State, grow: bool) -> ActionResult {
    let ratio = if grow {
        (state.split_ratio + SPLIT_RATIO_STEP).min(SPLIT_RATIO_MAX)
    } else {
        state.split_ratio.saturating_sub(SPLIT_RATIO_STEP).max(SPLIT_RATIO_MIN)
    };
    if ratio == state.split_ratio {
        return ActionResult::Nop;
    }
    state.split_ratio = ratio;
    ActionResult::Redraw
}
