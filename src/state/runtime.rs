use bb_base::config::constants::{SIDEBAR_PAGE_COUNT, SPLIT_RATIO_DEFAULT};

use super::transition::Transition;

/// Display mode for the sidebar/detail split. Held but not consulted by
/// layout; nothing switches it away from `Automatic` yet.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnVisibility {
    #[default]
    Automatic,
    All,
    DoubleColumn,
    DetailOnly,
}

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    ModelField,
    Regenerate,
}

impl Focus {
    pub fn in_detail(self) -> bool {
        matches!(self, Focus::ModelField | Focus::Regenerate)
    }
}

/// Runtime UI state
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Active sidebar row, 1..=SIDEBAR_PAGE_COUNT or none
    pub selected_page: Option<u8>,
    /// Text bound to the "llm models" field
    pub llm_model_name: String,
    /// Cursor position in llm_model_name (byte index, always on a char boundary)
    pub model_cursor: usize,
    pub is_detail_visible: bool,
    #[allow(dead_code)]
    pub column_visibility: ColumnVisibility,
    pub focus: Focus,
    /// Desktop split: percent of the split container given to the main pane
    pub split_ratio: u16,
    /// Most recent show/hide animation (may already be finished)
    pub detail_transition: Option<Transition>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            selected_page: Some(1),
            llm_model_name: String::new(),
            model_cursor: 0,
            is_detail_visible: true,
            column_visibility: ColumnVisibility::default(),
            focus: Focus::default(),
            split_ratio: SPLIT_RATIO_DEFAULT,
            detail_transition: None,
        }
    }
}

impl State {
    pub fn is_valid_page(page: u8) -> bool {
        (1..=SIDEBAR_PAGE_COUNT).contains(&page)
    }

    /// How far the detail pane is shown, 0.0 (gone) to 1.0 (fully in).
    /// Settles to exactly 0.0 or 1.0 once the transition has finished.
    pub fn detail_reveal(&self, now_ms: u64) -> f32 {
        match self.detail_transition {
            Some(t) if !t.is_finished(now_ms) => t.reveal(now_ms),
            _ => {
                if self.is_detail_visible {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}
