mod chars;
pub mod detail;
mod helpers;
pub mod main_content;
mod sidebar;
pub mod split;
mod status_bar;
mod theme;
mod toolbar;

use ratatui::{
    prelude::*,
    widgets::Block,
};

use bb_base::ItemStore;
use bb_base::config::constants::SIDEBAR_MIN_WIDTH;

use crate::state::State;
use split::{SplitLayout, SplitParams};

/// Everything a view may read besides the UI state itself
pub struct Environment<'a> {
    /// Process-wide item store. Views may open a session on it; none do yet.
    pub store: &'a ItemStore,
    pub layout: &'a dyn SplitLayout,
    pub now_ms: u64,
}

pub fn render(frame: &mut Frame, state: &State, env: &Environment) {
    let area = frame.area();

    // Fill base background
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), area);

    // Main layout: toolbar + body + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Toolbar
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let sidebar_width = SIDEBAR_MIN_WIDTH.min(area.width);
    toolbar::render_toolbar(frame, state, env.layout.form_factor(), main_layout[0], sidebar_width);
    render_body(frame, state, env, main_layout[1], sidebar_width);
    status_bar::render_status_bar(frame, state, env, main_layout[2]);
}

fn render_body(frame: &mut Frame, state: &State, env: &Environment, area: Rect, sidebar_width: u16) {
    // Body layout: sidebar + detail region
    let body_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width), // Sidebar
            Constraint::Min(0),                // Detail region
        ])
        .split(area);

    sidebar::render_sidebar(frame, state, body_layout[0]);

    let params = SplitParams {
        is_detail_visible: state.is_detail_visible,
        reveal: state.detail_reveal(env.now_ms),
        ratio: state.split_ratio,
    };
    split::render_split(
        frame,
        env.layout,
        body_layout[1],
        params,
        |frame, area| main_content::render_main_content(frame, area),
        |frame, area| detail::render_detail(frame, state, area),
    );
}
