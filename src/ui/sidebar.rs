use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use bb_base::config::constants::{SIDEBAR_PAGE_COUNT, SIDEBAR_ROW_HEIGHT};

use crate::state::{Focus, State};
use super::{chars, theme};

/// Four static rows labelled "1".."4", single selection bound to `selected_page`.
pub fn render_sidebar(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_MINT);
    frame.render_widget(Block::default().style(base_style), area);

    let focused = state.focus == Focus::Sidebar;
    let list_area = area.inner(Margin { horizontal: 1, vertical: 1 });

    let constraints: Vec<Constraint> = (0..SIDEBAR_PAGE_COUNT)
        .map(|_| Constraint::Length(SIDEBAR_ROW_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default().direction(Direction::Vertical).constraints(constraints).split(list_area);

    for page in 1..=SIDEBAR_PAGE_COUNT {
        let selected = state.selected_page == Some(page);
        render_row(frame, rows[(page - 1) as usize], page, selected, focused);
    }
}

fn render_row(frame: &mut Frame, area: Rect, page: u8, selected: bool, focused: bool) {
    if area.height == 0 {
        return;
    }

    let bg = if selected { theme::BG_MINT_SELECTED } else { theme::BG_MINT };
    let border_color = if selected && focused { theme::BORDER_FOCUS } else { theme::ROW_BORDER };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg));

    let mut spans = Vec::new();
    if selected {
        spans.push(Span::styled(format!("{} ", chars::ARROW_RIGHT), Style::default().fg(theme::ACCENT)));
    }
    let label_style = if selected {
        Style::default().fg(theme::TEXT).bold()
    } else {
        Style::default().fg(theme::TEXT_SECONDARY)
    };
    spans.push(Span::styled(page.to_string(), label_style));

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, area);
}
