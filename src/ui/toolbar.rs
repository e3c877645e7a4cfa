use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::state::State;
use super::split::FormFactor;
use super::{chars, theme};

pub const NAVIGATION_TITLE: &str = "Books";

/// Toolbar row with the navigation title and the detail toggle button.
///
/// Desktop puts the button at the trailing edge of the window toolbar;
/// touch gives the detail region its own navigation bar and places the
/// button at that bar's trailing edge.
pub fn render_toolbar(frame: &mut Frame, state: &State, form_factor: FormFactor, area: Rect, sidebar_width: u16) {
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_ELEVATED)), area);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
        .split(area);

    let title = Span::styled(NAVIGATION_TITLE, Style::default().fg(theme::TEXT).bold());
    let button = toggle_button(state.is_detail_visible);
    let button_width = button.width() as u16;

    match form_factor {
        FormFactor::Desktop => {
            frame.render_widget(Paragraph::new(Line::from(vec![Span::raw(" "), title])), split[1]);
            let slot = trailing_slot(area, button_width);
            frame.render_widget(Paragraph::new(Line::from(button)), slot);
        }
        FormFactor::Touch => {
            let nav_bar = split[1];
            frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), nav_bar);
            frame.render_widget(Paragraph::new(Line::from(title)).alignment(Alignment::Center), nav_bar);
            let slot = trailing_slot(nav_bar, button_width + 1);
            frame.render_widget(Paragraph::new(Line::from(button)).alignment(Alignment::Left), slot);
            let rule = Span::styled(chars::HORIZONTAL.repeat(split[0].width as usize), Style::default().fg(theme::BORDER));
            frame.render_widget(Paragraph::new(Line::from(rule)), split[0]);
        }
    }
}

fn toggle_button(active: bool) -> Span<'static> {
    let style = if active {
        Style::default().fg(theme::BG_BASE).bg(theme::ACCENT).bold()
    } else {
        Style::default().fg(theme::ACCENT_DIM).bg(theme::BG_ELEVATED)
    };
    Span::styled(format!(" {} ", chars::SIDEBAR_RIGHT), style)
}

fn trailing_slot(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect { x: area.x + area.width - width, width, ..area }
}
