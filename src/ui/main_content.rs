use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::theme;

pub const PLACEHOLDER: &str = "Books page view";

/// Static placeholder filling the whole area, centered both ways.
pub fn render_main_content(frame: &mut Frame, area: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), area);
    if area.height == 0 {
        return;
    }

    let line_area = Rect { y: area.y + area.height / 2, height: 1, ..area };
    let paragraph = Paragraph::new(Span::styled(PLACEHOLDER, Style::default().fg(theme::TEXT)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, line_area);
}
