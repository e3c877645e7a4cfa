use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::state::{Focus, State};
use super::helpers::truncate_start;
use super::split::FormFactor;
use super::{Environment, theme};

pub fn render_status_bar(frame: &mut Frame, state: &State, env: &Environment, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE).fg(theme::TEXT_MUTED);

    let mut spans = vec![Span::styled(" ", base_style)];

    let badge = match env.layout.form_factor() {
        FormFactor::Desktop => " DESKTOP ",
        FormFactor::Touch => " TOUCH ",
    };
    spans.push(Span::styled(badge, Style::default().fg(theme::BG_BASE).bg(theme::ACCENT_DIM).bold()));
    spans.push(Span::styled(" ", base_style));

    let focus = match state.focus {
        Focus::Sidebar => "sidebar",
        Focus::ModelField => "model field",
        Focus::Regenerate => "regenerate",
    };
    spans.push(Span::styled(format!(" {} ", focus), Style::default().fg(theme::TEXT).bg(theme::BG_ELEVATED)));
    spans.push(Span::styled(" ", base_style));

    // Right side: key hints
    let hints = match env.layout.form_factor() {
        FormFactor::Desktop => "^D detail  [ ] resize  Tab focus  ^Q quit ",
        FormFactor::Touch => "^D detail  Tab focus  ^Q quit ",
    };

    // Store location fills whatever is left in the middle
    let left_width: usize = spans.iter().map(|s| s.width()).sum();
    let room = (area.width as usize).saturating_sub(left_width + hints.width() + 1);
    let location = match env.store.location() {
        Some(path) => path.display().to_string(),
        None => "in-memory".to_string(),
    };
    let location = truncate_start(&location, room);
    let location_width = location.width();
    spans.push(Span::styled(location, base_style));

    let padding = room.saturating_sub(location_width) + 1;
    spans.push(Span::styled(" ".repeat(padding), base_style));
    spans.push(Span::styled(hints, base_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
