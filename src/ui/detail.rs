use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{Focus, State};
use super::{chars, helpers, theme};

pub const TRANSLATED_HEADING: &str = "translated text";
pub const SUMMARY_HEADING: &str = "Summary";
pub const FIELD_PLACEHOLDER: &str = "llm models";
pub const REGENERATE_LABEL: &str = "Regenerate";

/// Width of the bordered Regenerate button
const BUTTON_WIDTH: u16 = REGENERATE_LABEL.len() as u16 + 4;

pub fn render_detail(frame: &mut Frame, state: &State, area: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_MINT)), area);

    let inner = area.inner(Margin { horizontal: 2, vertical: 1 });
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // translated text
            Constraint::Length(1),
            Constraint::Length(1), // atom
            Constraint::Length(1),
            Constraint::Length(3), // field + button
            Constraint::Length(1),
            Constraint::Length(1), // Summary
            Constraint::Min(0),    // spacer
        ])
        .split(inner);

    let heading = Style::default().fg(theme::TEXT).bold();
    frame.render_widget(Paragraph::new(Span::styled(TRANSLATED_HEADING, heading)), layout[0]);
    frame.render_widget(Paragraph::new(Span::styled(chars::ATOM, Style::default().fg(theme::ACCENT))), layout[2]);
    render_controls(frame, state, layout[4]);
    frame.render_widget(Paragraph::new(Span::styled(SUMMARY_HEADING, heading)), layout[6]);
}

fn render_controls(frame: &mut Frame, state: &State, area: Rect) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(BUTTON_WIDTH)])
        .split(area);

    render_text_field(frame, state, row[0]);
    render_button(frame, state.focus == Focus::Regenerate, row[2]);
}

fn bordered(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { theme::BORDER_FOCUS } else { theme::BORDER }))
}

fn render_text_field(frame: &mut Frame, state: &State, area: Rect) {
    let focused = state.focus == Focus::ModelField;
    let block = bordered(focused).style(Style::default().bg(theme::BG_INPUT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if state.llm_model_name.is_empty() {
        let placeholder = Paragraph::new(Span::styled(FIELD_PLACEHOLDER, Style::default().fg(theme::TEXT_MUTED)));
        frame.render_widget(placeholder, inner);
        if focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    let (visible, cursor_col) =
        helpers::scroll_to_cursor(&state.llm_model_name, state.model_cursor, inner.width as usize);
    frame.render_widget(Paragraph::new(Span::styled(visible, Style::default().fg(theme::TEXT))), inner);

    if focused {
        frame.set_cursor_position(Position::new(inner.x + cursor_col as u16, inner.y));
    }
}

fn render_button(frame: &mut Frame, focused: bool, area: Rect) {
    let label_style = if focused {
        Style::default().fg(theme::BG_BASE).bg(theme::ACCENT).bold()
    } else {
        Style::default().fg(theme::ACCENT)
    };
    let block = bordered(focused);
    let label = Paragraph::new(Span::styled(REGENERATE_LABEL, label_style)).alignment(Alignment::Center).block(block);
    frame.render_widget(label, area);
}

