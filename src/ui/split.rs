//! Adaptive split view: main pane plus a collapsible detail pane.
//!
//! Two strategies share one contract. Both are stateless and compose areas
//! purely from the visibility binding (and, on touch, the animation reveal).
//! The strategy is picked once at startup from the detected form factor.
use std::fmt;

use ratatui::prelude::*;

use bb_base::config::FormFactorPreference;
use bb_base::config::constants::{DETAIL_MIN_WIDTH, TOUCH_DETAIL_DIVISOR, TOUCH_MAX_COLUMNS};

/// Layout branch: resizable split container vs. plain stack with slide-in panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFactor {
    Desktop,
    Touch,
}

impl FormFactor {
    /// Resolve the configured preference against the terminal width
    pub fn detect(preference: FormFactorPreference, terminal_width: u16) -> Self {
        match preference {
            FormFactorPreference::Desktop => FormFactor::Desktop,
            FormFactorPreference::Touch => FormFactor::Touch,
            FormFactorPreference::Auto if terminal_width < TOUCH_MAX_COLUMNS => FormFactor::Touch,
            FormFactorPreference::Auto => FormFactor::Desktop,
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormFactor::Desktop => write!(f, "desktop"),
            FormFactor::Touch => write!(f, "touch"),
        }
    }
}

/// Inputs a split strategy composes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitParams {
    pub is_detail_visible: bool,
    /// Animation progress of the detail pane, 0.0..=1.0
    pub reveal: f32,
    /// Desktop only: percent of the width given to the main pane
    pub ratio: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitAreas {
    pub main: Rect,
    /// Resize handle between the panes (desktop only)
    pub divider: Option<Rect>,
    /// None when the detail pane is not in the tree
    pub detail: Option<Rect>,
}

pub trait SplitLayout {
    fn form_factor(&self) -> FormFactor;

    fn compose(&self, area: Rect, params: SplitParams) -> SplitAreas;
}

/// Desktop-class: user-resizable split; detail present iff visible
#[derive(Debug, Default)]
pub struct DesktopSplit;

impl SplitLayout for DesktopSplit {
    fn form_factor(&self) -> FormFactor {
        FormFactor::Desktop
    }

    fn compose(&self, area: Rect, params: SplitParams) -> SplitAreas {
        if !params.is_detail_visible {
            return SplitAreas { main: area, divider: None, detail: None };
        }
        // No room for a divider: the detail pane takes what there is
        if area.width < 2 {
            let main = Rect { width: 0, ..area };
            return SplitAreas { main, divider: None, detail: Some(area) };
        }

        let available = area.width - 1; // divider column
        let mut main_width = (available as u32 * params.ratio.min(100) as u32 / 100) as u16;
        let min_detail = DETAIL_MIN_WIDTH.min(available);
        if available - main_width < min_detail {
            main_width = available - min_detail;
        }
        let detail_width = available - main_width;

        let main = Rect { width: main_width, ..area };
        let divider = Rect { x: area.x + main_width, width: 1, ..area };
        let detail = Rect { x: divider.x + 1, width: detail_width, ..area };
        SplitAreas { main, divider: Some(divider), detail: Some(detail) }
    }
}

/// Touch-class: horizontal stack; detail capped at 1/3 width and slides in
/// from the trailing edge
#[derive(Debug, Default)]
pub struct TouchSplit;

impl TouchSplit {
    pub fn detail_width(area_width: u16, reveal: f32) -> u16 {
        let target = area_width / TOUCH_DETAIL_DIVISOR;
        (target as f32 * reveal.clamp(0.0, 1.0)).round() as u16
    }
}

impl SplitLayout for TouchSplit {
    fn form_factor(&self) -> FormFactor {
        FormFactor::Touch
    }

    fn compose(&self, area: Rect, params: SplitParams) -> SplitAreas {
        let width = Self::detail_width(area.width, params.reveal);
        if width == 0 {
            return SplitAreas { main: area, divider: None, detail: None };
        }

        let main = Rect { width: area.width - width, ..area };
        let detail = Rect { x: area.x + main.width, width, ..area };
        SplitAreas { main, divider: None, detail: Some(detail) }
    }
}

pub fn layout_for(form_factor: FormFactor) -> Box<dyn SplitLayout> {
    match form_factor {
        FormFactor::Desktop => Box::new(DesktopSplit),
        FormFactor::Touch => Box::new(TouchSplit),
    }
}

/// Render the split, building each child only if it is in the tree.
pub fn render_split<M, D>(
    frame: &mut Frame,
    layout: &dyn SplitLayout,
    area: Rect,
    params: SplitParams,
    main_content: M,
    detail_content: D,
) where
    M: FnOnce(&mut Frame, Rect),
    D: FnOnce(&mut Frame, Rect),
{
    let areas = layout.compose(area, params);

    main_content(frame, areas.main);

    if let Some(divider) = areas.divider {
        render_divider(frame, divider);
    }
    if let Some(detail) = areas.detail {
        detail_content(frame, detail);
    }
}

fn render_divider(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(super::theme::BORDER).bg(super::theme::BG_BASE);
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from(Span::styled(super::chars::VERTICAL, style))).collect();
    frame.render_widget(ratatui::widgets::Paragraph::new(lines), area);
}
