//! Input field rendering: size, manual elements, and speed
//!
//! Three text fields side by side. The focused field gets the focus border
//! and a trailing cursor mark; while a run holds the gate every field renders
//! dimmed to match its disabled state.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which text field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedField {
    Size,
    Elements,
    Speed,
}

impl FocusedField {
    /// Move focus to the next field (left to right, wrapping).
    pub fn next(self) -> Self {
        match self {
            FocusedField::Size => FocusedField::Elements,
            FocusedField::Elements => FocusedField::Speed,
            FocusedField::Speed => FocusedField::Size,
        }
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    hint: &str,
    text: &str,
    focused: bool,
    disabled: bool,
) {
    let border_style = Style::default().fg(if disabled {
        DEFAULT_THEME.comment
    } else if focused {
        DEFAULT_THEME.border_focused
    } else {
        DEFAULT_THEME.border_normal
    });

    let mut spans = vec![Span::styled(
        text.to_string(),
        Style::default().fg(if disabled {
            DEFAULT_THEME.comment
        } else {
            DEFAULT_THEME.fg
        }),
    )];

    if text.is_empty() {
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    if focused && !disabled {
        spans.push(Span::styled(
            "█",
            Style::default().fg(DEFAULT_THEME.accent),
        ));
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", title)),
    );
    frame.render_widget(field, area);
}

/// Render the three input fields.
#[allow(clippy::too_many_arguments)]
pub fn render_controls_pane(
    frame: &mut Frame,
    area: Rect,
    size_text: &str,
    elements_text: &str,
    speed_text: &str,
    focused: FocusedField,
    disabled: bool,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(area);

    render_field(
        frame,
        columns[0],
        "Size",
        "12",
        size_text,
        focused == FocusedField::Size,
        disabled,
    );
    render_field(
        frame,
        columns[1],
        "Elements (comma-separated)",
        "e.g. 5,1,4,2,8",
        elements_text,
        focused == FocusedField::Elements,
        disabled,
    );
    render_field(
        frame,
        columns[2],
        "Speed (ms)",
        "400",
        speed_text,
        focused == FocusedField::Speed,
        disabled,
    );
}
