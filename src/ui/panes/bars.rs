//! Bar chart pane rendering
//!
//! Renders the visual projection as one proportionally sized bar per element,
//! colored by highlight class. The pane redraws wholesale from [`VisualState`]
//! every frame, so sequence replacement and per-index mutations both reach
//! the screen through the same path.

use crate::sort::visual::{Highlight, VisualState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

fn highlight_style(highlight: Highlight) -> Style {
    let color = match highlight {
        Highlight::None => DEFAULT_THEME.bar,
        Highlight::Comparing => DEFAULT_THEME.bar_compare,
        Highlight::Swapping => DEFAULT_THEME.bar_swap,
        Highlight::Settled => DEFAULT_THEME.bar_settled,
    };
    Style::default().fg(color)
}

/// Render the bars pane from the current visual state.
pub fn render_bars_pane(frame: &mut Frame, area: Rect, visual: &VisualState, is_running: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_running {
            DEFAULT_THEME.border_focused
        } else {
            DEFAULT_THEME.border_normal
        }))
        .title(format!(" Bars ({}) ", visual.len()));

    if visual.is_empty() {
        let placeholder = Paragraph::new("No bars yet. Press g to generate.")
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let bars: Vec<Bar> = visual
        .bars()
        .iter()
        .map(|bar| {
            let style = highlight_style(bar.highlight);
            Bar::default()
                // Non-positive values still get a visible stub of height 1;
                // the text label carries the true value.
                .value(bar.value.max(1) as u64)
                .text_value(bar.value.to_string())
                .style(style)
                .value_style(style.add_modifier(Modifier::REVERSED))
        })
        .collect();

    let n = visual.len() as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(n.saturating_sub(1)) / n.max(1)).max(1);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}
