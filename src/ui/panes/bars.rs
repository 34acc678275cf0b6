//! Sorting visualization: one bar per array element

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use crate::step::SortStep;
use crate::ui::theme::DEFAULT_THEME;

/// Render the working array as a bar chart.
///
/// Color encodes the element's role at this step: comparisons yellow, swaps
/// red, merge ranges orange, the pivot pink, settled elements green.
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: &SortStep, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner_width = area.width.saturating_sub(2) as usize;

    let n = step.array.len().max(1);
    let bar_width = ((inner_width / n).saturating_sub(1)).clamp(1, 5) as u16;

    let bars: Vec<Bar> = step
        .array
        .iter()
        .enumerate()
        .map(|(i, el)| {
            let color = if step.swapping.contains(&i) {
                DEFAULT_THEME.error
            } else if step.comparing.contains(&i) {
                DEFAULT_THEME.highlight
            } else if step.pivot == Some(i) || el.is_pivot {
                DEFAULT_THEME.pivot
            } else if step.merging.contains(&i) {
                DEFAULT_THEME.secondary
            } else if el.is_sorted {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.primary
            };
            // Bars render non-negative heights; the text value stays exact.
            Bar::default()
                .value(el.value.max(0) as u64)
                .text_value(el.value.to_string())
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
