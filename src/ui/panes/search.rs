//! Searching visualization: one bar per array slot, dimming the eliminated

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use crate::step::SearchStep;
use crate::ui::theme::DEFAULT_THEME;

/// Render the probed array as a bar chart.
///
/// Color encodes the slot's role at this step: the current probe yellow, the
/// found slot green, individually ruled-out slots blue, wholesale-eliminated
/// ranges dimmed.
pub fn render_search_pane(frame: &mut Frame, area: Rect, step: &SearchStep, title: &str) {
    let block = Block::default()
        .title(format!(" {} (target {}) ", title, step.target))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner_width = area.width.saturating_sub(2) as usize;

    let n = step.values.len().max(1);
    let bar_width = ((inner_width / n).saturating_sub(1)).clamp(1, 5) as u16;

    let bars: Vec<Bar> = step
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = if step.found == Some(i) {
                DEFAULT_THEME.success
            } else if step.probe == Some(i) {
                DEFAULT_THEME.highlight
            } else if step.visited.contains(&i) {
                DEFAULT_THEME.secondary
            } else if step.eliminated.contains(&i) {
                DEFAULT_THEME.comment
            } else {
                DEFAULT_THEME.primary
            };
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
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
