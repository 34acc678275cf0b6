//! Step commentary log and derived counters

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::project::Projection;
use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;

/// Render the counters and the step log, with the current step pinned to the
/// bottom of the visible window.
pub fn render_narrative_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    position: usize,
    projection: &Projection,
) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Comparisons: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                projection.comparisons.to_string(),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
            Span::styled("  Swaps: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                projection.swaps.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            ),
            Span::styled("  Visited: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                projection.visits.to_string(),
                Style::default().fg(DEFAULT_THEME.success),
            ),
        ]),
        Line::default(),
    ];

    // Leave room for the counters, the spacer, and the border rows.
    let log_height = (area.height as usize).saturating_sub(4);
    let first = (position + 1).saturating_sub(log_height);
    for (i, step) in steps.iter().enumerate().take(position + 1).skip(first) {
        let style = if i == position {
            Style::default()
                .fg(DEFAULT_THEME.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        lines.push(Line::styled(
            format!("{:>4}  {}", i + 1, step.description()),
            style,
        ));
        if i == position && !step.sub_description().is_empty() {
            lines.push(Line::styled(
                format!("      {}", step.sub_description()),
                Style::default().fg(DEFAULT_THEME.secondary),
            ));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Steps ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );

    frame.render_widget(paragraph, area);
}
