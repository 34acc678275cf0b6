//! Text/pattern alignment for the string-matching runs

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::step::{MatchStep, MatchStepKind};
use crate::ui::theme::DEFAULT_THEME;

/// Render the text with the pattern aligned under the current window.
///
/// Characters inside confirmed occurrences are green; the character under
/// comparison is yellow on a match and red on a mismatch.
pub fn render_matching_pane(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    pattern: &str,
    step: &MatchStep,
    title: &str,
) {
    let text_chars: Vec<char> = text.chars().collect();
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let m = pattern_chars.len();

    let in_occurrence = |i: usize| step.matches.iter().any(|&s| i >= s && i < s + m);
    let in_window = |i: usize| i >= step.window && i < step.window + m;
    let comparing = step.kind == MatchStepKind::Compare;

    let text_spans: Vec<Span> = text_chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let mut style = Style::default().fg(DEFAULT_THEME.fg);
            if in_occurrence(i) {
                style = style.fg(DEFAULT_THEME.success);
            }
            if in_window(i) {
                style = style.bg(DEFAULT_THEME.status_bg);
            }
            if comparing && i == step.text_index {
                let color = match step.matched {
                    Some(true) => DEFAULT_THEME.highlight,
                    Some(false) => DEFAULT_THEME.error,
                    None => DEFAULT_THEME.highlight,
                };
                style = Style::default()
                    .fg(color)
                    .bg(DEFAULT_THEME.status_bg)
                    .add_modifier(Modifier::BOLD);
            }
            Span::styled(c.to_string(), style)
        })
        .collect();

    let mut pattern_spans: Vec<Span> = vec![Span::raw(" ".repeat(step.window))];
    pattern_spans.extend(pattern_chars.iter().enumerate().map(|(j, &c)| {
        let style = if comparing && j == step.pattern_index {
            let color = match step.matched {
                Some(true) => DEFAULT_THEME.highlight,
                Some(false) => DEFAULT_THEME.error,
                None => DEFAULT_THEME.highlight,
            };
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.secondary)
        };
        Span::styled(c.to_string(), style)
    }));

    let occurrence_line = if step.matches.is_empty() {
        Line::styled(
            "No occurrences yet",
            Style::default().fg(DEFAULT_THEME.comment),
        )
    } else {
        let positions: Vec<String> = step.matches.iter().map(|p| p.to_string()).collect();
        Line::styled(
            format!("Found at: {}", positions.join(", ")),
            Style::default().fg(DEFAULT_THEME.success),
        )
    };

    let lines = vec![
        Line::styled("Text:", Style::default().fg(DEFAULT_THEME.comment)),
        Line::from(text_spans),
        Line::styled("Pattern:", Style::default().fg(DEFAULT_THEME.comment)),
        Line::from(pattern_spans),
        Line::default(),
        occurrence_line,
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );

    frame.render_widget(paragraph, area);
}
