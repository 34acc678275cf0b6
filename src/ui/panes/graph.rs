//! Graph canvas for the MST, pathfinding, and traversal runs

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{
        Block, Borders, Cell, Row, Table,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::model::GraphData;
use crate::project::Highlights;
use crate::step::PathStep;
use crate::ui::theme::DEFAULT_THEME;

/// Whether `from`-`to` is a leg of the highlighted path (either direction).
fn on_path(path: &[String], from: &str, to: &str) -> bool {
    path.windows(2)
        .any(|leg| (leg[0] == from && leg[1] == to) || (leg[0] == to && leg[1] == from))
}

/// Render the graph, coloring nodes and edges from the current highlights.
///
/// Node coordinates come straight from the graph; the canvas is fixed to the
/// generator's 0..100 layout square.
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    graph: &GraphData,
    highlights: &Highlights,
    title: &str,
) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(|ctx| {
            for edge in &graph.edges {
                let (Some(a), Some(b)) = (graph.node(&edge.from), graph.node(&edge.to)) else {
                    continue;
                };
                let color = if on_path(&highlights.path, &edge.from, &edge.to) {
                    DEFAULT_THEME.path
                } else if highlights.edges.contains(&edge.id) {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.comment
                };
                ctx.draw(&CanvasLine {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y,
                    color,
                });
                ctx.print(
                    (a.x + b.x) / 2.0,
                    (a.y + b.y) / 2.0,
                    Line::styled(
                        format!("{}", edge.weight),
                        Style::default().fg(DEFAULT_THEME.secondary),
                    ),
                );
            }
            ctx.layer();
            for node in &graph.nodes {
                let style = if highlights.path.contains(&node.id) {
                    Style::default()
                        .fg(DEFAULT_THEME.path)
                        .add_modifier(Modifier::BOLD)
                } else if highlights.nodes.contains(&node.id) {
                    Style::default()
                        .fg(DEFAULT_THEME.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.fg)
                };
                ctx.print(node.x, node.y, Line::styled(node.label.clone(), style));
            }
        });

    frame.render_widget(canvas, area);
}

fn format_distance(d: f64) -> String {
    if d.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.1}", d)
    }
}

/// Tentative-distance table shown beside the graph during pathfinding.
pub fn render_distances_pane(frame: &mut Frame, area: Rect, graph: &GraphData, step: &PathStep) {
    let rows: Vec<Row> = graph
        .nodes
        .iter()
        .map(|node| {
            let distance = step
                .distances
                .get(&node.id)
                .copied()
                .unwrap_or(f64::INFINITY);
            let previous = step
                .previous
                .get(&node.id)
                .and_then(|p| p.clone())
                .unwrap_or_else(|| "-".to_string());
            let style = if step.current_node.as_deref() == Some(node.id.as_str()) {
                Style::default().fg(DEFAULT_THEME.highlight)
            } else if step.visited_nodes.contains(&node.id) {
                Style::default().fg(DEFAULT_THEME.success)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Row::new(vec![
                Cell::from(node.label.clone()),
                Cell::from(format_distance(distance)),
                Cell::from(previous),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec!["Node", "Dist", "Prev"])
            .style(Style::default().fg(DEFAULT_THEME.primary))
            .bottom_margin(1),
    )
    .block(
        Block::default()
            .title(" Distances ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );

    frame.render_widget(table, area);
}
