//! Line chart widgets for the transfer curve and the shaped sine

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

fn axis(bounds: [f64; 2], labels: [&'static str; 3]) -> Axis<'static> {
    Axis::default()
        .bounds(bounds)
        .labels(labels)
        .style(Style::default().fg(Color::DarkGray))
}

/// Render the staircase against the `y = x` reference
pub fn render_transfer(frame: &mut Frame, area: Rect, curve: &[(f64, f64)]) {
    let block = Block::default()
        .title(" Transfer Curve ")
        .borders(Borders::ALL);

    let linear = [(-1.0, -1.0), (1.0, 1.0)];

    let datasets = vec![
        Dataset::default()
            .name("y = x")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&linear),
        Dataset::default()
            .name("staircase")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(curve),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(axis([-1.0, 1.0], ["-1", "0", "1"]))
        .y_axis(axis([-1.0, 1.0], ["-1", "0", "1"]));

    frame.render_widget(chart, area);
}

/// Render a clean sine and its shaped copy, with the clamp level marked
pub fn render_sine(
    frame: &mut Frame,
    area: Rect,
    clean: &[(f64, f64)],
    shaped: &[(f64, f64)],
    ceiling: f64,
) {
    let block = Block::default()
        .title(" Distortion effect ")
        .borders(Borders::ALL);

    let span = clean.last().map(|&(t, _)| t).unwrap_or(1.0);
    let upper = [(0.0, ceiling), (span, ceiling)];
    let lower = [(0.0, -ceiling), (span, -ceiling)];

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&upper),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&lower),
        Dataset::default()
            .name("sine")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(clean),
        Dataset::default()
            .name("distorted")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(shaped),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(axis([0.0, span], ["0", "t", "2"]))
        .y_axis(axis([-1.1, 1.1], ["-1.1", "0", "1.1"]));

    frame.render_widget(chart, area);
}
