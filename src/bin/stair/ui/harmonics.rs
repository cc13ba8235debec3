//! Harmonic level bars

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use stair_dsp::analysis::{spectrum::FLOOR_DB, HarmonicProfile};

/// Bars start at this level so the floor reads as empty
const DISPLAY_FLOOR_DB: f32 = -80.0;

/// Map a relative level to a bar height (0..=100)
fn bar_height(level_db: f32) -> u64 {
    let clamped = level_db.clamp(DISPLAY_FLOOR_DB, 0.0);
    ((clamped - DISPLAY_FLOOR_DB) / -DISPLAY_FLOOR_DB * 100.0).round() as u64
}

/// Render one bar per harmonic, labelled H1, H2, ...
pub fn render_harmonics(frame: &mut Frame, area: Rect, profile: &HarmonicProfile) {
    let block = Block::default()
        .title(" Harmonics (dB re fundamental) ")
        .borders(Borders::ALL);

    let bars: Vec<Bar> = profile
        .levels_db
        .iter()
        .enumerate()
        .map(|(i, &level)| {
            let text = if level <= FLOOR_DB {
                "-inf".to_string()
            } else {
                format!("{level:.0}")
            };
            Bar::default()
                .label(format!("H{}", i + 1).into())
                .value(bar_height(level))
                .text_value(text)
                .style(Style::default().fg(if i % 2 == 0 {
                    Color::Cyan
                } else {
                    Color::DarkGray
                }))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1)
        .max(100);

    frame.render_widget(chart, area);
}
