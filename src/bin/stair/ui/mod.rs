//! Terminal preview of the staircase shaper.
//!
//! Shows the transfer curve, a sine before and after shaping, and the
//! harmonic profile, all computed once up front.

mod curve;
mod harmonics;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::time::Duration;

use stair_dsp::{
    analysis::{shaped_sine_profile, HarmonicProfile},
    dsp::{
        signal::{linspace, sine_wave},
        Staircase,
    },
};

use curve::{render_sine, render_transfer};
use harmonics::render_harmonics;

/// Points plotted across the transfer curve
const CURVE_POINTS: usize = 400;
/// Points across the two-cycle sine view
const SINE_POINTS: usize = 400;
/// Harmonic bars shown
const HARMONICS: usize = 11;

/// Preview application state
pub struct PreviewApp {
    shaper: Staircase,
    /// Transfer curve (input, output)
    transfer: Vec<(f64, f64)>,
    /// Clean sine (t, y)
    clean: Vec<(f64, f64)>,
    /// Shaped sine (t, y)
    shaped: Vec<(f64, f64)>,
    profile: HarmonicProfile,
    should_quit: bool,
}

impl PreviewApp {
    pub fn new(shaper: Staircase) -> Self {
        let transfer = shaper
            .transfer_curve(CURVE_POINTS)
            .into_iter()
            .map(|(x, y)| (x as f64, y as f64))
            .collect();

        let t = linspace(0.0, 2.0, SINE_POINTS);
        let sine = sine_wave(&t, 1.0);
        let clean = t
            .iter()
            .zip(&sine)
            .map(|(&t, &y)| (t as f64, y as f64))
            .collect();
        let shaped = t
            .iter()
            .zip(&sine)
            .map(|(&t, &y)| (t as f64, shaper.process(y) as f64))
            .collect();

        let profile = shaped_sine_profile(&shaper, HARMONICS);

        Self {
            shaper,
            transfer,
            clean,
            shaped,
            profile,
            should_quit: false,
        }
    }

    /// Run the UI event loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Nothing animates, so block on input with a generous timeout
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc = key {
            self.should_quit = true;
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),    // Curves
                Constraint::Length(10), // Harmonics
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[0]);

        render_transfer(frame, top[0], &self.transfer);
        render_sine(
            frame,
            top[1],
            &self.clean,
            &self.shaped,
            self.shaper.table().ceiling() as f64,
        );
        render_harmonics(frame, rows[1], &self.profile);

        let table = self.shaper.table();
        let help = Paragraph::new(format!(
            " [Q] Quit   {} steps, {:.2} .. {:.2}   THD {:.1}%",
            table.len(),
            table.ceiling(),
            table.floor(),
            self.profile.thd_percent
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[2]);
    }
}
