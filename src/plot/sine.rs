use std::path::Path;

use plotters::prelude::*;

use super::{dashed_line, log_saved, prepare_output};
use crate::dsp::signal::{linspace, sine_wave};
use crate::dsp::Staircase;
use crate::Result;

/// A sine test tone before and after the staircase shaper.
#[derive(Debug, Clone)]
pub struct SinePlot {
    size: (u32, u32),
    samples: usize,
    duration: f32,
    frequency: f32,
}

impl SinePlot {
    pub fn new() -> Self {
        Self {
            size: (1400, 600),
            samples: 1000,
            duration: 2.0,
            frequency: 1.0,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Number of time points across the plotted span.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples.max(2);
        self
    }

    /// Plotted span in seconds, starting at t = 0.
    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds.max(f32::EPSILON);
        self
    }

    pub fn frequency(mut self, hz: f32) -> Self {
        self.frequency = hz;
        self
    }

    /// Time axis, clean sine and shaped sine.
    pub fn series(&self, shaper: &Staircase) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        let t = linspace(0.0, self.duration, self.samples);
        let clean = sine_wave(&t, self.frequency);
        let mut shaped = clean.clone();
        shaper.process_buffer(&mut shaped);
        (t, clean, shaped)
    }

    pub fn render(&self, shaper: &Staircase, path: &Path) -> Result<()> {
        prepare_output(path)?;
        let (t, clean, shaped) = self.series(shaper);
        let ceiling = shaper.table().ceiling();

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Distortion effect", ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0f32..self.duration, -1.1f32..1.1f32)?;

        chart
            .configure_mesh()
            .x_desc("t")
            .y_desc("amplitude")
            .axis_desc_style(("sans-serif", 18))
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.3))
            .draw()?;

        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (self.duration, 0.0)],
            BLACK.stroke_width(1),
        )))?;

        let clean_style = BLUE.mix(0.7).stroke_width(2);
        chart
            .draw_series(LineSeries::new(
                t.iter().copied().zip(clean.iter().copied()),
                clean_style,
            ))?
            .label("sine wave")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], clean_style));

        chart
            .draw_series(LineSeries::new(
                t.iter().copied().zip(shaped.iter().copied()),
                RED.stroke_width(2),
            ))?
            .label("distorted sine wave")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

        let guide = GREEN.mix(0.5).stroke_width(1);
        chart
            .draw_series(dashed_line(
                (0.0, ceiling),
                (self.duration, ceiling),
                120,
                guide,
            ))?
            .label(format!("threshold (±{ceiling:.1})"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], guide));
        chart.draw_series(dashed_line(
            (0.0, -ceiling),
            (self.duration, -ceiling),
            120,
            guide,
        ))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(("sans-serif", 16))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        log_saved(path);
        Ok(())
    }
}

impl Default for SinePlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_lengths_and_span() {
        let (t, clean, shaped) = SinePlot::new().series(&Staircase::default());
        assert_eq!(t.len(), 1000);
        assert_eq!(clean.len(), 1000);
        assert_eq!(shaped.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[999], 2.0);
    }

    #[test]
    fn test_shaped_series_is_bounded_by_ceiling() {
        let shaper = Staircase::default();
        let (_, clean, shaped) = SinePlot::new().series(&shaper);
        let ceiling = shaper.table().ceiling();
        assert!(shaped.iter().all(|s| s.abs() <= ceiling));
        // Peaks of the clean sine are clipped
        let peak = clean.iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak > ceiling);
    }
}
