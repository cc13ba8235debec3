use std::ops::Range;
use std::path::Path;

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{log_saved, prepare_output};
use crate::analysis::stats::{range, zoom_window, ZOOM_SPAN};
use crate::io::TremoloRow;
use crate::Result;

type SampleAxes = Cartesian2d<RangedCoordf64, RangedCoordf64>;

/// Three stacked panels: input vs output, the LFO, and a zoomed output view.
#[derive(Debug, Clone)]
pub struct TremoloPlot {
    size: (u32, u32),
    zoom_span: usize,
}

/// Padded y-range covering every series, `-1..1` when there is no data.
fn y_bounds(ranges: &[Option<(f32, f32)>]) -> Range<f64> {
    let (lo, hi) = ranges
        .iter()
        .flatten()
        .fold(None, |acc: Option<(f32, f32)>, &(lo, hi)| match acc {
            None => Some((lo, hi)),
            Some((a, b)) => Some((a.min(lo), b.max(hi))),
        })
        .unwrap_or((-1.0, 1.0));

    let pad = ((hi - lo) as f64 * 0.05).max(0.05);
    (lo as f64 - pad)..(hi as f64 + pad)
}

fn x_bounds(rows: &[TremoloRow]) -> Range<f64> {
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) if last.sample > first.sample => {
            first.sample as f64..last.sample as f64
        }
        (Some(first), _) => first.sample as f64..first.sample as f64 + 1.0,
        _ => 0.0..1.0,
    }
}

/// Plottable points; non-finite values are dropped.
fn points(rows: &[TremoloRow], value: fn(&TremoloRow) -> f32) -> Vec<(f64, f64)> {
    rows.iter()
        .map(|r| (r.sample as f64, value(r)))
        .filter(|(_, v)| v.is_finite())
        .map(|(x, v)| (x, v as f64))
        .collect()
}

fn panel<'a, 'b>(
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    title: &str,
    y_desc: &str,
    x: Range<f64>,
    y: Range<f64>,
) -> Result<ChartContext<'a, BitMapBackend<'b>, SampleAxes>> {
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x, y)?;

    chart
        .configure_mesh()
        .x_desc("Sample Number")
        .y_desc(y_desc)
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.3))
        .draw()?;

    Ok(chart)
}

fn legend_box<'a, 'b: 'a>(
    chart: &mut ChartContext<'a, BitMapBackend<'b>, SampleAxes>,
) -> Result<()> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

impl TremoloPlot {
    pub fn new() -> Self {
        Self {
            size: (1400, 1000),
            zoom_span: ZOOM_SPAN,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Rows shown in the zoomed output panel.
    pub fn zoom_span(mut self, span: usize) -> Self {
        self.zoom_span = span.max(1);
        self
    }

    /// Row range the zoomed panel will show for `len` rows.
    pub fn zoom_range(&self, len: usize) -> Range<usize> {
        zoom_window(len, self.zoom_span)
    }

    pub fn render(&self, rows: &[TremoloRow], path: &Path) -> Result<()> {
        prepare_output(path)?;

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;
        let panels = root.split_evenly((3, 1));

        // Input vs output
        let input_range = range(rows.iter().map(|r| r.input));
        let output_range = range(rows.iter().map(|r| r.output));
        let mut chart = panel(
            &panels[0],
            "Tremolo Effect: Input vs Output",
            "Amplitude",
            x_bounds(rows),
            y_bounds(&[input_range, output_range]),
        )?;
        let input_style = BLUE.mix(0.7).stroke_width(1);
        chart
            .draw_series(LineSeries::new(points(rows, |r| r.input), input_style))?
            .label("Input (Ramp)")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], input_style));
        let output_style = RGBColor(255, 127, 14).mix(0.7).stroke_width(1);
        chart
            .draw_series(LineSeries::new(points(rows, |r| r.output), output_style))?
            .label("Output (Tremolo Applied)")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], output_style));
        legend_box(&mut chart)?;

        // LFO
        let tri_range = range(rows.iter().map(|r| r.tri_wave));
        let mut chart = panel(
            &panels[1],
            "Triangle Wave LFO (Low Frequency Oscillator)",
            "LFO Amplitude",
            x_bounds(rows),
            y_bounds(&[tri_range]),
        )?;
        chart
            .draw_series(LineSeries::new(
                points(rows, |r| r.tri_wave),
                GREEN.stroke_width(1),
            ))?
            .label("Triangle LFO")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(1)));
        legend_box(&mut chart)?;

        // Zoomed output
        let zoomed = &rows[self.zoom_range(rows.len())];
        let mut chart = panel(
            &panels[2],
            "Tremolo Output (Zoomed View)",
            "Amplitude",
            x_bounds(zoomed),
            y_bounds(&[range(zoomed.iter().map(|r| r.output))]),
        )?;
        chart
            .draw_series(LineSeries::new(
                points(zoomed, |r| r.output),
                RED.stroke_width(1),
            ))?
            .label("Output (Zoomed)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(1)));
        legend_box(&mut chart)?;

        root.present()?;
        log_saved(path);
        Ok(())
    }
}

impl Default for TremoloPlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sample: u64) -> TremoloRow {
        TremoloRow {
            sample,
            input: 0.0,
            output: 0.0,
            tri_wave: 0.0,
        }
    }

    #[test]
    fn test_y_bounds_cover_all_series() {
        let bounds = y_bounds(&[Some((-0.5, 0.25)), None, Some((0.0, 1.0))]);
        assert!(bounds.start < -0.5);
        assert!(bounds.end > 1.0);
    }

    #[test]
    fn test_y_bounds_without_data() {
        let bounds = y_bounds(&[None, None]);
        assert!(bounds.start < -1.0 && bounds.end > 1.0);
    }

    #[test]
    fn test_x_bounds() {
        let rows: Vec<TremoloRow> = (10..20).map(row).collect();
        assert_eq!(x_bounds(&rows), 10.0..19.0);
        assert_eq!(x_bounds(&rows[..1]), 10.0..11.0);
        assert_eq!(x_bounds(&[]), 0.0..1.0);
    }

    #[test]
    fn test_points_skip_non_finite_values() {
        let mut rows: Vec<TremoloRow> = (0..4).map(row).collect();
        rows[1].output = f32::INFINITY;
        rows[2].output = f32::NAN;
        rows[3].output = 0.5;

        let pts = points(&rows, |r| r.output);
        assert_eq!(pts, vec![(0.0, 0.0), (3.0, 0.5)]);
    }

    #[test]
    fn test_y_bounds_ignore_infinite_capture() {
        let mut rows: Vec<TremoloRow> = (0..3).map(row).collect();
        rows[0].output = f32::INFINITY;
        rows[2].output = f32::NEG_INFINITY;
        rows[1].output = 0.25;

        let bounds = y_bounds(&[range(rows.iter().map(|r| r.output))]);
        assert!(bounds.start.is_finite() && bounds.end.is_finite());
        assert!(bounds.start < 0.25 && bounds.end > 0.25);
    }

    #[test]
    fn test_zoom_range_follows_span() {
        let plot = TremoloPlot::new().zoom_span(500);
        assert_eq!(plot.zoom_range(4000), 1000..1500);
    }
}
