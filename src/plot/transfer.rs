use std::path::Path;

use plotters::prelude::*;

use super::{dashed_line, log_saved, prepare_output};
use crate::dsp::Staircase;
use crate::Result;

/// Input/output transfer curve of the staircase shaper against `y = x`.
#[derive(Debug, Clone)]
pub struct TransferPlot {
    size: (u32, u32),
    points: usize,
}

impl TransferPlot {
    pub fn new() -> Self {
        Self {
            size: (1000, 800),
            points: 2000,
        }
    }

    /// Bitmap size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Number of input points sampled across [-1, 1].
    pub fn points(mut self, points: usize) -> Self {
        self.points = points.max(2);
        self
    }

    pub fn render(&self, shaper: &Staircase, path: &Path) -> Result<()> {
        prepare_output(path)?;
        let curve = shaper.transfer_curve(self.points);

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Distortion Transfer Curve", ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-1.0f32..1.0f32, -1.0f32..1.0f32)?;

        chart
            .configure_mesh()
            .x_desc("Input (x)")
            .y_desc("Output (y)")
            .axis_desc_style(("sans-serif", 18))
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.3))
            .draw()?;

        // Axis lines through the origin
        chart.draw_series([
            PathElement::new(vec![(-1.0, 0.0), (1.0, 0.0)], BLACK.stroke_width(1)),
            PathElement::new(vec![(0.0, -1.0), (0.0, 1.0)], BLACK.stroke_width(1)),
        ])?;

        chart
            .draw_series(LineSeries::new(curve, BLUE.stroke_width(3)))?
            .label("Distortion Effect")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(3)));

        let linear = RED.mix(0.5).stroke_width(2);
        chart
            .draw_series(dashed_line((-1.0, -1.0), (1.0, 1.0), 40, linear))?
            .label("Linear (y=x)")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], linear));

        chart
            .configure_series_labels()
            .label_font(("sans-serif", 16))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        log_saved(path);
        Ok(())
    }
}

impl Default for TransferPlot {
    fn default() -> Self {
        Self::new()
    }
}
