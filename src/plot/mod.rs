//! PNG chart rendering.
//!
//! Each chart type is a small settings struct with builder setters and a
//! `render` method that writes one bitmap. Parent directories are created on
//! demand; every saved file is logged at `info`.

mod sine;
mod transfer;
mod tremolo;

use std::path::{Path, PathBuf};

use plotters::element::PathElement;
use plotters::style::ShapeStyle;
use tracing::info;

use crate::dsp::Staircase;
use crate::{Error, Result};

pub use sine::SinePlot;
pub use transfer::TransferPlot;
pub use tremolo::TremoloPlot;

pub const TRANSFER_CURVE_FILE: &str = "distortion_transfer_curve.png";
pub const SINE_DISTORTION_FILE: &str = "sine_wave_distortion.png";
pub const TREMOLO_ANALYSIS_FILE: &str = "tremolo_analysis.png";

/// Create the directory that will hold `path`.
pub(crate) fn prepare_output(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}

pub(crate) fn log_saved(path: &Path) {
    info!(path = %path.display(), "saved chart");
}

/// Split a straight line into `dashes` visible segments with equal gaps.
pub(crate) fn dashed_line(
    from: (f32, f32),
    to: (f32, f32),
    dashes: usize,
    style: ShapeStyle,
) -> Vec<PathElement<(f32, f32)>> {
    let pieces = (dashes * 2).max(1) - 1;
    let lerp = |t: f32| (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
    (0..pieces)
        .step_by(2)
        .map(|i| {
            let a = i as f32 / pieces as f32;
            let b = (i + 1) as f32 / pieces as f32;
            PathElement::new(vec![lerp(a), lerp(b)], style)
        })
        .collect()
}

/// Render the transfer curve and the distorted sine into `out_dir`.
///
/// Returns the two written paths in that order.
pub fn render_distortion_charts(
    shaper: &Staircase,
    out_dir: &Path,
    points: usize,
) -> Result<[PathBuf; 2]> {
    let transfer_path = out_dir.join(TRANSFER_CURVE_FILE);
    TransferPlot::new()
        .points(points)
        .render(shaper, &transfer_path)?;

    let sine_path = out_dir.join(SINE_DISTORTION_FILE);
    SinePlot::new().render(shaper, &sine_path)?;

    Ok([transfer_path, sine_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::BLACK;

    #[test]
    fn test_dashed_line_segments() {
        let dashes = dashed_line((-1.0, -1.0), (1.0, 1.0), 10, BLACK.into());
        assert_eq!(dashes.len(), 10);
    }

    #[test]
    fn test_single_dash_is_solid() {
        let dashes = dashed_line((0.0, 0.0), (1.0, 0.0), 1, BLACK.into());
        assert_eq!(dashes.len(), 1);
    }

    #[test]
    fn test_prepare_output_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deeper/chart.png");
        prepare_output(&target).unwrap();
        assert!(target.parent().unwrap().is_dir());
    }
}
