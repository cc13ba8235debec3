//! Summary statistics for captured signals.

use std::fmt;
use std::ops::Range;

use tracing::warn;

use crate::io::TremoloRow;

/// Output rows used to estimate modulation depth.
pub const DEPTH_SECTION: Range<usize> = 10_000..20_000;

/// Width of the zoomed output view.
pub const ZOOM_SPAN: usize = 10_000;

/// `(min, max)` of the finite values, or `None` if there are none.
pub fn range(values: impl IntoIterator<Item = f32>) -> Option<(f32, f32)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Window starting a quarter of the way in, `span` long, clipped to `len`.
pub fn zoom_window(len: usize, span: usize) -> Range<usize> {
    let start = len / 4;
    let end = start.saturating_add(span).min(len);
    start..end
}

/// Peak-to-trough depth of a section in percent.
///
/// `((max - min) / (max + min)) * 100`, `0` when `max + min` is zero and
/// `None` for an empty section.
pub fn modulation_depth(section: &[f32]) -> Option<f32> {
    let (min, max) = range(section.iter().copied())?;
    let sum = max + min;
    if sum == 0.0 {
        Some(0.0)
    } else {
        Some((max - min) / sum * 100.0)
    }
}

/// Ranges and depth estimate for a tremolo capture.
#[derive(Debug, Clone, PartialEq)]
pub struct TremoloReport {
    pub total_samples: usize,
    pub input_range: Option<(f32, f32)>,
    pub output_range: Option<(f32, f32)>,
    pub tri_wave_range: Option<(f32, f32)>,
    pub modulation_depth: Option<f32>,
}

impl TremoloReport {
    pub fn from_rows(rows: &[TremoloRow]) -> Self {
        let start = DEPTH_SECTION.start.min(rows.len());
        let end = DEPTH_SECTION.end.min(rows.len());
        let section: Vec<f32> = rows[start..end].iter().map(|r| r.output).collect();

        if section.is_empty() && !rows.is_empty() {
            warn!(
                rows = rows.len(),
                "table too short for a modulation depth estimate"
            );
        }

        Self {
            total_samples: rows.len(),
            input_range: range(rows.iter().map(|r| r.input)),
            output_range: range(rows.iter().map(|r| r.output)),
            tri_wave_range: range(rows.iter().map(|r| r.tri_wave)),
            modulation_depth: modulation_depth(&section),
        }
    }
}

fn write_range(f: &mut fmt::Formatter<'_>, label: &str, r: Option<(f32, f32)>) -> fmt::Result {
    match r {
        Some((lo, hi)) => writeln!(f, "{label}: [{lo}, {hi}]"),
        None => writeln!(f, "{label}: n/a"),
    }
}

impl fmt::Display for TremoloReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Tremolo Analysis ===")?;
        writeln!(f, "Total samples: {}", self.total_samples)?;
        write_range(f, "Input range", self.input_range)?;
        write_range(f, "Output range", self.output_range)?;
        write_range(f, "Triangle wave range", self.tri_wave_range)?;
        match self.modulation_depth {
            Some(depth) => write!(f, "Estimated modulation depth: {depth:.2}%"),
            None => write!(f, "Estimated modulation depth: n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sample: u64, output: f32) -> TremoloRow {
        TremoloRow {
            sample,
            input: output * 2.0,
            output,
            tri_wave: 0.0,
        }
    }

    #[test]
    fn test_range_skips_non_finite() {
        assert_eq!(range([0.5, f32::NAN, -0.25, 1.0]), Some((-0.25, 1.0)));
        assert_eq!(range([f32::INFINITY, 0.5, f32::NEG_INFINITY]), Some((0.5, 0.5)));
        assert_eq!(range(Vec::<f32>::new()), None);
        assert_eq!(range([f32::NAN, f32::INFINITY]), None);
    }

    #[test]
    fn test_zoom_window() {
        assert_eq!(zoom_window(96_000, ZOOM_SPAN), 24_000..34_000);
        // Short tables clip at the end
        assert_eq!(zoom_window(100, ZOOM_SPAN), 25..100);
        assert_eq!(zoom_window(0, ZOOM_SPAN), 0..0);
    }

    #[test]
    fn test_modulation_depth() {
        // max 0.75, min 0.25 -> 0.5 / 1.0
        assert_eq!(modulation_depth(&[0.25, 0.5, 0.75]), Some(50.0));
        assert_eq!(modulation_depth(&[-0.5, 0.5]), Some(0.0));
        assert_eq!(modulation_depth(&[]), None);
        assert_eq!(modulation_depth(&[0.25, f32::INFINITY, 0.75]), Some(50.0));
    }

    #[test]
    fn test_report_uses_depth_section() {
        let mut rows: Vec<TremoloRow> = (0..25_000).map(|i| row(i, 0.5)).collect();
        // Outside the section: ignored by the depth estimate
        rows[5].output = 10.0;
        rows[12_000].output = 0.9;
        rows[12_001].output = 0.1;

        let report = TremoloReport::from_rows(&rows);
        assert_eq!(report.total_samples, 25_000);
        assert_eq!(report.output_range, Some((0.1, 10.0)));
        let depth = report.modulation_depth.unwrap();
        assert!((depth - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_short_report_has_no_depth() {
        let rows: Vec<TremoloRow> = (0..100).map(|i| row(i, 0.5)).collect();
        let report = TremoloReport::from_rows(&rows);
        assert_eq!(report.modulation_depth, None);
        assert!(report.to_string().ends_with("Estimated modulation depth: n/a"));
    }

    #[test]
    fn test_report_display() {
        let rows: Vec<TremoloRow> = (0..20_000).map(|i| row(i, 0.25)).collect();
        let text = TremoloReport::from_rows(&rows).to_string();
        assert!(text.starts_with("=== Tremolo Analysis ===\nTotal samples: 20000\n"));
        assert!(text.contains("Input range: [0.5, 0.5]"));
        assert!(text.contains("Estimated modulation depth: 0.00%"));
    }
}
