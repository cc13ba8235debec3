//! Test-signal helpers: evenly spaced axes and a sine source.

use std::f32::consts::TAU;

/// `n` evenly spaced values from `start` to `end`, both ends included.
///
/// `n == 0` gives an empty vector and `n == 1` gives `[start]`.
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            let mut values: Vec<f32> = (0..n).map(|i| start + i as f32 * step).collect();
            // Pin the last point so rounding never overshoots the range
            values[n - 1] = end;
            values
        }
    }
}

/// `sin(2π f t)` evaluated at each time point (seconds).
pub fn sine_wave(times: &[f32], frequency: f32) -> Vec<f32> {
    times.iter().map(|&t| (TAU * frequency * t).sin()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_endpoints() {
        let xs = linspace(-1.0, 1.0, 5);
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
    }

    #[test]
    fn test_linspace_is_monotonic() {
        let xs = linspace(0.0, 2.0, 1000);
        assert_eq!(xs.len(), 1000);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(xs[999], 2.0);
    }

    #[test]
    fn test_sine_wave_quarter_period() {
        let ys = sine_wave(&[0.0, 0.25, 0.5, 0.75], 1.0);
        assert!(ys[0].abs() < 1e-6);
        assert!((ys[1] - 1.0).abs() < 1e-6);
        assert!(ys[2].abs() < 1e-5);
        assert!((ys[3] + 1.0).abs() < 1e-6);
    }
}
