//! Boundary conditions and frequency sweeps.

use crate::error::{CascadeError, Result};

/// Source and load terminations of the two-port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terminations {
    /// Thevenin source voltage (V)
    pub source_voltage: f64,
    /// Source resistance (Ω)
    pub source_resistance: f64,
    /// Load resistance (Ω)
    pub load_resistance: f64,
}

impl Terminations {
    /// Create a new set of terminations.
    pub fn new(source_voltage: f64, source_resistance: f64, load_resistance: f64) -> Self {
        Self {
            source_voltage,
            source_resistance,
            load_resistance,
        }
    }
}

/// Frequency sweep description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepSpec {
    /// `count` points evenly spaced from `start` to `end` (Hz)
    Linear { start: f64, end: f64, count: usize },
    /// `count` points evenly spaced in log10 from `start` to `end` (Hz)
    Logarithmic { start: f64, end: f64, count: usize },
}

impl SweepSpec {
    /// Number of frequency points.
    pub fn count(&self) -> usize {
        match *self {
            SweepSpec::Linear { count, .. } | SweepSpec::Logarithmic { count, .. } => count,
        }
    }

    /// Generate the frequency points, endpoints included.
    pub fn frequencies(&self) -> Result<Vec<f64>> {
        match *self {
            SweepSpec::Linear { start, end, count } => {
                check_endpoints(start, end, count)?;
                Ok(linspace(start, end, count))
            }
            SweepSpec::Logarithmic { start, end, count } => {
                check_endpoints(start, end, count)?;
                if start <= 0.0 || end <= 0.0 {
                    return Err(CascadeError::invalid_sweep(format!(
                        "logarithmic sweep needs positive endpoints, got {start} and {end}"
                    )));
                }
                Ok(linspace(start.log10(), end.log10(), count)
                    .into_iter()
                    .map(|exponent| 10f64.powf(exponent))
                    .collect())
            }
        }
    }
}

fn check_endpoints(start: f64, end: f64, count: usize) -> Result<()> {
    if count == 0 {
        return Err(CascadeError::invalid_sweep("sweep needs at least one point"));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(CascadeError::invalid_sweep(format!(
            "sweep endpoints must be finite, got {start} and {end}"
        )));
    }
    Ok(())
}

fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    // Land exactly on the requested end point
    points[count - 1] = end;
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_sweep() {
        let f = SweepSpec::Linear { start: 10.0, end: 100.0, count: 10 }.frequencies().unwrap();
        assert_eq!(f.len(), 10);
        assert_eq!(f[0], 10.0);
        assert_relative_eq!(f[1], 20.0);
        assert_eq!(f[9], 100.0);
    }

    #[test]
    fn test_single_point_sweep() {
        let f = SweepSpec::Linear { start: 1000.0, end: 5000.0, count: 1 }.frequencies().unwrap();
        assert_eq!(f, vec![1000.0]);
    }

    #[test]
    fn test_logarithmic_sweep() {
        let f = SweepSpec::Logarithmic { start: 10.0, end: 1e6, count: 6 }.frequencies().unwrap();
        assert_eq!(f.len(), 6);
        assert_relative_eq!(f[0], 10.0, max_relative = 1e-12);
        assert_relative_eq!(f[2], 1000.0, max_relative = 1e-12);
        assert_relative_eq!(f[5], 1e6, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_sweeps() {
        assert!(SweepSpec::Linear { start: 1.0, end: 2.0, count: 0 }.frequencies().is_err());
        assert!(SweepSpec::Logarithmic { start: 0.0, end: 100.0, count: 5 }.frequencies().is_err());
        assert!(SweepSpec::Linear { start: f64::NAN, end: 2.0, count: 3 }.frequencies().is_err());
    }
}
