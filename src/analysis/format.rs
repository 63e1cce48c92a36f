//! Rendering derived quantities per an output directive.

use num_complex::Complex64;

use super::{DecibelScale, OutputDirective, Quantity, TwoPortSolution};

/// One rendered output value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputValue {
    /// Raw complex value
    Complex(Complex64),
    /// Magnitude in dB and phase in radians
    Decibel { mag: f64, phase: f64 },
}

/// Rendered values at one frequency, in directive order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub frequency: f64,
    pub values: Vec<(String, OutputValue)>,
}

impl OutputRow {
    /// Look up a value by its request key.
    pub fn get(&self, key: &str) -> Option<&OutputValue> {
        self.values.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// Convert a value to `{mag, phase}` form.
///
/// The magnitude is `multiplier · log10(|value / reference|)`, or negative
/// infinity for a zero value.
pub fn to_decibels(value: Complex64, multiplier: f64, scale: DecibelScale) -> OutputValue {
    let scaled = value / scale.reference;
    let magnitude = scaled.norm();
    let mag = if magnitude > 0.0 {
        multiplier * magnitude.log10()
    } else {
        f64::NEG_INFINITY
    };
    OutputValue::Decibel {
        mag,
        phase: scaled.arg(),
    }
}

/// Render one quantity according to its request unit.
pub fn render(value: Complex64, quantity: Quantity, unit: &str) -> OutputValue {
    match DecibelScale::from_unit(unit) {
        Some(scale) => to_decibels(value, quantity.decibel_multiplier(), scale),
        None => OutputValue::Complex(value),
    }
}

/// Render the requested quantities of one solution. Unknown names are skipped.
pub fn format_row(solution: &TwoPortSolution, directive: &OutputDirective) -> OutputRow {
    let values = directive
        .resolved()
        .map(|(request, quantity)| {
            (
                request.key.clone(),
                render(solution.get(quantity), quantity, &request.unit),
            )
        })
        .collect();
    OutputRow {
        frequency: solution.frequency,
        values,
    }
}
