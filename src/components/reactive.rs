//! Frequency-dependent elements: capacitors and inductors.
//!
//! The impedance of a reactive element is evaluated once for every
//! frequency of the sweep when the element is built:
//!
//! ```text
//! Capacitor:  Z(f) = 1 / (j·2πf·C)
//! Inductor:   Z(f) = j·2πf·L
//! ```
//!
//! Matrix generation afterwards is a table lookup.

use std::collections::HashMap;
use std::f64::consts::PI;

use num_complex::Complex64;

use crate::circuit::{AbcdMatrix, NodeId, Pins, Placement};
use crate::error::{CascadeError, Result};

use super::ElementKind;

/// Precomputed impedance of one element over a frequency sweep.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImpedanceTable {
    // keyed by `f64::to_bits` of the sweep frequency
    entries: HashMap<u64, Complex64>,
}

impl ImpedanceTable {
    fn build(frequencies: &[f64], impedance: impl Fn(f64) -> Complex64) -> Self {
        let entries = frequencies
            .iter()
            .map(|&f| (f.to_bits(), impedance(f)))
            .collect();
        Self { entries }
    }

    /// Impedance at `frequency`, if it belongs to the sweep.
    pub fn get(&self, frequency: f64) -> Option<Complex64> {
        self.entries.get(&frequency.to_bits()).copied()
    }

    /// Number of distinct frequencies in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A capacitor or inductor.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactiveElement {
    pub pins: Pins,
    /// Capacitance in farads or inductance in henries, depending on `kind`
    pub value: f64,
    pub kind: ElementKind,
    impedance: ImpedanceTable,
}

impl ReactiveElement {
    /// Create a new reactive element and tabulate its impedance over `frequencies`.
    pub fn new(
        pin1: NodeId,
        pin2: NodeId,
        value: f64,
        kind: ElementKind,
        frequencies: &[f64],
    ) -> Result<Self> {
        let pins = Pins::new(pin1, pin2)?;
        let impedance = match kind {
            ElementKind::Capacitive => ImpedanceTable::build(frequencies, |f| {
                Complex64::new(0.0, -1.0 / (2.0 * PI * f * value))
            }),
            ElementKind::Inductive => {
                ImpedanceTable::build(frequencies, |f| Complex64::new(0.0, 2.0 * PI * f * value))
            }
            _ => {
                return Err(CascadeError::UnsupportedElementKind {
                    kind: kind.to_string(),
                    variant: "a reactive element",
                })
            }
        };
        Ok(Self {
            pins,
            value,
            kind,
            impedance,
        })
    }

    /// Node used to place this element in the cascade.
    pub fn input_node(&self) -> NodeId {
        self.pins.input_node()
    }

    /// Series or shunt placement.
    pub fn placement(&self) -> Placement {
        self.pins.placement()
    }

    /// The precomputed impedance table.
    pub fn impedance(&self) -> &ImpedanceTable {
        &self.impedance
    }

    /// Impedance at a sweep frequency.
    pub fn impedance_at(&self, frequency: f64) -> Result<Complex64> {
        self.impedance
            .get(frequency)
            .ok_or(CascadeError::FrequencyOutsideSweep { frequency })
    }

    /// ABCD matrix at a sweep frequency.
    pub fn matrix_at(&self, frequency: f64) -> Result<AbcdMatrix> {
        let z = self.impedance_at(frequency)?;
        Ok(match self.placement() {
            Placement::Series => AbcdMatrix::series(z),
            Placement::Shunt => AbcdMatrix::shunt(z.inv()),
        })
    }
}
