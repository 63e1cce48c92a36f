//! Frequency-independent elements: resistors and conductances.

use crate::circuit::{AbcdMatrix, NodeId, Pins, Placement};
use crate::error::{CascadeError, Result};

use super::ElementKind;

/// A resistor or conductance whose ABCD matrix does not vary with frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct LumpedElement {
    pub pins: Pins,
    /// Resistance in ohms or conductance in siemens, depending on `kind`
    pub value: f64,
    pub kind: ElementKind,
}

impl LumpedElement {
    /// Create a new lumped element.
    ///
    /// Fails with [`CascadeError::MisconnectedComponent`] when both pins are
    /// the same node, and with [`CascadeError::UnsupportedElementKind`] for
    /// reactive or unknown kinds.
    pub fn new(pin1: NodeId, pin2: NodeId, value: f64, kind: ElementKind) -> Result<Self> {
        let pins = Pins::new(pin1, pin2)?;
        if !matches!(kind, ElementKind::Resistive | ElementKind::Admittance) {
            return Err(CascadeError::UnsupportedElementKind {
                kind: kind.to_string(),
                variant: "a lumped element",
            });
        }
        Ok(Self { pins, value, kind })
    }

    /// Node used to place this element in the cascade.
    pub fn input_node(&self) -> NodeId {
        self.pins.input_node()
    }

    /// Series or shunt placement.
    pub fn placement(&self) -> Placement {
        self.pins.placement()
    }

    /// ABCD matrix of this element.
    ///
    /// The frequency is ignored; it is accepted so both element variants
    /// share one calling convention.
    pub fn matrix_at(&self, _frequency: f64) -> AbcdMatrix {
        let (series_z, shunt_y) = match self.kind {
            ElementKind::Admittance => (1.0 / self.value, self.value),
            _ => (self.value, 1.0 / self.value),
        };
        match self.placement() {
            Placement::Series => AbcdMatrix::real(1.0, series_z, 0.0, 1.0),
            Placement::Shunt => AbcdMatrix::real(1.0, 0.0, shunt_y, 1.0),
        }
    }
}
