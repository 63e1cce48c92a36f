//! Component models for cascade analysis.
//!
//! This module provides models for the supported two-terminal elements:
//! - Lumped (frequency-independent): Resistor `R`, Conductance `G`
//! - Reactive (frequency-dependent): Capacitor `C`, Inductor `L`
//!
//! Every element produces a 2×2 ABCD matrix at a given frequency. Whether it
//! is modeled in series or in shunt depends only on whether one of its pins
//! is the ground node `0`.

mod lumped;
mod reactive;

pub use lumped::LumpedElement;
pub use reactive::{ImpedanceTable, ReactiveElement};

use std::fmt;

use crate::circuit::{AbcdMatrix, NodeId, Pins, Placement};
use crate::dsl::ComponentDef;
use crate::error::{CascadeError, Result};

/// Classification of an element symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Resistor, value in ohms
    Resistive,
    /// Conductance, value in siemens
    Admittance,
    /// Capacitor, value in farads
    Capacitive,
    /// Inductor, value in henries
    Inductive,
    /// Anything else
    Unknown,
}

impl ElementKind {
    /// Classify a netlist element symbol (`R`, `G`, `C`, `L`).
    pub fn classify(symbol: &str) -> Self {
        match symbol.to_ascii_uppercase().as_str() {
            "R" => Self::Resistive,
            "G" => Self::Admittance,
            "C" => Self::Capacitive,
            "L" => Self::Inductive,
            _ => Self::Unknown,
        }
    }

    /// Whether the element's impedance varies with frequency.
    pub fn is_frequency_dependent(&self) -> bool {
        matches!(self, Self::Capacitive | Self::Inductive)
    }

    /// The netlist symbol for this kind.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Resistive => "R",
            Self::Admittance => "G",
            Self::Capacitive => "C",
            Self::Inductive => "L",
            Self::Unknown => "?",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A cascade element.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Lumped(LumpedElement),
    Reactive(ReactiveElement),
}

impl Component {
    /// Create a component from a netlist definition.
    ///
    /// Pins are checked before the element symbol, so a misconnected
    /// element is always [`CascadeError::MisconnectedComponent`] whatever its
    /// kind. `frequencies` is only consulted for reactive kinds.
    pub fn from_def(def: &ComponentDef, frequencies: &[f64]) -> Result<Self> {
        let Pins { pin1, pin2 } = Pins::new(NodeId(def.pin1), NodeId(def.pin2))?;

        let kind = ElementKind::classify(&def.kind);
        if kind == ElementKind::Unknown {
            return Err(CascadeError::UnknownElementKind {
                kind: def.kind.clone(),
                line: def.line,
            });
        }

        if kind.is_frequency_dependent() {
            Ok(Component::Reactive(ReactiveElement::new(
                pin1,
                pin2,
                def.value,
                kind,
                frequencies,
            )?))
        } else {
            Ok(Component::Lumped(LumpedElement::new(pin1, pin2, def.value, kind)?))
        }
    }

    /// The element's pin pair.
    pub fn pins(&self) -> Pins {
        match self {
            Component::Lumped(e) => e.pins,
            Component::Reactive(e) => e.pins,
        }
    }

    /// The element's kind.
    pub fn kind(&self) -> ElementKind {
        match self {
            Component::Lumped(e) => e.kind,
            Component::Reactive(e) => e.kind,
        }
    }

    /// The element's value in SI base units.
    pub fn value(&self) -> f64 {
        match self {
            Component::Lumped(e) => e.value,
            Component::Reactive(e) => e.value,
        }
    }

    /// Node used to place this element in the cascade.
    pub fn input_node(&self) -> NodeId {
        match self {
            Component::Lumped(e) => e.input_node(),
            Component::Reactive(e) => e.input_node(),
        }
    }

    /// Series or shunt placement.
    pub fn placement(&self) -> Placement {
        self.pins().placement()
    }

    /// ABCD matrix at `frequency`.
    pub fn matrix_at(&self, frequency: f64) -> Result<AbcdMatrix> {
        match self {
            Component::Lumped(e) => Ok(e.matrix_at(frequency)),
            Component::Reactive(e) => e.matrix_at(frequency),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {:e}", self.kind(), self.pins(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(pin1: u32, pin2: u32, kind: &str, value: f64) -> ComponentDef {
        ComponentDef {
            pin1,
            pin2,
            kind: kind.to_string(),
            value,
            line: 1,
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(ElementKind::classify("R"), ElementKind::Resistive);
        assert_eq!(ElementKind::classify("g"), ElementKind::Admittance);
        assert_eq!(ElementKind::classify("C"), ElementKind::Capacitive);
        assert_eq!(ElementKind::classify("L"), ElementKind::Inductive);
        assert_eq!(ElementKind::classify("Q"), ElementKind::Unknown);
        assert!(ElementKind::Capacitive.is_frequency_dependent());
        assert!(!ElementKind::Admittance.is_frequency_dependent());
    }

    #[test]
    fn test_from_def_dispatches_by_kind() {
        let freqs = [10.0, 100.0];
        assert!(matches!(
            Component::from_def(&def(1, 2, "R", 50.0), &freqs),
            Ok(Component::Lumped(_))
        ));
        assert!(matches!(
            Component::from_def(&def(2, 0, "C", 1e-9), &freqs),
            Ok(Component::Reactive(_))
        ));
    }

    #[test]
    fn test_from_def_unknown_kind() {
        let err = Component::from_def(&def(1, 2, "X", 1.0), &[1.0]).unwrap_err();
        assert!(matches!(err, CascadeError::UnknownElementKind { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_from_def_misconnected() {
        let err = Component::from_def(&def(2, 2, "L", 1e-3), &[1.0]).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_from_def_checks_pins_before_kind() {
        let err = Component::from_def(&def(3, 3, "X", 10.0), &[1.0]).unwrap_err();
        assert!(matches!(err, CascadeError::MisconnectedComponent { node: 3 }));
    }

    #[test]
    fn test_display() {
        let c = Component::from_def(&def(1, 2, "R", 50.0), &[1.0]).unwrap();
        assert_eq!(c.to_string(), "R N1-N2 = 5e1");
    }
}
