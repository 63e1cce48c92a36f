//! Circuit validation.

use crate::analysis::Terminations;
use crate::components::Component;
use crate::error::{CascadeError, Result};

/// Validate a built component list and its terminations before assembly.
///
/// Checks:
/// - At least one component survived construction
/// - Terminal constants are finite
pub fn validate_circuit(components: &[Component], terms: &Terminations) -> Result<()> {
    if components.is_empty() {
        return Err(CascadeError::EmptyCircuit);
    }

    for (name, value) in [
        ("VT", terms.source_voltage),
        ("RS", terms.source_resistance),
        ("RL", terms.load_resistance),
    ] {
        if !value.is_finite() {
            return Err(CascadeError::InvalidTerm {
                name: name.to_string(),
                message: format!("must be finite, got {value}"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::NodeId;
    use crate::components::{ElementKind, LumpedElement};

    fn terms() -> Terminations {
        Terminations::new(5.0, 50.0, 50.0)
    }

    #[test]
    fn test_empty_circuit_rejected() {
        assert!(matches!(validate_circuit(&[], &terms()), Err(CascadeError::EmptyCircuit)));
    }

    #[test]
    fn test_non_finite_term_rejected() {
        let r = Component::Lumped(LumpedElement::new(NodeId(1), NodeId(2), 50.0, ElementKind::Resistive).unwrap());
        let bad = Terminations::new(5.0, f64::NAN, 50.0);
        assert!(validate_circuit(&[r.clone()], &bad).is_err());
        assert!(validate_circuit(&[r], &terms()).is_ok());
    }
}
