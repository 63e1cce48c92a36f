//! The analysed cascade.

use num_complex::Complex64;

use super::cascade::{assemble, order};
use super::validate::validate_circuit;
use super::AbcdMatrix;
use crate::analysis::{format_row, OutputDirective, OutputRow, Quantity, Terminations, TwoPortSolution};
use crate::components::Component;
use crate::error::Result;

/// A cascade together with everything derived from it.
///
/// All per-frequency data is computed in [`Circuit::new`]; the circuit is
/// read-only afterwards. Every table is aligned with [`Circuit::frequencies`].
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Components in cascade order
    components: Vec<Component>,
    /// Sweep frequencies (Hz)
    frequencies: Vec<f64>,
    /// Network matrix per frequency
    matrices: Vec<AbcdMatrix>,
    /// Derived quantities per frequency
    solutions: Vec<TwoPortSolution>,
}

impl Circuit {
    /// Order, assemble and derive a circuit.
    ///
    /// Reactive components must have been built over the same `frequencies`.
    pub fn new(components: Vec<Component>, frequencies: Vec<f64>, terms: Terminations) -> Result<Self> {
        let _span = tracing::info_span!(
            "circuit",
            n_components = components.len(),
            n_points = frequencies.len()
        )
        .entered();

        validate_circuit(&components, &terms)?;

        let components = order(components);
        for (position, component) in components.iter().enumerate() {
            tracing::debug!(position, %component, "cascade");
        }

        let matrices = assemble(&components, &frequencies)?;
        let solutions = frequencies
            .iter()
            .zip(&matrices)
            .map(|(&f, m)| TwoPortSolution::derive(f, m, &terms))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            components,
            frequencies,
            matrices,
            solutions,
        })
    }

    /// Components in cascade order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Sweep frequencies.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Network matrix at each frequency.
    pub fn matrices(&self) -> &[AbcdMatrix] {
        &self.matrices
    }

    /// Derived quantities at each frequency.
    pub fn solutions(&self) -> &[TwoPortSolution] {
        &self.solutions
    }

    /// One quantity across the sweep.
    pub fn quantity(&self, quantity: Quantity) -> Vec<Complex64> {
        self.solutions.iter().map(|s| s.get(quantity)).collect()
    }

    /// Render the requested outputs for every frequency.
    pub fn format_outputs(&self, directive: &OutputDirective) -> Vec<OutputRow> {
        for request in directive.requests() {
            if request.quantity().is_none() {
                tracing::warn!(request = %request.key, "unknown output quantity skipped");
            }
        }
        self.solutions.iter().map(|s| format_row(s, directive)).collect()
    }
}
