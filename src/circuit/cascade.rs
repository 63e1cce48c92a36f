//! Cascade assembly: component ordering and matrix multiplication.

use crate::components::Component;
use crate::dsl::ComponentDef;
use crate::error::Result;

use super::{AbcdMatrix, Placement};

/// Build components from netlist definitions, dropping misconnected ones.
///
/// A component whose pins coincide is logged and skipped; every other
/// construction error aborts the build.
pub fn collect_components(defs: &[ComponentDef], frequencies: &[f64]) -> Result<Vec<Component>> {
    let mut components = Vec::with_capacity(defs.len());
    for def in defs {
        match Component::from_def(def, frequencies) {
            Ok(component) => components.push(component),
            Err(e) if e.is_recoverable() => {
                tracing::warn!(line = def.line, kind = %def.kind, "{e}; component removed");
            }
            Err(e) => return Err(e),
        }
    }
    tracing::debug!(kept = components.len(), dropped = defs.len() - components.len(), "components built");
    Ok(components)
}

/// Sort components into cascade order.
///
/// Components are ordered by input node. Among components sharing an input
/// node, shunt elements come before series elements, so a shunt hanging off
/// node `n` is applied before the series element that leaves `n`. The sort
/// is stable, keeping netlist order for exact ties.
pub fn order(mut components: Vec<Component>) -> Vec<Component> {
    components.sort_by_key(|c| (c.input_node(), c.placement() == Placement::Series));
    components
}

/// Multiply the ordered components into one network matrix per frequency.
///
/// For each frequency the running product starts at the identity and is
/// right-multiplied by each component in turn (`M = M · ABCD_i`).
pub fn assemble(ordered: &[Component], frequencies: &[f64]) -> Result<Vec<AbcdMatrix>> {
    frequencies
        .iter()
        .map(|&f| {
            ordered
                .iter()
                .try_fold(AbcdMatrix::identity(), |m, c| c.matrix_at(f).map(|abcd| m * abcd))
        })
        .collect()
}
