//! Two-port parameter derivation and output rendering.
//!
//! ## Quantities
//!
//! For every sweep frequency the network matrix is combined with the
//! source and load terminations to give eleven quantities: `Zin`, `Zout`,
//! `Vin`, `Iin`, `Iout`, `Vout`, `Pin`, `Pout`, `Av`, `Ai`, `Ap`.
//!
//! ## Output directive
//!
//! An [`OutputDirective`] selects quantities by name. A unit token containing
//! `dB` renders the quantity as magnitude (dB) and phase (radians), using a
//! multiplier of 10 for power-like quantities and 20 for the rest.

mod derive;
mod directive;
mod format;
mod quantity;
mod terms;

pub use derive::TwoPortSolution;
pub use directive::{DecibelScale, OutputDirective, OutputRequest};
pub use format::{format_row, render, to_decibels, OutputRow, OutputValue};
pub use quantity::Quantity;
pub use terms::{SweepSpec, Terminations};
