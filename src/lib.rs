//! # Cascade Core
//!
//! Frequency-domain analysis of cascaded two-port networks.
//!
//! This library provides:
//! - A tagged-section netlist format for ladder circuits of R, G, C and L elements
//! - ABCD (transmission) matrix assembly over a linear or logarithmic sweep
//! - Derivation of impedances, port voltages and currents, powers and gains
//! - A delimited-text results table with optional dB/phase columns
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Decoder for the netlist format
//! - [`components`] - Element models and their ABCD matrices
//! - [`circuit`] - Cascade ordering, assembly and validation
//! - [`analysis`] - Two-port derivation and output rendering
//! - [`export`] - Results table encoder
//! - [`driver`] - File-to-file pipeline with the empty-output fallback
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! cascade filter.net results.csv --precision 4
//! ```
//!
//! ### Library
//!
//! ```no_run
//! use cascade_core::{analyse, ExportConfig};
//!
//! let netlist = std::fs::read_to_string("filter.net")?;
//! let report = analyse(&netlist)?;
//! print!("{}", report.to_table(&ExportConfig::new())?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Analysis Method
//!
//! Each element is a two-port: a series element with impedance `Z` is
//! `[[1, Z], [0, 1]]`, a shunt element with admittance `Y` is
//! `[[1, 0], [Y, 1]]`. An element with a pin on node 0 is a shunt.
//!
//! Elements are sorted by input node and multiplied left to right into one
//! network matrix per frequency. The source and load terminations then give
//! every port quantity in closed form.

pub mod analysis;
pub mod circuit;
pub mod components;
pub mod driver;
pub mod dsl;
pub mod error;
pub mod export;

// Re-export main types for convenience
pub use circuit::Circuit;
pub use driver::{analyse, run, Report};
pub use error::{CascadeError, Result};
pub use export::ExportConfig;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCascade;
