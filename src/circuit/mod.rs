//! Cascade representation, assembly and validation.
//!
//! This module turns a list of components into a [`Circuit`]: components are
//! sorted into ladder order, their ABCD matrices are multiplied into one
//! network matrix per frequency, and the two-port quantities are derived.

mod abcd;
mod cascade;
mod network;
mod types;
mod validate;

pub use abcd::AbcdMatrix;
pub use cascade::{assemble, collect_components, order};
pub use network::Circuit;
pub use types::*;
pub use validate::validate_circuit;
