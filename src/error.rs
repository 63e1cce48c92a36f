//! Error types for the cascade analyser.
//!
//! This module provides a unified error type [`CascadeError`] that covers
//! all error conditions that can occur during netlist decoding, circuit
//! construction, parameter derivation and result export.

use thiserror::Error;

/// Result type alias using [`CascadeError`].
pub type Result<T> = std::result::Result<T, CascadeError>;

/// Unified error type for all cascade operations.
#[derive(Error, Debug)]
pub enum CascadeError {
    // ============ Netlist Decoding Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// A required `<SECTION>` block is absent
    #[error("Missing required section <{section}>")]
    MissingSection { section: &'static str },

    /// A required terminal constant is absent from `<TERMS>`
    #[error("Missing required term '{name}'")]
    MissingTerm { name: &'static str },

    /// A terminal constant has an unusable value
    #[error("Invalid term '{name}': {message}")]
    InvalidTerm { name: String, message: String },

    /// Invalid component definition
    #[error("Invalid component at line {line}: {message}")]
    InvalidComponent { line: usize, message: String },

    /// Frequency sweep cannot be generated
    #[error("Invalid frequency sweep: {message}")]
    InvalidSweep { message: String },

    // ============ Circuit Construction Errors ============
    /// Both pins of a component land on the same node
    #[error("Component misconnected: both pins on node {node}")]
    MisconnectedComponent { node: u32 },

    /// Element kind is not handled by the variant that tried to build it
    #[error("Element kind '{kind}' is not supported by {variant}")]
    UnsupportedElementKind {
        kind: String,
        variant: &'static str,
    },

    /// Element kind no variant knows how to model
    #[error("Unknown element kind '{kind}' at line {line}")]
    UnknownElementKind { kind: String, line: usize },

    /// Matrix requested at a frequency the impedance table was not built for
    #[error("Frequency {frequency} Hz is outside the component's sweep")]
    FrequencyOutsideSweep { frequency: f64 },

    /// No valid components survived construction
    #[error("Circuit has no valid components")]
    EmptyCircuit,

    // ============ Derivation Errors ============
    /// A derived quantity came out infinite or NaN
    #[error("Derivation fault: {quantity} is not finite at {frequency} Hz")]
    DerivationFault {
        quantity: &'static str,
        frequency: f64,
    },

    // ============ I/O Errors ============
    /// Error reading the netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the results table
    #[error("Failed to write results: {0}")]
    OutputWriteError(#[from] std::io::Error),
}

impl CascadeError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidComponent {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid sweep error
    pub fn invalid_sweep(message: impl Into<String>) -> Self {
        Self::InvalidSweep {
            message: message.into(),
        }
    }

    /// Whether the circuit builder recovers from this error by dropping the component.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MisconnectedComponent { .. })
    }
}
