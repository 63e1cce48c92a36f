//! Abstract Syntax Tree types for the netlist format.

use crate::analysis::{OutputDirective, SweepSpec, Terminations};
use crate::error::{CascadeError, Result};

/// Complete AST representation of a parsed netlist.
#[derive(Debug, Clone, Default)]
pub struct NetlistAst {
    /// Component lines of `<CIRCUIT>`, in file order
    pub components: Vec<ComponentDef>,
    /// Assignments of `<TERMS>`, in file order
    pub terms: Vec<TermDef>,
    /// Requests of `<OUTPUT>`
    pub outputs: OutputDirective,
}

/// A component line from `<CIRCUIT>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDef {
    /// First pin node
    pub pin1: u32,
    /// Second pin node
    pub pin2: u32,
    /// Element symbol as written (R, G, C, L, ...)
    pub kind: String,
    /// Element value with any SI suffix applied
    pub value: f64,
    /// Source line number for error reporting
    pub line: usize,
}

/// A `NAME=value` assignment from `<TERMS>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TermDef {
    pub name: String,
    pub value: f64,
    pub line: usize,
}

impl NetlistAst {
    /// Create a new empty netlist AST.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a term by case-insensitive name. A later assignment overrides an earlier one.
    pub fn term(&self, name: &str) -> Option<f64> {
        self.terms
            .iter()
            .rev()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .map(|t| t.value)
    }

    fn require(&self, name: &'static str) -> Result<f64> {
        self.term(name).ok_or(CascadeError::MissingTerm { name })
    }

    /// Source voltage, source resistance and load resistance.
    pub fn terminations(&self) -> Result<Terminations> {
        Ok(Terminations::new(
            self.require("VT")?,
            self.require("RS")?,
            self.require("RL")?,
        ))
    }

    /// The sweep described by the terms.
    ///
    /// `Fstart`/`Fend` select a linear sweep and take precedence over
    /// `LFstart`/`LFend`, which select a logarithmic one.
    pub fn sweep(&self) -> Result<SweepSpec> {
        let linear = self.term("Fstart").is_some() || self.term("Fend").is_some();
        let logarithmic = self.term("LFstart").is_some() || self.term("LFend").is_some();

        if linear {
            Ok(SweepSpec::Linear {
                start: self.require("Fstart")?,
                end: self.require("Fend")?,
                count: self.point_count()?,
            })
        } else if logarithmic {
            Ok(SweepSpec::Logarithmic {
                start: self.require("LFstart")?,
                end: self.require("LFend")?,
                count: self.point_count()?,
            })
        } else {
            Err(CascadeError::MissingTerm { name: "Fstart" })
        }
    }

    fn point_count(&self) -> Result<usize> {
        let n = self.require("Nfreqs")?;
        if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
            return Err(CascadeError::InvalidTerm {
                name: "Nfreqs".to_string(),
                message: format!("expected a non-negative integer, got {}", n),
            });
        }
        Ok(n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ast_with(terms: &[(&str, f64)]) -> NetlistAst {
        NetlistAst {
            terms: terms
                .iter()
                .enumerate()
                .map(|(i, (name, value))| TermDef {
                    name: name.to_string(),
                    value: *value,
                    line: i + 1,
                })
                .collect(),
            ..NetlistAst::new()
        }
    }

    #[test]
    fn test_terminations() {
        let ast = ast_with(&[("vt", 5.0), ("RS", 50.0), ("Rl", 75.0)]);
        let t = ast.terminations().unwrap();
        assert_eq!(t.source_voltage, 5.0);
        assert_eq!(t.source_resistance, 50.0);
        assert_eq!(t.load_resistance, 75.0);
    }

    #[test]
    fn test_missing_termination() {
        let ast = ast_with(&[("VT", 5.0), ("RS", 50.0)]);
        assert!(matches!(ast.terminations(), Err(CascadeError::MissingTerm { name: "RL" })));
    }

    #[test]
    fn test_linear_takes_precedence() {
        let ast = ast_with(&[
            ("LFstart", 1.0),
            ("LFend", 100.0),
            ("Fstart", 10.0),
            ("Fend", 20.0),
            ("Nfreqs", 3.0),
        ]);
        assert_eq!(
            ast.sweep().unwrap(),
            SweepSpec::Linear {
                start: 10.0,
                end: 20.0,
                count: 3
            }
        );
    }

    #[test]
    fn test_logarithmic_sweep() {
        let ast = ast_with(&[("LFstart", 1.0), ("LFend", 1e3), ("Nfreqs", 4.0)]);
        assert_eq!(
            ast.sweep().unwrap(),
            SweepSpec::Logarithmic {
                start: 1.0,
                end: 1e3,
                count: 4
            }
        );
    }

    #[test]
    fn test_sweep_errors() {
        assert!(matches!(
            ast_with(&[("Nfreqs", 4.0)]).sweep(),
            Err(CascadeError::MissingTerm { name: "Fstart" })
        ));
        assert!(matches!(
            ast_with(&[("Fstart", 1.0), ("Fend", 2.0)]).sweep(),
            Err(CascadeError::MissingTerm { name: "Nfreqs" })
        ));
        assert!(matches!(
            ast_with(&[("Fstart", 1.0), ("Fend", 2.0), ("Nfreqs", 2.5)]).sweep(),
            Err(CascadeError::InvalidTerm { .. })
        ));
    }

    #[test]
    fn test_later_term_overrides() {
        let ast = ast_with(&[("RL", 50.0), ("RL", 600.0)]);
        assert_eq!(ast.term("rl"), Some(600.0));
    }
}
