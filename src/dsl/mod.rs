//! Netlist decoder.
//!
//! A netlist is a plain text file made of three tagged sections. Everything
//! outside the sections is ignored, as is anything after a `#`.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { section | free_text }
//! section     = '<' NAME '>' { line } '</' NAME '>'
//!
//! circuit_line = pair pair pair          # n1, n2 and one element, any order
//! terms_line   = { pair }
//! output_line  = quantity [unit]
//!
//! pair        = identifier '=' value
//! value       = number [unit_suffix] | number ' ' unit_suffix
//! number      = ['-'|'+'] digit* ['.' digit*] [('e'|'E') ['-'|'+'] digit+]
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! identifier  = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! Section names and keys are case-insensitive. Quantity names are not.
//!
//! # Sections
//!
//! | Section | Contents |
//! |---------|----------|
//! | `<CIRCUIT>` | One component per line: `n1=<node> n2=<node> <R\|G\|C\|L>=<value>` |
//! | `<TERMS>` | `VT`, `RS`, `RL`, then `Fstart Fend Nfreqs` or `LFstart LFend Nfreqs` |
//! | `<OUTPUT>` | One quantity per line, optionally followed by a unit; `dB` units convert |
//!
//! # Example
//!
//! ```text
//! # RC low-pass
//! <CIRCUIT>
//! n1=1 n2=2 R=1k
//! n1=2 n2=0 C=100n
//! </CIRCUIT>
//! <TERMS>
//! VT=1 RS=50 RL=10k
//! LFstart=10 LFend=100k Nfreqs=41
//! </TERMS>
//! <OUTPUT>
//! Av dB
//! Zin Ohms
//! </OUTPUT>
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, prefix_multiplier, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::{CascadeError, Result};

/// Parse a netlist string into an AST.
pub fn parse(input: &str) -> Result<NetlistAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a netlist file.
pub fn parse_file(path: &std::path::Path) -> Result<NetlistAst> {
    let content = std::fs::read_to_string(path).map_err(|e| CascadeError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
