//! Parser for the netlist format.

use super::ast::*;
use super::lexer::{parse_value, prefix_multiplier, Lexer, Token, TokenKind};
use crate::analysis::OutputRequest;
use crate::error::{CascadeError, Result};

/// The three sections every netlist must carry.
const SECTIONS: [&str; 3] = ["CIRCUIT", "TERMS", "OUTPUT"];

/// A `key=value` pair with any suffix already applied.
struct Pair {
    key: String,
    value: f64,
    line: usize,
}

/// Parser for netlists.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peeked: Option<Token>,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            peeked: None,
        })
    }

    /// Parse the entire netlist.
    pub fn parse(&mut self) -> Result<NetlistAst> {
        let mut ast = NetlistAst::new();
        let mut seen = [false; SECTIONS.len()];

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::SectionOpen => {
                    let name = self.current.text.clone();
                    let line = self.current.line;
                    self.advance()?;

                    if let Some(index) = SECTIONS.iter().position(|s| *s == name) {
                        if seen[index] {
                            return Err(CascadeError::parse(line, format!("duplicate section <{}>", name)));
                        }
                        seen[index] = true;
                    }

                    match name.as_str() {
                        "CIRCUIT" => self.parse_section(&name, |p| {
                            let component = p.parse_component()?;
                            ast.components.push(component);
                            Ok(())
                        })?,
                        "TERMS" => self.parse_section(&name, |p| {
                            for pair in p.parse_pairs()? {
                                ast.terms.push(TermDef {
                                    name: pair.key,
                                    value: pair.value,
                                    line: pair.line,
                                });
                            }
                            Ok(())
                        })?,
                        "OUTPUT" => self.parse_section(&name, |p| {
                            let request = p.parse_output()?;
                            ast.outputs.push(request);
                            Ok(())
                        })?,
                        _ => {
                            tracing::debug!(section = %name, line, "skipping unknown section");
                            self.parse_section(&name, |p| p.skip_line())?;
                        }
                    }
                }
                TokenKind::SectionClose => {
                    return Err(CascadeError::parse(
                        self.current.line,
                        format!("</{}> without matching open tag", self.current.text),
                    ))
                }
                _ => {
                    // Text outside any section is free-form
                    tracing::debug!(line = self.current.line, "skipping text outside sections");
                    self.skip_line()?;
                }
            }
        }

        for (section, found) in SECTIONS.into_iter().zip(seen) {
            if !found {
                return Err(CascadeError::MissingSection { section });
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = match self.peeked.take() {
            Some(tok) => tok,
            None => self.lexer.next_token()?,
        };
        Ok(())
    }

    fn peek(&mut self) -> Result<&Token> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(self.peeked.as_ref().unwrap_or(&self.current))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(CascadeError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn at_line_end(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Newline | TokenKind::Eof | TokenKind::SectionClose
        )
    }

    fn skip_line(&mut self) -> Result<()> {
        while !self.at_line_end() {
            self.advance()?;
        }
        Ok(())
    }

    /// Run `line` on each non-empty line up to the closing tag of `name`.
    fn parse_section(&mut self, name: &str, mut line: impl FnMut(&mut Self) -> Result<()>) -> Result<()> {
        loop {
            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::SectionClose if self.current.text == name => return self.advance(),
                TokenKind::SectionClose => {
                    return Err(CascadeError::parse(
                        self.current.line,
                        format!("</{}> closes <{}>", self.current.text, name),
                    ))
                }
                TokenKind::SectionOpen => {
                    return Err(CascadeError::parse(
                        self.current.line,
                        format!("<{}> opened inside <{}>", self.current.text, name),
                    ))
                }
                TokenKind::Eof => {
                    return Err(CascadeError::parse(
                        self.current.line,
                        format!("unterminated section <{}>", name),
                    ))
                }
                _ => {
                    line(self)?;
                    if !self.at_line_end() {
                        return Err(CascadeError::parse(
                            self.current.line,
                            format!("unexpected token: {:?}", self.current.text),
                        ));
                    }
                }
            }
        }
    }

    /// Parse `key=value` pairs up to the end of the line.
    ///
    /// A value may carry its SI suffix attached (`3.18n`) or as a separate
    /// single-letter word (`1.59 u`).
    fn parse_pairs(&mut self) -> Result<Vec<Pair>> {
        let mut pairs = Vec::new();
        while !self.at_line_end() {
            let key = self.expect(TokenKind::Identifier)?;
            self.expect(TokenKind::Equals)?;
            let number = self.expect(TokenKind::Number)?;
            let mut value = parse_value(&number.text)
                .ok_or_else(|| CascadeError::parse(number.line, format!("invalid number: {}", number.text)))?;

            if self.current.kind == TokenKind::Identifier {
                let mut chars = self.current.text.chars();
                let detached = match (chars.next(), chars.next()) {
                    (Some(ch), None) => prefix_multiplier(ch),
                    _ => None,
                };
                if let Some(mult) = detached {
                    if self.peek()?.kind != TokenKind::Equals {
                        value *= mult;
                        self.advance()?;
                    }
                }
            }

            pairs.push(Pair {
                key: key.text,
                value,
                line: key.line,
            });
        }
        Ok(pairs)
    }

    fn parse_component(&mut self) -> Result<ComponentDef> {
        let line = self.current.line;
        let mut pin1 = None;
        let mut pin2 = None;
        let mut element = None;

        for pair in self.parse_pairs()? {
            let slot = if pair.key.eq_ignore_ascii_case("n1") {
                &mut pin1
            } else if pair.key.eq_ignore_ascii_case("n2") {
                &mut pin2
            } else {
                if element.is_some() {
                    return Err(CascadeError::invalid_component(line, "more than one element on the line"));
                }
                element = Some((pair.key, pair.value));
                continue;
            };
            if slot.is_some() {
                return Err(CascadeError::invalid_component(
                    line,
                    format!("pin '{}' given twice", pair.key),
                ));
            }
            *slot = Some(node_number(pair.value, line)?);
        }

        let pin1 = pin1.ok_or_else(|| CascadeError::invalid_component(line, "missing n1"))?;
        let pin2 = pin2.ok_or_else(|| CascadeError::invalid_component(line, "missing n2"))?;
        let (kind, value) = element.ok_or_else(|| CascadeError::invalid_component(line, "missing element"))?;

        Ok(ComponentDef {
            pin1,
            pin2,
            kind,
            value,
            line,
        })
    }

    /// `Name [unit words]`
    fn parse_output(&mut self) -> Result<OutputRequest> {
        let name = self.expect(TokenKind::Identifier)?;
        let mut unit = Vec::new();
        while self.current.kind == TokenKind::Identifier {
            unit.push(self.current.text.clone());
            self.advance()?;
        }
        Ok(OutputRequest::new(&name.text, &unit.join(" ")))
    }
}

fn node_number(value: f64, line: usize) -> Result<u32> {
    if value.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&value) {
        return Err(CascadeError::invalid_component(
            line,
            format!("node must be a non-negative integer, got {}", value),
        ));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SweepSpec;

    const NETLIST: &str = "\
# demo
<CIRCUIT>
n1=1 n2=2 R=50
n1=2 n2=0 C=3.18n
n1=2 n2=3 L=1.59 u
</CIRCUIT>
<TERMS>
VT=5 RS=50
RL=75
Fstart=10.0 Fend=10e+6 Nfreqs=10
</TERMS>
<OUTPUT>
Vin V
Av dB
Pout dBmW
</OUTPUT>
";

    fn parse(input: &str) -> Result<NetlistAst> {
        Parser::new(Lexer::new(input))?.parse()
    }

    #[test]
    fn test_parse_components() {
        let ast = parse(NETLIST).unwrap();
        assert_eq!(ast.components.len(), 3);
        assert_eq!(
            ast.components[0],
            ComponentDef {
                pin1: 1,
                pin2: 2,
                kind: "R".to_string(),
                value: 50.0,
                line: 3
            }
        );
        assert_eq!(ast.components[1].pin2, 0);
        assert!((ast.components[1].value - 3.18e-9).abs() < 1e-20);
        assert_eq!(ast.components[2].kind, "L");
        assert!((ast.components[2].value - 1.59e-6).abs() < 1e-18);
    }

    #[test]
    fn test_parse_terms() {
        let ast = parse(NETLIST).unwrap();
        let terms = ast.terminations().unwrap();
        assert_eq!(terms.source_voltage, 5.0);
        assert_eq!(terms.load_resistance, 75.0);
        assert_eq!(
            ast.sweep().unwrap(),
            SweepSpec::Linear {
                start: 10.0,
                end: 1e7,
                count: 10
            }
        );
    }

    #[test]
    fn test_parse_outputs() {
        let ast = parse(NETLIST).unwrap();
        let keys: Vec<_> = ast.outputs.requests().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["Vin V", "Av dB", "Pout dBmW"]);
    }

    #[test]
    fn test_missing_section() {
        let err = parse("<CIRCUIT>\nn1=1 n2=2 R=1\n</CIRCUIT>\n<TERMS>\n</TERMS>\n").unwrap_err();
        assert!(matches!(err, CascadeError::MissingSection { section: "OUTPUT" }));
    }

    #[test]
    fn test_unterminated_section() {
        let err = parse("<CIRCUIT>\nn1=1 n2=2 R=1\n").unwrap_err();
        assert!(matches!(err, CascadeError::ParseError { .. }));
    }

    #[test]
    fn test_component_errors() {
        let wrap = |line: &str| format!("<CIRCUIT>\n{}\n</CIRCUIT>\n<TERMS>\n</TERMS>\n<OUTPUT>\n</OUTPUT>\n", line);
        for bad in ["n1=1 R=50", "n1=1 n2=2", "n1=1 n2=2 R=1 C=1", "n1=1.5 n2=2 R=1", "n1=-1 n2=2 R=1"] {
            let err = parse(&wrap(bad)).unwrap_err();
            assert!(matches!(err, CascadeError::InvalidComponent { line: 2, .. }), "{}: {:?}", bad, err);
        }
    }

    #[test]
    fn test_text_outside_sections_ignored() {
        let ast = parse(&format!("Filter: RC low-pass\n{}", NETLIST)).unwrap();
        assert_eq!(ast.components.len(), 3);
    }

    #[test]
    fn test_detached_suffix_not_confused_with_key() {
        // "m" followed by '=' is the next key, not a suffix
        let ast = parse("<TERMS>\nRL=50 m=2\n</TERMS>\n<CIRCUIT>\n</CIRCUIT>\n<OUTPUT>\n</OUTPUT>").unwrap();
        assert_eq!(ast.term("RL"), Some(50.0));
        assert_eq!(ast.term("m"), Some(2.0));
    }
}
