//! Lexer (tokenizer) for the netlist format.

use crate::error::{CascadeError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text (section name for tags)
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the netlist.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A key, element symbol, quantity name or unit
    Identifier,
    /// A number, possibly with an SI suffix
    Number,
    /// Section opening tag `<NAME>`
    SectionOpen,
    /// Section closing tag `</NAME>`
    SectionClose,
    /// Equals sign '='
    Equals,
    /// Any other single character
    Symbol,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing netlist input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let start_line = self.line;
        let start_column = self.column;
        let token = |kind: TokenKind, text: String| Token {
            kind,
            text,
            line: start_line,
            column: start_column,
        };

        let Some(&ch) = self.chars.peek() else {
            return Ok(token(TokenKind::Eof, String::new()));
        };

        match ch {
            '\n' => {
                self.advance();
                Ok(token(TokenKind::Newline, "\n".to_string()))
            }
            '=' => {
                self.advance();
                Ok(token(TokenKind::Equals, "=".to_string()))
            }
            '<' => {
                self.advance();
                let closing = self.chars.peek() == Some(&'/');
                if closing {
                    self.advance();
                }
                let name = self.read_identifier();
                if name.is_empty() || self.advance() != Some('>') {
                    return Err(CascadeError::lexer(start_line, start_column, "malformed section tag"));
                }
                let kind = if closing {
                    TokenKind::SectionClose
                } else {
                    TokenKind::SectionOpen
                };
                Ok(token(kind, name.to_ascii_uppercase()))
            }
            '-' | '+' | '.' | '0'..='9' => Ok(token(TokenKind::Number, self.read_number())),
            _ if ch.is_alphabetic() || ch == '_' => Ok(token(TokenKind::Identifier, self.read_identifier())),
            _ => {
                self.advance();
                Ok(token(TokenKind::Symbol, ch.to_string()))
            }
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_while(&mut self, text: &mut String, accept: impl Fn(char) -> bool) {
        while let Some(&ch) = self.chars.peek() {
            if !accept(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        self.read_while(&mut text, |ch| ch.is_alphanumeric() || ch == '_');
        text
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();

        // Optional sign
        if let Some(&(sign @ ('-' | '+'))) = self.chars.peek() {
            text.push(sign);
            self.advance();
        }

        // Integer part
        self.read_while(&mut text, |ch| ch.is_ascii_digit());

        // Decimal part
        if self.chars.peek() == Some(&'.') {
            text.push('.');
            self.advance();
            self.read_while(&mut text, |ch| ch.is_ascii_digit());
        }

        // Exponent part
        if let Some(&(e @ ('e' | 'E'))) = self.chars.peek() {
            text.push(e);
            self.advance();
            if let Some(&(sign @ ('-' | '+'))) = self.chars.peek() {
                text.push(sign);
                self.advance();
            }
            self.read_while(&mut text, |ch| ch.is_ascii_digit());
        }

        // Attached SI suffix, unless it starts a longer word
        if let Some(&ch) = self.chars.peek() {
            if prefix_multiplier(ch).is_some() {
                let mut lookahead = self.chars.clone();
                lookahead.next();
                let continues_word = lookahead.peek().is_some_and(|c| c.is_alphanumeric() || *c == '_');
                if !continues_word {
                    text.push(ch);
                    self.advance();
                }
            }
        }

        text
    }
}

/// Multiplier for an SI prefix character (p, n, u, m, k, M, G).
pub fn prefix_multiplier(ch: char) -> Option<f64> {
    match ch {
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        'u' => Some(1e-6),
        'm' => Some(1e-3),
        'k' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        _ => None,
    }
}

/// Parse a number string with optional SI suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let (num_str, multiplier) = match prefix_multiplier(last) {
        Some(mult) => (&text[..text.len() - last.len_utf8()], mult),
        None => (text, 1.0),
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            if tok.kind == TokenKind::Eof {
                break;
            }
            out.push((tok.kind, tok.text));
        }
        out
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("10k"), Some(10_000.0)));
        assert!(approx_eq(parse_value("3.18n"), Some(3.18e-9)));
        assert!(approx_eq(parse_value("4.7u"), Some(4.7e-6)));
        assert!(approx_eq(parse_value("1M"), Some(1_000_000.0)));
        assert!(approx_eq(parse_value("10e+6"), Some(1e7)));
        assert!(approx_eq(parse_value("1e-9"), Some(1e-9)));
        assert!(approx_eq(parse_value("abc"), None));
        assert!(approx_eq(parse_value(""), None));
    }

    #[test]
    fn test_lexer_component_line() {
        let toks = kinds("n1=1 n2=2 R=4.7k\n");
        assert_eq!(
            toks,
            vec![
                (TokenKind::Identifier, "n1".to_string()),
                (TokenKind::Equals, "=".to_string()),
                (TokenKind::Number, "1".to_string()),
                (TokenKind::Identifier, "n2".to_string()),
                (TokenKind::Equals, "=".to_string()),
                (TokenKind::Number, "2".to_string()),
                (TokenKind::Identifier, "R".to_string()),
                (TokenKind::Equals, "=".to_string()),
                (TokenKind::Number, "4.7k".to_string()),
                (TokenKind::Newline, "\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_lexer_section_tags() {
        let toks = kinds("<CIRCUIT>\n</circuit>");
        assert_eq!(toks[0], (TokenKind::SectionOpen, "CIRCUIT".to_string()));
        assert_eq!(toks[2], (TokenKind::SectionClose, "CIRCUIT".to_string()));
    }

    #[test]
    fn test_lexer_suffix_not_taken_from_word() {
        // "50mW" is a number followed by a unit, not 50m followed by "W"
        let toks = kinds("50 mW");
        assert_eq!(toks[1], (TokenKind::Identifier, "mW".to_string()));
        let toks = kinds("2.5mA");
        assert_eq!(toks[0], (TokenKind::Number, "2.5".to_string()));
    }

    #[test]
    fn test_lexer_skips_comments() {
        let toks = kinds("# a comment\nRL=50 # trailing");
        assert_eq!(toks[0].0, TokenKind::Newline);
        assert_eq!(toks.len(), 4);
    }

    #[test]
    fn test_lexer_symbols() {
        let toks = kinds("Filter: v2");
        assert_eq!(toks[1], (TokenKind::Symbol, ":".to_string()));
    }

    #[test]
    fn test_lexer_rejects_bad_tag() {
        let mut lexer = Lexer::new("<CIRCUIT");
        assert!(lexer.next_token().is_err());
    }
}
