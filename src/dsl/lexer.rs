//! Lexer (tokenizer) for the network description language.

use crate::error::{Result, SwitchError};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the description language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (node name, signal name, keyword)
    Identifier,
    /// An unsigned integer (gate literal)
    Number,
    /// A directive (starts with '.')
    Directive,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing description input.
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

    fn token(&self, kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Token {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => return Ok(self.token(TokenKind::Eof, "", self.line, self.column)),
        };

        let start_column = self.column;
        let start_line = self.line;

        let token = match ch {
            '\n' => {
                self.advance();
                self.token(TokenKind::Newline, "\n", start_line, start_column)
            }
            '.' => {
                self.advance();
                let text = self.read_word();
                if text.is_empty() {
                    return Err(SwitchError::lexer(start_line, start_column, "empty directive"));
                }
                self.token(TokenKind::Directive, format!(".{}", text), start_line, start_column)
            }
            '0'..='9' => {
                let text = self.read_word();
                if !text.chars().all(|c| c.is_ascii_digit()) {
                    return Err(SwitchError::lexer(
                        start_line,
                        start_column,
                        format!("invalid number '{}'", text),
                    ));
                }
                self.token(TokenKind::Number, text, start_line, start_column)
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let text = self.read_word();
                self.token(TokenKind::Identifier, text, start_line, start_column)
            }
            _ => {
                return Err(SwitchError::lexer(
                    start_line,
                    start_column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        Ok(token)
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
            } else if ch == '#' || ch == ';' {
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

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            out.push(tok.kind);
            if tok.kind == TokenKind::Eof {
                return out;
            }
        }
    }

    #[test]
    fn test_lexer_basic() {
        let input = "PMOS T1 A";
        let mut lexer = Lexer::new(input);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "PMOS");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "T1");
        assert_eq!(tok.column, 6);
    }

    #[test]
    fn test_lexer_directive_and_literal() {
        use TokenKind::*;
        assert_eq!(
            kinds(".edge VDD T1\nNMOS TK 1 # tied high\n"),
            vec![Directive, Identifier, Identifier, Newline, Identifier, Identifier, Number, Newline, Eof]
        );
    }

    #[test]
    fn test_lexer_errors_carry_position() {
        let mut lexer = Lexer::new("\n  VDD -> T1");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, SwitchError::LexerError { line: 2, column: 7, .. }));

        let mut lexer = Lexer::new("1x");
        assert!(matches!(lexer.next_token(), Err(SwitchError::LexerError { .. })));
    }
}
