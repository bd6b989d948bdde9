//! Parser for the network description language.

use log::trace;

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{Result, SwitchError};
use crate::network::{Gate, NodeKind};

/// Parser for network descriptions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire description.
    pub fn parse(&mut self) -> Result<CircuitAst> {
        let mut ast = CircuitAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                // Skip empty lines
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Identifier => {
                    let node = self.parse_transistor()?;
                    ast.nodes.push(node);
                }
                TokenKind::Number | TokenKind::Eof => {
                    return Err(SwitchError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.end_of_line()?;
        }

        trace!(
            "parsed {} nodes, {} edges, {} inputs",
            ast.nodes.len(),
            ast.edges.len(),
            ast.inputs.len()
        );

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(SwitchError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn end_of_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(SwitchError::parse(
                self.current.line,
                format!("unexpected token at end of line: {:?}", self.current.text),
            )),
        }
    }

    /// One or more names up to the end of the line.
    fn names(&mut self) -> Result<Vec<String>> {
        let mut names = vec![self.expect(TokenKind::Identifier)?.text];
        while self.current.kind == TokenKind::Identifier {
            names.push(self.current.text.clone());
            self.advance()?;
        }
        Ok(names)
    }

    fn parse_directive(&mut self, ast: &mut CircuitAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        let rail = match directive.to_lowercase().as_str() {
            ".supply" => Some(NodeKind::Supply),
            ".ground" => Some(NodeKind::Ground),
            ".output" => Some(NodeKind::Output),
            ".input" => {
                for name in self.names()? {
                    if ast.inputs.contains(&name) {
                        return Err(SwitchError::parse(
                            line,
                            format!("input '{}' declared twice", name),
                        ));
                    }
                    ast.inputs.push(name);
                }
                None
            }
            ".edge" => {
                let from = self.expect(TokenKind::Identifier)?.text;
                for to in self.names()? {
                    ast.edges.push(EdgeDef {
                        from: from.clone(),
                        to,
                        line,
                    });
                }
                None
            }
            _ => {
                return Err(SwitchError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        };

        if let Some(kind) = rail {
            for name in self.names()? {
                ast.nodes.push(NodeDef {
                    name,
                    kind,
                    gate: None,
                    line,
                });
            }
        }

        Ok(())
    }

    fn parse_transistor(&mut self) -> Result<NodeDef> {
        let keyword = self.current.text.clone();
        let line = self.current.line;

        let kind = NodeKind::from_keyword(&keyword).ok_or_else(|| {
            SwitchError::parse(line, format!("unknown element type: {}", keyword))
        })?;
        self.advance()?;

        let name = self.expect(TokenKind::Identifier)?.text;

        let gate = match self.current.kind {
            TokenKind::Identifier => Gate::Signal(self.current.text.clone()),
            TokenKind::Number => match self.current.text.as_str() {
                "0" => Gate::Level(false),
                "1" => Gate::Level(true),
                other => {
                    return Err(SwitchError::parse(
                        line,
                        format!("gate literal must be 0 or 1, got {}", other),
                    ));
                }
            },
            _ => {
                return Err(SwitchError::parse(
                    line,
                    format!("{} '{}' requires a gate", kind, name),
                ));
            }
        };
        self.advance()?;

        Ok(NodeDef {
            name,
            kind,
            gate: Some(gate),
            line,
        })
    }
}
