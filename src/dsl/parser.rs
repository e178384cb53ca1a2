//! Recursive-descent parser for the logic DSL.

use super::ast::*;
use super::lexer::{Keyword, Symbol, Token, TokenKind};
use crate::circuit::Direction;
use crate::error::{HdlError, Result};

/// Parser for the logic DSL.
///
/// Consumes any stream of tokens (usually a [`Lexer`](super::Lexer)) with a
/// single token of lookahead. The first error aborts the parse.
pub struct Parser<I> {
    tokens: I,
    current: Token,
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    /// Create a new parser, reading the first token.
    pub fn new(mut tokens: I) -> Result<Self> {
        let current = Self::pull(&mut tokens, 1, 1)?;
        Ok(Self { tokens, current })
    }

    /// Parse every module declaration up to end of input.
    pub fn parse(&mut self) -> Result<Vec<ModuleDecl>> {
        let mut modules = Vec::new();
        loop {
            match self.current.kind {
                TokenKind::Eof => break,
                TokenKind::Keyword(Keyword::Module) => modules.push(self.parse_module()?),
                _ => return Err(self.unexpected("'module' or end of input")),
            }
        }
        Ok(modules)
    }

    fn pull(tokens: &mut I, line: usize, column: usize) -> Result<Token> {
        // A stream that ends without Eof is treated as if it had one.
        tokens.next().unwrap_or_else(|| {
            Ok(Token {
                kind: TokenKind::Eof,
                text: String::new(),
                line,
                column,
            })
        })
    }

    fn advance(&mut self) -> Result<Token> {
        let next = Self::pull(&mut self.tokens, self.current.line, self.current.column)?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(&self, expected: impl Into<String>) -> HdlError {
        HdlError::syntax(
            expected,
            self.current.describe(),
            self.current.line,
            self.current.column,
        )
    }

    fn at_symbol(&self, symbol: Symbol) -> bool {
        self.current.kind == TokenKind::Symbol(symbol)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    fn expect_ident(&mut self) -> Result<Ident> {
        let tok = self.expect(TokenKind::Identifier)?;
        Ok(Ident {
            name: tok.text,
            line: tok.line,
            column: tok.column,
        })
    }

    fn parse_module(&mut self) -> Result<ModuleDecl> {
        let line = self.expect(TokenKind::Keyword(Keyword::Module))?.line;
        let name = self.expect_ident()?.name;

        let generic_params = if self.at_symbol(Symbol::LAngle) {
            self.parse_generic_params()?
        } else {
            Vec::new()
        };

        // The port list is optional as a whole: `module A {}` is valid.
        let ports = if self.at_symbol(Symbol::LParen) {
            self.parse_port_list()?
        } else {
            Vec::new()
        };

        self.expect(TokenKind::Symbol(Symbol::LBrace))?;
        let mut body = Vec::new();
        while !self.at_symbol(Symbol::RBrace) {
            body.push(self.parse_body_item()?);
        }
        self.expect(TokenKind::Symbol(Symbol::RBrace))?;

        log::debug!(
            "parsed module '{}': {} generic(s), {} port(s), {} body item(s)",
            name,
            generic_params.len(),
            ports.len(),
            body.len()
        );

        Ok(ModuleDecl {
            name,
            generic_params,
            ports,
            body,
            line,
        })
    }

    fn parse_generic_params(&mut self) -> Result<Vec<Ident>> {
        self.expect(TokenKind::Symbol(Symbol::LAngle))?;
        let mut params = vec![self.expect_ident()?];
        while self.at_symbol(Symbol::Comma) {
            self.advance()?;
            params.push(self.expect_ident()?);
        }
        self.expect(TokenKind::Symbol(Symbol::RAngle))?;
        Ok(params)
    }

    fn parse_port_list(&mut self) -> Result<Vec<PortDecl>> {
        self.expect(TokenKind::Symbol(Symbol::LParen))?;
        let mut ports = Vec::new();
        if !self.at_symbol(Symbol::RParen) {
            ports.push(self.parse_port()?);
            while self.at_symbol(Symbol::Comma) {
                self.advance()?;
                ports.push(self.parse_port()?);
            }
        }
        self.expect(TokenKind::Symbol(Symbol::RParen))?;
        Ok(ports)
    }

    fn parse_port(&mut self) -> Result<PortDecl> {
        let direction = match self.current.kind {
            TokenKind::Keyword(Keyword::In) => Direction::In,
            TokenKind::Keyword(Keyword::Out) => Direction::Out,
            TokenKind::Keyword(Keyword::InOut) => Direction::InOut,
            _ => return Err(self.unexpected("port direction ('In', 'Out' or 'InOut')")),
        };
        self.advance()?;
        let name = self.expect_ident()?;
        let width = if self.at_symbol(Symbol::LBracket) {
            Some(self.parse_bracketed_width()?)
        } else {
            None
        };
        Ok(PortDecl {
            direction,
            name,
            width,
        })
    }

    fn parse_body_item(&mut self) -> Result<BodyItem> {
        let item = match self.current.kind {
            TokenKind::Keyword(Keyword::Wire) => {
                self.advance()?;
                BodyItem::Wire {
                    name: self.expect_ident()?,
                }
            }
            TokenKind::Keyword(Keyword::Bus) => {
                self.advance()?;
                let name = self.expect_ident()?;
                let width = self.parse_bracketed_width()?;
                BodyItem::Bus { name, width }
            }
            _ => return Err(self.unexpected("'wire', 'bus' or '}'")),
        };
        self.expect(TokenKind::Symbol(Symbol::Semicolon))?;
        Ok(item)
    }

    fn parse_bracketed_width(&mut self) -> Result<WidthExpr> {
        self.expect(TokenKind::Symbol(Symbol::LBracket))?;
        let width = match self.current.kind {
            TokenKind::Number => {
                let tok = self.advance()?;
                let value = tok.text.parse::<u32>().map_err(|_| {
                    HdlError::syntax("integer width", format!("'{}'", tok.text), tok.line, tok.column)
                })?;
                WidthExpr::Literal {
                    value,
                    line: tok.line,
                    column: tok.column,
                }
            }
            TokenKind::Identifier => WidthExpr::Param(self.expect_ident()?),
            _ => return Err(self.unexpected("width (number or generic parameter)")),
        };
        self.expect(TokenKind::Symbol(Symbol::RBracket))?;
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;
    use pretty_assertions::assert_eq;

    fn ident(name: &str, line: usize, column: usize) -> Ident {
        Ident {
            name: name.to_string(),
            line,
            column,
        }
    }

    fn syntax_position(err: HdlError) -> (String, String, usize, usize) {
        match err {
            HdlError::Syntax {
                expected,
                found,
                line,
                column,
            } => (expected, found, line, column),
            other => panic!("expected syntax error, got {other}"),
        }
    }

    #[test]
    fn test_parse_empty_module() {
        let modules = parse("module Empty {}").unwrap();
        assert_eq!(
            modules,
            vec![ModuleDecl {
                name: "Empty".to_string(),
                generic_params: vec![],
                ports: vec![],
                body: vec![],
                line: 1,
            }]
        );
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  // nothing here\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_generics_and_ports() {
        let modules = parse("module Generic<N, M>(In A[N], Out S[8], InOut clk) {}").unwrap();
        let m = &modules[0];
        assert_eq!(m.generic_params, vec![ident("N", 1, 16), ident("M", 1, 19)]);
        assert_eq!(m.ports.len(), 3);
        assert_eq!(m.ports[0].direction, Direction::In);
        assert_eq!(m.ports[0].width, Some(WidthExpr::Param(ident("N", 1, 27))));
        assert_eq!(m.ports[1].direction, Direction::Out);
        assert_eq!(
            m.ports[1].width,
            Some(WidthExpr::Literal {
                value: 8,
                line: 1,
                column: 37
            })
        );
        assert_eq!(m.ports[2].direction, Direction::InOut);
        assert_eq!(m.ports[2].width, None);
    }

    #[test]
    fn test_parse_body_items() {
        let source = "module Internal(In A) {\n    wire internal_clk;\n    bus State[16];\n}";
        let modules = parse(source).unwrap();
        assert_eq!(
            modules[0].body,
            vec![
                BodyItem::Wire {
                    name: ident("internal_clk", 2, 10),
                },
                BodyItem::Bus {
                    name: ident("State", 3, 9),
                    width: WidthExpr::Literal {
                        value: 16,
                        line: 3,
                        column: 15
                    },
                },
            ]
        );
    }

    #[test]
    fn test_parse_multiple_modules() {
        let source = "
            module A {}
            module B<M>(In C[1]) {
                wire X;
            }
        ";
        let modules = parse(source).unwrap();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(modules[1].line, 3);
        assert_eq!(modules[1].body.len(), 1);
    }

    #[test]
    fn test_empty_port_list() {
        let modules = parse("module A() {}").unwrap();
        assert!(modules[0].ports.is_empty());
    }

    #[test]
    fn test_missing_closing_brace_reports_eof() {
        let err = parse("module A {\n  wire w;\n").unwrap_err();
        let (expected, found, line, column) = syntax_position(err);
        assert_eq!(expected, "'wire', 'bus' or '}'");
        assert_eq!(found, "end of input");
        assert_eq!((line, column), (3, 1));
    }

    #[test]
    fn test_wire_with_width_is_rejected() {
        let err = parse("module A { wire w[4]; }").unwrap_err();
        let (expected, found, _, column) = syntax_position(err);
        assert_eq!(expected, "';'");
        assert_eq!(found, "'['");
        assert_eq!(column, 18);
    }

    #[test]
    fn test_bus_requires_width() {
        let err = parse("module A { bus b; }").unwrap_err();
        let (expected, _, _, _) = syntax_position(err);
        assert_eq!(expected, "'['");
    }

    #[test]
    fn test_empty_generic_list_is_rejected() {
        let err = parse("module A<>() {}").unwrap_err();
        let (expected, found, _, _) = syntax_position(err);
        assert_eq!(expected, "identifier");
        assert_eq!(found, "'>'");
    }

    #[test]
    fn test_trailing_tokens_are_rejected() {
        let err = parse("module A {} wire x;").unwrap_err();
        let (expected, found, line, column) = syntax_position(err);
        assert_eq!(expected, "'module' or end of input");
        assert_eq!(found, "'wire'");
        assert_eq!((line, column), (1, 13));
    }

    #[test]
    fn test_keyword_is_not_an_identifier() {
        let err = parse("module bus {}").unwrap_err();
        let (expected, found, _, _) = syntax_position(err);
        assert_eq!(expected, "identifier");
        assert_eq!(found, "'bus'");
    }

    #[test]
    fn test_lex_error_aborts_parse() {
        let err = parse("module A { wire @; }").unwrap_err();
        assert_eq!(err.category(), "LexError");
    }
}
