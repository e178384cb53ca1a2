//! Front end for the logic description language.
//!
//! The DSL declares digital-logic modules with generic parameters,
//! directional ports and internal wires and buses. It is free-form:
//! whitespace and comments may appear between any two tokens.
//!
//! # Grammar Overview
//!
//! ```text
//! source         = { module_decl }
//! module_decl    = "module" IDENT [ generic_params ] [ "(" [ port_list ] ")" ] "{" { body_item } "}"
//! generic_params = "<" IDENT { "," IDENT } ">"
//! port_list      = port { "," port }
//! port           = ( "In" | "Out" | "InOut" ) IDENT [ "[" width_expr "]" ]
//! body_item      = wire_decl | bus_decl
//! wire_decl      = "wire" IDENT ";"
//! bus_decl       = "bus" IDENT "[" width_expr "]" ";"
//! width_expr     = NUMBER | IDENT
//!
//! IDENT          = ( letter | "_" ) { letter | digit | "_" }
//! NUMBER         = digit { digit }
//! comment        = "//" { any_char } | "/*" { any_char } "*/"
//! ```
//!
//! # Example
//!
//! ```text
//! // N-bit ripple adder skeleton
//! module GenericAdder<N>(In A[N], In B[N], Out S[N]) {
//!     wire clk;
//!     bus Carry[N];
//!     bus Data[16];
//! }
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{tokenize, Keyword, Lexer, Symbol, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse DSL source text into module declarations.
pub fn parse(input: &str) -> Result<Vec<ModuleDecl>> {
    parse_tokens(tokenize(input))
}

/// Parse an already tokenized source.
pub fn parse_tokens<I>(tokens: I) -> Result<Vec<ModuleDecl>>
where
    I: Iterator<Item = Result<Token>>,
{
    let mut parser = Parser::new(tokens)?;
    parser.parse()
}

/// Read a DSL source file into memory.
#[cfg(feature = "cli")]
pub fn read_source(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| crate::error::HdlError::FileRead {
        path: path.display().to_string(),
        source: e,
    })
}
