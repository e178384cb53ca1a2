//! Abstract Syntax Tree types for the logic DSL.

use crate::circuit::Direction;

/// A module declaration from the DSL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDecl {
    /// Module name
    pub name: String,
    /// Generic parameter names, in declaration order
    pub generic_params: Vec<Ident>,
    /// Boundary ports, in declaration order
    pub ports: Vec<PortDecl>,
    /// Internal wire and bus declarations, in declaration order
    pub body: Vec<BodyItem>,
    /// Source line of the `module` keyword
    pub line: usize,
}

/// An identifier together with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub line: usize,
    pub column: usize,
}

/// A port declaration, e.g. `In A[N]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDecl {
    pub direction: Direction,
    pub name: Ident,
    /// `None` for a single-bit port
    pub width: Option<WidthExpr>,
}

/// A declaration inside a module body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyItem {
    /// `wire <name>;`
    Wire { name: Ident },
    /// `bus <name>[<width>];`
    Bus { name: Ident, width: WidthExpr },
}

impl BodyItem {
    pub fn name(&self) -> &Ident {
        match self {
            BodyItem::Wire { name } | BodyItem::Bus { name, .. } => name,
        }
    }
}

/// A width expression between square brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthExpr {
    /// Integer literal, e.g. `[16]`
    Literal { value: u32, line: usize, column: usize },
    /// Generic parameter reference, e.g. `[N]`
    Param(Ident),
}
