//! Core types for the elaborated circuit representation.

use std::fmt;

/// Direction of a module port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "In"),
            Direction::Out => write!(f, "Out"),
            Direction::InOut => write!(f, "InOut"),
        }
    }
}

/// Resolved width of a port or net.
///
/// Widths bound to a generic parameter stay symbolic until the module is
/// instantiated with concrete arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Width {
    /// A known number of bits (always >= 1 after elaboration)
    Concrete(u32),
    /// Sized by the named generic parameter
    Parametric(String),
}

impl Width {
    /// Width of a single-bit signal.
    pub const BIT: Width = Width::Concrete(1);

    pub fn is_parametric(&self) -> bool {
        matches!(self, Width::Parametric(_))
    }

    /// The bit count, if known.
    pub fn concrete(&self) -> Option<u32> {
        match self {
            Width::Concrete(bits) => Some(*bits),
            Width::Parametric(_) => None,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Concrete(bits) => write!(f, "{}", bits),
            Width::Parametric(param) => write!(f, "{}", param),
        }
    }
}

/// Kind of an internal net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetKind {
    Wire,
    Bus,
}

impl fmt::Display for NetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetKind::Wire => write!(f, "wire"),
            NetKind::Bus => write!(f, "bus"),
        }
    }
}
