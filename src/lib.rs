//! # Logicalizer Core
//!
//! A front end for a small digital-logic description language.
//!
//! This library provides:
//! - A lexer and recursive-descent parser for module declarations
//! - An elaborator that validates generics, widths and signal names
//! - An immutable circuit model with structural queries
//! - A simulator facade for native and browser hosts
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Lexer, parser and AST for the description language
//! - [`circuit`] - Elaboration and the resulting circuit model
//! - [`simulator`] - The session object hosts construct and query
//! - [`error`] - Unified error type
//!
//! Control flows strictly forward: source text is tokenized, parsed into
//! [`dsl::ModuleDecl`]s, elaborated into a [`CircuitModel`], and owned by a
//! [`Simulator`].
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! logicalizer adder.lgc
//! logicalizer adder.lgc --module GenericAdder -v
//! ```
//!
//! ### Library
//!
//! ```
//! use logicalizer_core::Simulator;
//!
//! let sim = Simulator::new("module FullAdder(In A, In B, In Cin, Out Sum, Out Cout) {}")?;
//! assert_eq!(sim.module_summary("FullAdder")?.port_count, 5);
//! # Ok::<(), logicalizer_core::HdlError>(())
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { CircuitSimulator } from 'logicalizer_core';
//!
//! const sim = new CircuitSimulator('module MyFirstCircuit {}');
//! console.log(sim.get_info());
//! ```
//!
//! ## Widths
//!
//! Port and bus widths are either concrete bit counts or references to a
//! module's generic parameters. Parametric widths stay symbolic in the
//! model; binding generic arguments happens at instantiation, which this
//! crate does not perform.

pub mod circuit;
pub mod dsl;
pub mod error;
pub mod simulator;

// Re-export main types for convenience
pub use circuit::{CircuitModel, ModuleSummary, Width};
pub use error::{ElaborationErrorKind, HdlError, Result};
pub use simulator::Simulator;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitSimulator;
