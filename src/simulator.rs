//! Host-facing simulator facade.

use std::fmt::Write as _;

use crate::circuit::{self, CircuitModel, ModuleSummary};
use crate::dsl;
use crate::error::Result;

/// Fixed reply of [`Simulator::greet`].
pub const GREETING: &str = "Hello from Logicalizer!";

/// One constructed session over a single source text.
///
/// Construction is all-or-nothing: either the whole source lexes, parses
/// and elaborates, or no simulator is returned.
#[derive(Debug, Clone)]
pub struct Simulator {
    model: CircuitModel,
}

impl Simulator {
    /// Build a simulator from DSL source text.
    pub fn new(source: &str) -> Result<Self> {
        let modules = dsl::parse(source)?;
        let model = circuit::elaborate(&modules)?;
        log::debug!("constructed simulator with {} module(s)", model.module_count());
        Ok(Self { model })
    }

    /// Build a simulator from a DSL source file.
    #[cfg(feature = "cli")]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        Self::new(&dsl::read_source(path)?)
    }

    /// The elaborated circuit model.
    pub fn model(&self) -> &CircuitModel {
        &self.model
    }

    pub fn module_summary(&self, name: &str) -> Result<ModuleSummary> {
        self.model.module_summary(name)
    }

    /// Human-readable overview of every module, in declaration order.
    pub fn get_info(&self) -> String {
        let mut out = format!("Module definitions parsed: {}", self.model.module_count());
        for module in self.model.modules() {
            let s = module.summary();
            let _ = write!(
                out,
                "\n  {}: ports={} nets={} generics={}",
                module.name(),
                s.port_count,
                s.net_count,
                s.generic_param_count
            );
        }
        out
    }

    pub fn greet(&self) -> String {
        GREETING.to_string()
    }
}
