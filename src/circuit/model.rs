//! Elaborated circuit model and its read-only query API.

use std::collections::HashMap;
use std::fmt::Write as _;

use super::types::{Direction, NetKind, Width};
use crate::error::{HdlError, Result};

/// A port on an elaborated module boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub name: String,
    pub direction: Direction,
    pub width: Width,
}

/// An internal net of an elaborated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net {
    pub name: String,
    pub width: Width,
    pub kind: NetKind,
}

/// Counts reported for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleSummary {
    pub port_count: usize,
    pub net_count: usize,
    pub generic_param_count: usize,
}

/// A fully validated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElaboratedModule {
    pub(crate) name: String,
    pub(crate) generic_params: Vec<String>,
    pub(crate) ports: Vec<Port>,
    pub(crate) nets: Vec<Net>,
}

impl ElaboratedModule {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generic parameter names in declaration order.
    pub fn generic_params(&self) -> &[String] {
        &self.generic_params
    }

    /// Ports in declaration order.
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Wires and buses in declaration order.
    pub fn nets(&self) -> &[Net] {
        &self.nets
    }

    pub fn summary(&self) -> ModuleSummary {
        ModuleSummary {
            port_count: self.ports.len(),
            net_count: self.nets.len(),
            generic_param_count: self.generic_params.len(),
        }
    }

    /// Multi-line listing of the module's generics, ports and nets.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "module {}", self.name);
        if !self.generic_params.is_empty() {
            let _ = write!(out, "<{}>", self.generic_params.join(", "));
        }
        out.push('\n');
        for port in &self.ports {
            let _ = writeln!(out, "  port {} {} [{}]", port.direction, port.name, port.width);
        }
        for net in &self.nets {
            let _ = writeln!(out, "  {} {} [{}]", net.kind, net.name, net.width);
        }
        out
    }
}

/// The complete elaborated model of one source text.
///
/// Immutable once built; modules keep their declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CircuitModel {
    modules: Vec<ElaboratedModule>,
    index: HashMap<String, usize>,
}

impl CircuitModel {
    /// Assemble a model from modules whose names are already known to be unique.
    pub(crate) fn from_modules(modules: Vec<ElaboratedModule>) -> Self {
        let index = modules
            .iter()
            .enumerate()
            .map(|(i, m)| (m.name.clone(), i))
            .collect();
        Self { modules, index }
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Module names in declaration order.
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }

    /// Find a module by name.
    pub fn module(&self, name: &str) -> Option<&ElaboratedModule> {
        self.index.get(name).map(|&i| &self.modules[i])
    }

    /// All modules in declaration order.
    pub fn modules(&self) -> &[ElaboratedModule] {
        &self.modules
    }

    pub fn module_summary(&self, name: &str) -> Result<ModuleSummary> {
        self.module(name)
            .map(ElaboratedModule::summary)
            .ok_or_else(|| HdlError::ModuleNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn adder() -> ElaboratedModule {
        ElaboratedModule {
            name: "Adder".to_string(),
            generic_params: vec!["N".to_string()],
            ports: vec![
                Port {
                    name: "A".to_string(),
                    direction: Direction::In,
                    width: Width::Parametric("N".to_string()),
                },
                Port {
                    name: "S".to_string(),
                    direction: Direction::Out,
                    width: Width::Concrete(8),
                },
            ],
            nets: vec![Net {
                name: "clk".to_string(),
                width: Width::BIT,
                kind: NetKind::Wire,
            }],
        }
    }

    #[test]
    fn test_queries() {
        let model = CircuitModel::from_modules(vec![adder()]);
        assert_eq!(model.module_count(), 1);
        assert_eq!(model.module_names(), vec!["Adder"]);
        assert_eq!(
            model.module_summary("Adder").unwrap(),
            ModuleSummary {
                port_count: 2,
                net_count: 1,
                generic_param_count: 1,
            }
        );
        assert!(model.module("adder").is_none());
    }

    #[test]
    fn test_unknown_module_is_not_found() {
        let model = CircuitModel::default();
        let err = model.module_summary("Missing").unwrap_err();
        assert_eq!(err.category(), "NotFound");
        assert_eq!(err.to_string(), "Module 'Missing' not found");
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            adder().describe(),
            "module Adder<N>\n  port In A [N]\n  port Out S [8]\n  wire clk [1]\n"
        );
    }
}
