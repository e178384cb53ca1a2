//! Elaboration: AST to validated circuit model.
//!
//! Checks run in a fixed order so that the same input always reports the
//! same error:
//! 1. module names are unique across the source
//!
//! then, for each module in declaration order:
//! 2. generic parameter names are unique
//! 3. every width expression resolves (literal, or a declared parameter)
//! 4. port and net names are unique within the module
//! 5. every literal width is at least 1

use std::collections::HashSet;

use super::model::{CircuitModel, ElaboratedModule, Net, Port};
use super::types::{NetKind, Width};
use crate::dsl::{BodyItem, ModuleDecl, WidthExpr};
use crate::error::{ElaborationErrorKind, HdlError, Result};

/// Build a circuit model from parsed module declarations.
pub fn elaborate(modules: &[ModuleDecl]) -> Result<CircuitModel> {
    check_unique_module_names(modules)?;

    let elaborated = modules
        .iter()
        .map(elaborate_module)
        .collect::<Result<Vec<_>>>()?;

    Ok(CircuitModel::from_modules(elaborated))
}

fn check_unique_module_names(modules: &[ModuleDecl]) -> Result<()> {
    let mut seen = HashSet::new();
    for decl in modules {
        if !seen.insert(decl.name.as_str()) {
            return Err(HdlError::elaboration(
                ElaborationErrorKind::DuplicateModuleName,
                &decl.name,
                format!("module '{}' redeclared at line {}", decl.name, decl.line),
            ));
        }
    }
    Ok(())
}

fn elaborate_module(decl: &ModuleDecl) -> Result<ElaboratedModule> {
    let module = decl.name.as_str();

    let mut generics = HashSet::new();
    for param in &decl.generic_params {
        if !generics.insert(param.name.as_str()) {
            return Err(HdlError::elaboration(
                ElaborationErrorKind::DuplicateGenericParam,
                module,
                format!(
                    "generic parameter '{}' declared twice (line {}, column {})",
                    param.name, param.line, param.column
                ),
            ));
        }
    }

    let mut ports = Vec::with_capacity(decl.ports.len());
    for port in &decl.ports {
        let width = match &port.width {
            Some(expr) => resolve_width(module, &generics, &port.name.name, expr)?,
            None => Width::BIT,
        };
        ports.push(Port {
            name: port.name.name.clone(),
            direction: port.direction,
            width,
        });
    }

    let mut nets = Vec::with_capacity(decl.body.len());
    for item in &decl.body {
        let (kind, width) = match item {
            BodyItem::Wire { .. } => (NetKind::Wire, Width::BIT),
            BodyItem::Bus { name, width } => (
                NetKind::Bus,
                resolve_width(module, &generics, &name.name, width)?,
            ),
        };
        nets.push(Net {
            name: item.name().name.clone(),
            width,
            kind,
        });
    }

    let mut signals = HashSet::new();
    let declared = decl
        .ports
        .iter()
        .map(|p| &p.name)
        .chain(decl.body.iter().map(BodyItem::name));
    for name in declared {
        if !signals.insert(name.name.as_str()) {
            return Err(HdlError::elaboration(
                ElaborationErrorKind::DuplicateSignalName,
                module,
                format!(
                    "signal '{}' redeclared at line {}, column {}",
                    name.name, name.line, name.column
                ),
            ));
        }
    }

    let widths = ports
        .iter()
        .map(|p| (&p.name, &p.width))
        .chain(nets.iter().map(|n| (&n.name, &n.width)));
    for (name, width) in widths {
        if *width == Width::Concrete(0) {
            return Err(HdlError::elaboration(
                ElaborationErrorKind::NonPositiveWidth,
                module,
                format!("signal '{}' has width 0", name),
            ));
        }
    }

    log::debug!(
        "elaborated module '{}': {} port(s), {} net(s)",
        module,
        ports.len(),
        nets.len()
    );

    Ok(ElaboratedModule {
        name: decl.name.clone(),
        generic_params: decl.generic_params.iter().map(|p| p.name.clone()).collect(),
        ports,
        nets,
    })
}

fn resolve_width(
    module: &str,
    generics: &HashSet<&str>,
    signal: &str,
    expr: &WidthExpr,
) -> Result<Width> {
    match expr {
        WidthExpr::Literal { value, .. } => Ok(Width::Concrete(*value)),
        WidthExpr::Param(param) if generics.contains(param.name.as_str()) => {
            Ok(Width::Parametric(param.name.clone()))
        }
        WidthExpr::Param(param) => Err(HdlError::elaboration(
            ElaborationErrorKind::UnknownGenericParam,
            module,
            format!(
                "width of '{}' refers to undeclared generic parameter '{}' (line {}, column {})",
                signal, param.name, param.line, param.column
            ),
        )),
    }
}
