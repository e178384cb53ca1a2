//! Circuit model construction and queries.
//!
//! This module turns parsed module declarations into the validated,
//! immutable [`CircuitModel`] that the rest of the crate queries.

mod elaborate;
mod model;
mod types;

pub use elaborate::elaborate;
pub use model::{CircuitModel, ElaboratedModule, ModuleSummary, Net, Port};
pub use types::*;
