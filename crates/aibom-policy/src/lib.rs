//! AIBOM Policy
//!
//! Declarative policy rules evaluated against AIBOM documents. Policies
//! are loaded from JSON or YAML files through a [`RuleRegistry`] and run
//! by a [`PolicyEngine`].

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod engine;
mod error;
mod registry;
mod rule;
pub mod rules;

pub use engine::{has_failures, Policy, PolicyEngine, PolicyResult};
pub use error::PolicyError;
pub use registry::{Params, PolicyFile, RuleConstructor, RuleDef, RuleRegistry};
pub use rule::{PolicyRule, Severity, Violation};

/// Policy crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
