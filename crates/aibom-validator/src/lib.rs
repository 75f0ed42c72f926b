//! AIBOM Validator
//!
//! Rule-based checker that certifies the structural and semantic
//! consistency of a built document without mutating it.
//!
//! Errors (document unsafe to trust):
//! - component with an empty id
//! - duplicate component ids
//! - dependency edge naming an unknown component
//!
//! Warnings (quality concerns):
//! - high-risk component without a description
//! - model without a provider

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod checker;
mod rules;

pub use checker::AibomValidator;
pub use rules::{FindingLevel, ValidationRule};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
