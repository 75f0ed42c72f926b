//! AIBOM Document Model
//!
//! Shared vocabulary for building, validating and evaluating AI Bills of
//! Materials.
//!
//! # Core Concepts
//!
//! - [`Component`]: One inventoried AI asset (model, tool, data source, ...)
//! - [`Aibom`]: The document aggregate root with components and dependency edges
//! - [`ValidationResult`]: Verdict over a single document at a point in time
//! - [`MetadataValue`]: Closed variant type for free-form metadata
//!
//! The model does not enforce its own invariants. Construction stays
//! permissive; certification is a separate, re-runnable step performed by
//! the validator crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use aibom_model::{Aibom, Component, ComponentType};
//!
//! let mut doc = Aibom::new("aibom-0123456789ab", "Agent System");
//! doc.components.push(Component::new("model-1", "GPT-4", ComponentType::Model));
//! assert_eq!(doc.model_count(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod component;
mod document;
mod error;
pub mod id;
mod metadata;
mod validation;

pub use component::{Component, ComponentType, RiskClassification};
pub use document::{Aibom, Dependency, DEFAULT_DOCUMENT_VERSION};
pub use error::ModelError;
pub use metadata::{Metadata, MetadataValue};
pub use validation::ValidationResult;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
