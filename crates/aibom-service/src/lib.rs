//! AIBOM Service
//!
//! Transport-independent request handling: a [`DocumentStore`] contract,
//! an in-memory store, and [`AibomService`] which exposes create, get,
//! validate, list, component append and policy evaluation.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod request;
mod service;
mod store;

pub use error::ServiceError;
pub use request::{
    AddComponentResponse, ComponentRequest, CreateAibomRequest, HealthStatus, ListResponse,
};
pub use service::{AibomService, SERVICE_NAME};
pub use store::{DocumentStore, DocumentSummary, InMemoryStore};

/// Service crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
