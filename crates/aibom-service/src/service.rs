//! Request-level operations over a [`DocumentStore`]
//!
//! [`AibomService`] turns requests into builder calls, validator runs and
//! policy evaluations. Transports (HTTP or otherwise) stay outside and
//! map [`ServiceError`] through [`ServiceError::status_code`].

use crate::error::ServiceError;
use crate::request::{
    AddComponentResponse, ComponentRequest, CreateAibomRequest, HealthStatus, ListResponse,
};
use crate::store::{DocumentStore, InMemoryStore};
use aibom_builder::{AibomBuilder, ModelDecl, ToolDecl};
use aibom_model::{Aibom, Component, ComponentType, ValidationResult};
use aibom_policy::{PolicyEngine, PolicyResult};
use aibom_validator::AibomValidator;
use std::sync::Arc;

/// Name reported by [`AibomService::health`]
pub const SERVICE_NAME: &str = "aibom-policy-engine";

/// Request handler shared by a transport
#[derive(Debug)]
pub struct AibomService<S = InMemoryStore> {
    store: Arc<S>,
    validator: AibomValidator,
}

impl Default for AibomService<InMemoryStore> {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}

impl<S: DocumentStore> AibomService<S> {
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            validator: AibomValidator::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            aiboms_stored: self.store.len(),
        }
    }

    /// Build a document from a request and store it
    ///
    /// Only model and tool declarations are built; other component types
    /// are skipped.
    pub fn create(&self, request: &CreateAibomRequest) -> Aibom {
        let mut builder = AibomBuilder::new(request.name.as_str());
        if let Some(org) = &request.organization {
            builder = builder.with_organization(org.as_str());
        }

        for c in &request.components {
            match c.component_type {
                ComponentType::Model => {
                    builder.add_model(ModelDecl {
                        name: c.name.clone(),
                        provider: c.provider.clone().unwrap_or_default(),
                        version: c.version.clone(),
                        risk: c.risk_classification,
                        description: c.description.clone(),
                    });
                }
                ComponentType::Tool => {
                    builder.add_tool(ToolDecl {
                        name: c.name.clone(),
                        provider: c.provider.clone(),
                        version: c.version.clone(),
                        description: c.description.clone(),
                    });
                }
                ComponentType::DataSource
                | ComponentType::Policy
                | ComponentType::Processor
                | ComponentType::Framework => {
                    tracing::warn!(
                        component = %c.name,
                        component_type = %c.component_type,
                        "component type not accepted on create, skipped"
                    );
                }
            }
        }

        let doc = builder.build();
        self.store.put(doc.clone());
        tracing::info!(id = %doc.id, components = doc.components.len(), "aibom stored");
        doc
    }

    /// # Errors
    /// Returns [`ServiceError::NotFound`] for an unknown id
    pub fn get(&self, id: &str) -> Result<Aibom, ServiceError> {
        self.store.get(id).ok_or_else(|| {
            tracing::warn!(id, "aibom not found");
            ServiceError::not_found(id)
        })
    }

    /// Validate a stored document
    ///
    /// # Errors
    /// Returns [`ServiceError::NotFound`] for an unknown id
    pub fn validate(&self, id: &str) -> Result<ValidationResult, ServiceError> {
        let doc = self.get(id)?;
        Ok(self.validator.validate(&doc))
    }

    /// Append a component directly to a stored document
    ///
    /// The component id is `comp-<n>` where `n` is the component count
    /// before the append. Nothing is checked; a later [`validate`] call
    /// reports any collision.
    ///
    /// [`validate`]: Self::validate
    ///
    /// # Errors
    /// Returns [`ServiceError::NotFound`] for an unknown id
    pub fn add_component(
        &self,
        id: &str,
        request: &ComponentRequest,
    ) -> Result<AddComponentResponse, ServiceError> {
        let mut component_id = String::new();
        let found = self.store.update(id, &mut |doc| {
            component_id = format!("comp-{}", doc.components.len());
            let mut component = Component::new(
                component_id.as_str(),
                request.name.as_str(),
                request.component_type,
            )
            .with_risk(request.risk_classification);
            component.provider.clone_from(&request.provider);
            component.version.clone_from(&request.version);
            component.description.clone_from(&request.description);
            doc.components.push(component);
        });

        if !found {
            tracing::warn!(id, "aibom not found");
            return Err(ServiceError::not_found(id));
        }
        tracing::debug!(id, component_id = %component_id, "component appended");
        Ok(AddComponentResponse {
            added: true,
            component_id,
        })
    }

    #[must_use]
    pub fn list(&self) -> ListResponse {
        let aiboms = self.store.list();
        ListResponse {
            count: aiboms.len(),
            aiboms,
        }
    }

    /// Run every policy of `engine` over a stored document
    ///
    /// # Errors
    /// Returns [`ServiceError::NotFound`] for an unknown id
    pub fn evaluate_policies(
        &self,
        id: &str,
        engine: &PolicyEngine,
    ) -> Result<Vec<PolicyResult>, ServiceError> {
        let doc = self.get(id)?;
        Ok(engine.evaluate_all(&doc))
    }
}
