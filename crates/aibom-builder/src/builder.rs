//! AIBOM Builder
//!
//! The construction interface for documents. Declarations are accumulated
//! and turned into an [`Aibom`] snapshot by [`AibomBuilder::build`].
//!
//! Construction is permissive: dependency edges are recorded without
//! checking that their endpoints exist, and empty names are accepted. All
//! consistency checking is deferred to validation.

use crate::declaration::{DataSourceDecl, ModelDecl, ToolDecl};
use aibom_model::{
    id, Aibom, Component, ComponentType, Dependency, Metadata, MetadataValue,
};

/// Builder for constructing AIBOM documents
///
/// Usage:
/// ```rust,ignore
/// let mut builder = AibomBuilder::new("Agent System").with_organization("Acme");
/// let model = builder.add_model(ModelDecl::new("GPT-4", "OpenAI").with_version("1.0"));
/// let tool = builder.add_tool(ToolDecl::new("SearchTool").with_provider("Internal"));
/// builder.add_dependency(&tool, &model);
/// let doc: Aibom = builder.build();
/// ```
///
/// A builder may be built more than once; each call yields a document with
/// a fresh id and the same content.
#[derive(Debug, Clone)]
pub struct AibomBuilder {
    name: String,
    organization: Option<String>,
    components: Vec<Component>,
    dependencies: Vec<Dependency>,
    metadata: Metadata,
}

impl AibomBuilder {
    /// Create a new builder for a document with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organization: None,
            components: Vec::new(),
            dependencies: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    /// Set the owning organization (an empty string means none)
    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        let organization = organization.into();
        self.organization = (!organization.is_empty()).then_some(organization);
        self
    }

    /// Get the document name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the organization, if any
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Get the number of pending components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Get the number of pending dependency edges
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    /// Pending components in declaration order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Add a model component
    ///
    /// Returns the generated id (`model-<token>`).
    pub fn add_model(&mut self, decl: ModelDecl) -> String {
        let mut component = Component::new(
            id::component_id(ComponentType::Model),
            decl.name,
            ComponentType::Model,
        )
        .with_provider(decl.provider)
        .with_risk(decl.risk);
        component.version = decl.version;
        component.description = decl.description;
        self.push(component)
    }

    /// Add a tool component
    ///
    /// Returns the generated id (`tool-<token>`).
    pub fn add_tool(&mut self, decl: ToolDecl) -> String {
        let mut component = Component::new(
            id::component_id(ComponentType::Tool),
            decl.name,
            ComponentType::Tool,
        );
        component.provider = decl.provider;
        component.version = decl.version;
        component.description = decl.description;
        self.push(component)
    }

    /// Add a data source component
    ///
    /// Returns the generated id (`data-<token>`).
    pub fn add_data_source(&mut self, decl: DataSourceDecl) -> String {
        let mut component = Component::new(
            id::component_id(ComponentType::DataSource),
            decl.name,
            ComponentType::DataSource,
        );
        component.provider = decl.provider;
        component.description = decl.description;
        self.push(component)
    }

    /// Record a dependency edge
    ///
    /// Neither endpoint is checked here. Edges may name components declared
    /// later, or ids that never exist; validation reports the latter.
    pub fn add_dependency(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let edge = Dependency::new(from, to);
        tracing::debug!(from = %edge.from, to = %edge.to, "recorded dependency");
        self.dependencies.push(edge);
    }

    /// Insert or replace a document metadata entry
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Produce a document snapshot
    ///
    /// Assigns a fresh `aibom-<token>` id, stamps the current time and
    /// copies the accumulated components, dependencies and metadata. The
    /// builder is left untouched.
    pub fn build(&self) -> Aibom {
        let mut doc = Aibom::new(id::document_id(), self.name.clone());
        doc.organization.clone_from(&self.organization);
        doc.components.clone_from(&self.components);
        doc.dependencies.clone_from(&self.dependencies);
        doc.metadata.clone_from(&self.metadata);

        tracing::info!(
            id = %doc.id,
            name = %doc.name,
            components = doc.components.len(),
            dependencies = doc.dependencies.len(),
            "built aibom"
        );
        doc
    }

    fn push(&mut self, component: Component) -> String {
        if component.name.is_empty() {
            tracing::warn!(id = %component.id, "component declared with empty name");
        }
        tracing::debug!(
            id = %component.id,
            kind = %component.component_type,
            name = %component.name,
            "added component"
        );
        let id = component.id.clone();
        self.components.push(component);
        id
    }
}
