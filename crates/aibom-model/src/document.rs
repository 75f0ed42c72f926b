//! AIBOM document (aggregate root)

use crate::component::{Component, ComponentType};
use crate::error::ModelError;
use crate::metadata::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Document version stamped when none is given
pub const DEFAULT_DOCUMENT_VERSION: &str = "1.0";

fn default_version() -> String {
    DEFAULT_DOCUMENT_VERSION.to_string()
}

/// Directed dependency edge between two component ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub from: String,
    pub to: String,
}

impl Dependency {
    #[inline]
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// AI Bill of Materials document
///
/// Fields are public: a built document may be extended in place (for
/// example by appending components), and such edits are exactly what the
/// validator exists to re-check. Nothing here rejects duplicate or dangling
/// ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aibom {
    /// Document id (`aibom-<token>` when produced by the builder)
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Aibom {
    /// Create an empty document stamped with the current time
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: default_version(),
            created_at: Utc::now(),
            organization: None,
            components: Vec::new(),
            dependencies: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    /// Decode a document from JSON
    ///
    /// # Errors
    /// Returns error if the input is not a JSON document of this shape
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as pretty-printed JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of components of the given type
    #[must_use]
    pub fn count_of(&self, component_type: ComponentType) -> usize {
        self.components
            .iter()
            .filter(|c| c.component_type == component_type)
            .count()
    }

    /// Number of MODEL components
    #[inline]
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.count_of(ComponentType::Model)
    }

    /// Number of TOOL components
    #[inline]
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.count_of(ComponentType::Tool)
    }

    /// Components classified HIGH or UNACCEPTABLE, in document order
    #[must_use]
    pub fn high_risk_components(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| c.is_high_risk())
            .collect()
    }

    /// Find first component with the given id
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Set of all component ids (including empty ones)
    #[must_use]
    pub fn component_ids(&self) -> HashSet<&str> {
        self.components.iter().map(|c| c.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::RiskClassification;

    fn sample() -> Aibom {
        let mut doc = Aibom::new("aibom-000000000001", "Agent System");
        doc.components = vec![
            Component::new("model-1", "GPT-4", ComponentType::Model)
                .with_risk(RiskClassification::High),
            Component::new("model-2", "Claude", ComponentType::Model),
            Component::new("tool-1", "Search", ComponentType::Tool)
                .with_risk(RiskClassification::Unacceptable),
            Component::new("data-1", "Docs", ComponentType::DataSource)
                .with_risk(RiskClassification::Limited),
        ];
        doc
    }

    #[test]
    fn derived_counts() {
        let doc = sample();
        assert_eq!(doc.model_count(), 2);
        assert_eq!(doc.tool_count(), 1);
        assert_eq!(doc.count_of(ComponentType::DataSource), 1);
        assert_eq!(doc.count_of(ComponentType::Framework), 0);
    }

    #[test]
    fn high_risk_subset_keeps_order() {
        let doc = sample();
        let names: Vec<&str> = doc
            .high_risk_components()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["GPT-4", "Search"]);
    }

    #[test]
    fn new_document_defaults() {
        let doc = Aibom::new("aibom-x", "Empty");
        assert_eq!(doc.version, DEFAULT_DOCUMENT_VERSION);
        assert!(doc.components.is_empty());
        assert!(doc.dependencies.is_empty());
        assert_eq!(doc.model_count(), 0);
        assert!(doc.high_risk_components().is_empty());
    }

    #[test]
    fn component_lookup() {
        let doc = sample();
        assert_eq!(
            doc.component("tool-1").map(|c| c.name.as_str()),
            Some("Search")
        );
        assert!(doc.component("missing").is_none());
        assert!(doc.component_ids().contains("data-1"));
    }
}
