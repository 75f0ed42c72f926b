//! Validation rules
//!
//! Each rule inspects a document independently and reports findings as
//! human-readable messages. Findings of one rule never suppress another.

use aibom_model::{Aibom, ComponentType};
use std::collections::HashSet;

/// Whether a rule's findings invalidate the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingLevel {
    /// Makes the document unsafe to trust
    Error,
    /// Non-fatal quality concern
    Warning,
}

/// Built-in validation rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    /// Every component has a non-empty id
    MissingId,
    /// Non-empty component ids are unique
    DuplicateIds,
    /// Dependency endpoints name existing components
    DanglingDependency,
    /// HIGH/UNACCEPTABLE components carry a description
    HighRiskDescription,
    /// Models name their provider
    ModelProvider,
}

impl ValidationRule {
    /// All rules in the order they run
    pub const ALL: [ValidationRule; 5] = [
        Self::MissingId,
        Self::DuplicateIds,
        Self::DanglingDependency,
        Self::HighRiskDescription,
        Self::ModelProvider,
    ];

    /// Short rule name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingId => "missing-id",
            Self::DuplicateIds => "duplicate-ids",
            Self::DanglingDependency => "dangling-dependency",
            Self::HighRiskDescription => "high-risk-description",
            Self::ModelProvider => "model-provider",
        }
    }

    #[must_use]
    pub fn level(&self) -> FindingLevel {
        match self {
            Self::MissingId | Self::DuplicateIds | Self::DanglingDependency => FindingLevel::Error,
            Self::HighRiskDescription | Self::ModelProvider => FindingLevel::Warning,
        }
    }

    /// Run this rule, returning findings in component/edge order
    #[must_use]
    pub fn check(&self, doc: &Aibom) -> Vec<String> {
        match self {
            Self::MissingId => missing_ids(doc),
            Self::DuplicateIds => duplicate_ids(doc),
            Self::DanglingDependency => dangling_dependencies(doc),
            Self::HighRiskDescription => high_risk_without_description(doc),
            Self::ModelProvider => models_without_provider(doc),
        }
    }
}

fn missing_ids(doc: &Aibom) -> Vec<String> {
    doc.components
        .iter()
        .enumerate()
        .filter(|(_, c)| c.id.is_empty())
        .map(|(i, _)| format!("Component {i} missing ID"))
        .collect()
}

fn duplicate_ids(doc: &Aibom) -> Vec<String> {
    let ids: Vec<&str> = doc
        .components
        .iter()
        .map(|c| c.id.as_str())
        .filter(|id| !id.is_empty())
        .collect();
    let distinct: HashSet<&str> = ids.iter().copied().collect();

    if distinct.len() == ids.len() {
        Vec::new()
    } else {
        vec!["Duplicate component IDs found".to_string()]
    }
}

fn dangling_dependencies(doc: &Aibom) -> Vec<String> {
    let known = doc.component_ids();
    let mut findings = Vec::new();

    for edge in &doc.dependencies {
        if !known.contains(edge.from.as_str()) {
            findings.push(format!(
                "Dependency references unknown component: {}",
                edge.from
            ));
        }
        if !known.contains(edge.to.as_str()) {
            findings.push(format!(
                "Dependency references unknown component: {}",
                edge.to
            ));
        }
    }

    findings
}

fn high_risk_without_description(doc: &Aibom) -> Vec<String> {
    doc.high_risk_components()
        .into_iter()
        .filter(|c| c.description().is_none())
        .map(|c| format!("High-risk component '{}' missing description", c.name))
        .collect()
}

fn models_without_provider(doc: &Aibom) -> Vec<String> {
    doc.components
        .iter()
        .filter(|c| match c.component_type {
            ComponentType::Model => c.provider().is_none(),
            ComponentType::Tool
            | ComponentType::DataSource
            | ComponentType::Policy
            | ComponentType::Processor
            | ComponentType::Framework => false,
        })
        .map(|c| format!("Model '{}' missing provider", c.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aibom_model::{Component, Dependency, RiskClassification};

    fn doc_with(components: Vec<Component>) -> Aibom {
        let mut doc = Aibom::new("aibom-test", "rules");
        doc.components = components;
        doc
    }

    #[test]
    fn missing_id_reports_position() {
        let doc = doc_with(vec![
            Component::new("ok", "a", ComponentType::Tool),
            Component::new("", "b", ComponentType::Tool),
        ]);
        assert_eq!(
            ValidationRule::MissingId.check(&doc),
            vec!["Component 1 missing ID"]
        );
    }

    #[test]
    fn empty_ids_are_not_duplicates() {
        let doc = doc_with(vec![
            Component::new("", "a", ComponentType::Tool),
            Component::new("", "b", ComponentType::Tool),
        ]);
        assert!(ValidationRule::DuplicateIds.check(&doc).is_empty());
    }

    #[test]
    fn duplicates_reported_once() {
        let doc = doc_with(vec![
            Component::new("x", "a", ComponentType::Tool),
            Component::new("x", "b", ComponentType::Tool),
            Component::new("y", "c", ComponentType::Tool),
            Component::new("y", "d", ComponentType::Tool),
        ]);
        assert_eq!(ValidationRule::DuplicateIds.check(&doc).len(), 1);
    }

    #[test]
    fn edge_with_both_ends_dangling_reports_twice() {
        let mut doc = doc_with(vec![]);
        doc.dependencies.push(Dependency::new("a", "b"));
        assert_eq!(
            ValidationRule::DanglingDependency.check(&doc),
            vec![
                "Dependency references unknown component: a",
                "Dependency references unknown component: b",
            ]
        );
    }

    #[test]
    fn limited_risk_needs_no_description() {
        let doc = doc_with(vec![Component::new("c", "classifier", ComponentType::Model)
            .with_provider("p")
            .with_risk(RiskClassification::Limited)]);
        assert!(ValidationRule::HighRiskDescription.check(&doc).is_empty());
    }

    #[test]
    fn provider_rule_ignores_non_models() {
        let doc = doc_with(vec![Component::new("f", "langchain", ComponentType::Framework)]);
        assert!(ValidationRule::ModelProvider.check(&doc).is_empty());
    }

    #[test]
    fn levels_split_errors_from_warnings() {
        let errors: Vec<_> = ValidationRule::ALL
            .iter()
            .filter(|r| r.level() == FindingLevel::Error)
            .map(ValidationRule::name)
            .collect();
        assert_eq!(
            errors,
            vec!["missing-id", "duplicate-ids", "dangling-dependency"]
        );
    }
}
