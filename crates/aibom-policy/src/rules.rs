//! Built-in policy rules

use crate::rule::{PolicyRule, Severity, Violation};
use aibom_model::{Aibom, ComponentType, RiskClassification};
use std::collections::HashSet;

/// Denies any model whose name contains the given name
#[derive(Debug, Clone)]
pub struct DenyModel {
    pub model_name: String,
    pub reason: String,
    pub severity: Severity,
}

impl PolicyRule for DenyModel {
    fn id(&self) -> &'static str {
        "AIBOM-001"
    }

    fn name(&self) -> &'static str {
        "deny-model"
    }

    fn description(&self) -> String {
        format!("Deny model: {}", self.model_name)
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, doc: &Aibom) -> Vec<Violation> {
        doc.components
            .iter()
            .filter(|c| c.is_model() && c.name.contains(&self.model_name))
            .map(|c| {
                self.violation(
                    format!("model '{}' is denied: {}", c.name, self.reason),
                    Some(c.name.as_str()),
                )
            })
            .collect()
    }
}

/// Requires a pinned version on every model whose name contains `model_name`
#[derive(Debug, Clone)]
pub struct RequireModelVersion {
    pub model_name: String,
    pub severity: Severity,
}

impl PolicyRule for RequireModelVersion {
    fn id(&self) -> &'static str {
        "AIBOM-002"
    }

    fn name(&self) -> &'static str {
        "require-model-version"
    }

    fn description(&self) -> String {
        format!("Model {} must have pinned version", self.model_name)
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, doc: &Aibom) -> Vec<Violation> {
        doc.components
            .iter()
            .filter(|c| {
                c.is_model() && c.name.contains(&self.model_name) && c.version().is_none()
            })
            .map(|c| {
                self.violation(
                    format!("model '{}' has no pinned version", c.name),
                    Some(c.name.as_str()),
                )
            })
            .collect()
    }
}

/// Restricts model providers to an allow-list (case-insensitive)
///
/// Models without a provider are not checked here; the validator already
/// warns about them.
#[derive(Debug, Clone)]
pub struct AllowedProviders {
    pub providers: Vec<String>,
    pub severity: Severity,
}

impl PolicyRule for AllowedProviders {
    fn id(&self) -> &'static str {
        "AIBOM-003"
    }

    fn name(&self) -> &'static str {
        "allowed-providers"
    }

    fn description(&self) -> String {
        format!("Only providers: {:?}", self.providers)
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, doc: &Aibom) -> Vec<Violation> {
        let allowed: HashSet<String> = self.providers.iter().map(|p| p.to_lowercase()).collect();

        doc.components
            .iter()
            .filter(|c| c.is_model())
            .filter_map(|c| c.provider().map(|p| (c, p)))
            .filter(|(_, provider)| !allowed.contains(&provider.to_lowercase()))
            .map(|(c, provider)| {
                self.violation(
                    format!(
                        "provider '{provider}' not in allowed list for model '{}'",
                        c.name
                    ),
                    Some(c.name.as_str()),
                )
            })
            .collect()
    }
}

/// Denies any tool whose name contains the given name
#[derive(Debug, Clone)]
pub struct DenyTool {
    pub tool_name: String,
    pub reason: String,
    pub severity: Severity,
}

impl PolicyRule for DenyTool {
    fn id(&self) -> &'static str {
        "AIBOM-004"
    }

    fn name(&self) -> &'static str {
        "deny-tool"
    }

    fn description(&self) -> String {
        format!("Deny tool: {}", self.tool_name)
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, doc: &Aibom) -> Vec<Violation> {
        doc.components
            .iter()
            .filter(|c| c.is_tool() && c.name.contains(&self.tool_name))
            .map(|c| {
                self.violation(
                    format!("tool '{}' is denied: {}", c.name, self.reason),
                    Some(c.name.as_str()),
                )
            })
            .collect()
    }
}

/// Component kind counted by [`MaxComponents`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountedKind {
    Models,
    Tools,
}

impl CountedKind {
    fn component_type(self) -> ComponentType {
        match self {
            Self::Models => ComponentType::Model,
            Self::Tools => ComponentType::Tool,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::Models => "models",
            Self::Tools => "tools",
        }
    }
}

/// Caps the number of models or tools
#[derive(Debug, Clone)]
pub struct MaxComponents {
    pub kind: CountedKind,
    pub max: usize,
    pub severity: Severity,
}

impl PolicyRule for MaxComponents {
    fn id(&self) -> &'static str {
        match self.kind {
            CountedKind::Models => "AIBOM-005",
            CountedKind::Tools => "AIBOM-006",
        }
    }

    fn name(&self) -> &'static str {
        match self.kind {
            CountedKind::Models => "max-models",
            CountedKind::Tools => "max-tools",
        }
    }

    fn description(&self) -> String {
        format!("Max {} {} allowed", self.max, self.kind.noun())
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, doc: &Aibom) -> Vec<Violation> {
        let count = doc.count_of(self.kind.component_type());
        if count > self.max {
            vec![self.violation(
                format!(
                    "{count} {} found, max {} allowed",
                    self.kind.noun(),
                    self.max
                ),
                None,
            )]
        } else {
            Vec::new()
        }
    }
}

/// Requires every model to carry a pinned version
#[derive(Debug, Clone)]
pub struct RequireAllModelsVersioned {
    pub severity: Severity,
}

impl PolicyRule for RequireAllModelsVersioned {
    fn id(&self) -> &'static str {
        "AIBOM-007"
    }

    fn name(&self) -> &'static str {
        "require-all-models-versioned"
    }

    fn description(&self) -> String {
        "All models must have pinned versions".to_string()
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, doc: &Aibom) -> Vec<Violation> {
        doc.components
            .iter()
            .filter(|c| c.is_model() && c.version().is_none())
            .map(|c| {
                self.violation(
                    format!("model '{}' has no pinned version", c.name),
                    Some(c.name.as_str()),
                )
            })
            .collect()
    }
}

/// Caps the risk classification of every component
#[derive(Debug, Clone)]
pub struct MaxRisk {
    pub level: RiskClassification,
    pub severity: Severity,
}

impl PolicyRule for MaxRisk {
    fn id(&self) -> &'static str {
        "AIBOM-008"
    }

    fn name(&self) -> &'static str {
        "max-risk"
    }

    fn description(&self) -> String {
        format!("Components may not exceed {} risk", self.level)
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, doc: &Aibom) -> Vec<Violation> {
        doc.components
            .iter()
            .filter(|c| c.risk > self.level)
            .map(|c| {
                self.violation(
                    format!(
                        "component '{}' risk {} exceeds {}",
                        c.name, c.risk, self.level
                    ),
                    Some(c.name.as_str()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aibom_model::Component;

    fn test_bom() -> Aibom {
        let mut doc = Aibom::new("aibom-policy", "policy");
        doc.components = vec![
            Component::new("m1", "gpt-4", ComponentType::Model)
                .with_version("2024-01")
                .with_provider("openai"),
            Component::new("m2", "claude-3-sonnet", ComponentType::Model)
                .with_provider("anthropic")
                .with_risk(RiskClassification::High),
            Component::new("t1", "web_search", ComponentType::Tool).with_version("1.0"),
            Component::new("t2", "exec_sql", ComponentType::Tool)
                .with_risk(RiskClassification::Unacceptable),
            Component::new("f1", "langchain", ComponentType::Framework).with_version("0.1.0"),
        ];
        doc
    }

    #[test]
    fn deny_model_matches_substring() {
        let rule = DenyModel {
            model_name: "gpt".to_string(),
            reason: "not approved".to_string(),
            severity: Severity::High,
        };
        let violations = rule.evaluate(&test_bom());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "model 'gpt-4' is denied: not approved"
        );
        assert_eq!(violations[0].component.as_deref(), Some("gpt-4"));

        let rule = DenyModel {
            model_name: "llama-3".to_string(),
            reason: "test".to_string(),
            severity: Severity::High,
        };
        assert!(rule.evaluate(&test_bom()).is_empty());
    }

    #[test]
    fn require_model_version_checks_named_model_only() {
        let rule = RequireModelVersion {
            model_name: "claude-3-sonnet".to_string(),
            severity: Severity::High,
        };
        assert_eq!(rule.evaluate(&test_bom()).len(), 1);

        let rule = RequireModelVersion {
            model_name: "gpt-4".to_string(),
            severity: Severity::High,
        };
        assert!(rule.evaluate(&test_bom()).is_empty());
    }

    #[test]
    fn require_model_version_matches_name_substring() {
        let rule = RequireModelVersion {
            model_name: "claude".to_string(),
            severity: Severity::Medium,
        };
        let violations = rule.evaluate(&test_bom());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].component.as_deref(), Some("claude-3-sonnet"));
        assert_eq!(violations[0].severity, Severity::Medium);

        // versioned model is not flagged even on a partial match
        let rule = RequireModelVersion {
            model_name: "gpt".to_string(),
            severity: Severity::High,
        };
        assert!(rule.evaluate(&test_bom()).is_empty());
    }

    #[test]
    fn allowed_providers_is_case_insensitive() {
        let rule = AllowedProviders {
            providers: vec!["OpenAI".to_string()],
            severity: Severity::High,
        };
        let violations = rule.evaluate(&test_bom());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "provider 'anthropic' not in allowed list for model 'claude-3-sonnet'"
        );

        let rule = AllowedProviders {
            providers: vec!["openai".to_string(), "ANTHROPIC".to_string()],
            severity: Severity::High,
        };
        assert!(rule.evaluate(&test_bom()).is_empty());
    }

    #[test]
    fn deny_tool() {
        let rule = DenyTool {
            tool_name: "exec_sql".to_string(),
            reason: "dangerous".to_string(),
            severity: Severity::Critical,
        };
        let violations = rule.evaluate(&test_bom());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Critical);
        assert_eq!(violations[0].rule_id, "AIBOM-004");
    }

    #[test]
    fn max_components() {
        let rule = MaxComponents {
            kind: CountedKind::Models,
            max: 1,
            severity: Severity::Medium,
        };
        let violations = rule.evaluate(&test_bom());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "2 models found, max 1 allowed");
        assert_eq!(violations[0].component, None);

        let rule = MaxComponents {
            kind: CountedKind::Tools,
            max: 2,
            severity: Severity::Medium,
        };
        assert!(rule.evaluate(&test_bom()).is_empty());
        assert_eq!(rule.name(), "max-tools");
    }

    #[test]
    fn require_all_models_versioned() {
        let rule = RequireAllModelsVersioned {
            severity: Severity::Low,
        };
        let violations = rule.evaluate(&test_bom());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].component.as_deref(), Some("claude-3-sonnet"));
    }

    #[test]
    fn max_risk() {
        let rule = MaxRisk {
            level: RiskClassification::High,
            severity: Severity::Critical,
        };
        let violations = rule.evaluate(&test_bom());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "component 'exec_sql' risk unacceptable exceeds high"
        );

        let rule = MaxRisk {
            level: RiskClassification::Limited,
            severity: Severity::Critical,
        };
        assert_eq!(rule.evaluate(&test_bom()).len(), 2);
    }
}
