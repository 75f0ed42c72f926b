//! Policy rule abstraction

use aibom_model::Aibom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Impact level of a violation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    /// Used when a rule definition gives no severity
    #[default]
    High,
    Medium,
    Low,
}

impl Severity {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Critical and high violations fail a policy
    #[inline]
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A policy rule failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: String,
    pub rule_name: String,
    pub severity: Severity,
    pub message: String,
    /// Name of the offending component, when the violation has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

/// A single policy assertion evaluated against a document
pub trait PolicyRule: fmt::Debug + Send + Sync {
    /// Stable rule id (`AIBOM-001`, ...)
    fn id(&self) -> &'static str;

    /// Rule type tag as used in policy files
    fn name(&self) -> &'static str;

    fn description(&self) -> String;

    fn severity(&self) -> Severity;

    /// Evaluate the rule, returning one violation per offence
    fn evaluate(&self, doc: &Aibom) -> Vec<Violation>;

    /// Violation stamped with this rule's id, name and severity
    fn violation(&self, message: String, component: Option<&str>) -> Violation {
        Violation {
            rule_id: self.id().to_string(),
            rule_name: self.name().to_string(),
            severity: self.severity(),
            message,
            component: component.map(str::to_string),
        }
    }
}
