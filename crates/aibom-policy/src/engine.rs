//! Policy evaluation
//!
//! A [`PolicyEngine`] holds named policies and evaluates each against a
//! document, producing one [`PolicyResult`] per policy.

use crate::rule::{PolicyRule, Severity, Violation};
use aibom_model::Aibom;
use serde::{Deserialize, Serialize};

/// A named set of rules
#[derive(Debug)]
pub struct Policy {
    name: String,
    rules: Vec<Box<dyn PolicyRule>>,
}

impl Policy {
    #[must_use]
    pub fn new(name: impl Into<String>, rules: Vec<Box<dyn PolicyRule>>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn PolicyRule>] {
        &self.rules
    }

    /// Add a rule to this policy
    #[must_use]
    pub fn with_rule(mut self, rule: Box<dyn PolicyRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Evaluate every rule, in order
    #[must_use]
    pub fn evaluate(&self, doc: &Aibom) -> PolicyResult {
        let violations = self
            .rules
            .iter()
            .flat_map(|rule| rule.evaluate(doc))
            .collect();
        PolicyResult::new(self.name.clone(), violations)
    }
}

/// Outcome of evaluating one policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResult {
    pub policy_name: String,
    pub violations: Vec<Violation>,
    pub critical_count: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
}

impl PolicyResult {
    /// Build a result, tallying violations by severity
    #[must_use]
    pub fn new(policy_name: String, violations: Vec<Violation>) -> Self {
        let mut result = Self {
            policy_name,
            violations: Vec::new(),
            critical_count: 0,
            high_count: 0,
            medium_count: 0,
            low_count: 0,
        };
        for violation in &violations {
            match violation.severity {
                Severity::Critical => result.critical_count += 1,
                Severity::High => result.high_count += 1,
                Severity::Medium => result.medium_count += 1,
                Severity::Low => result.low_count += 1,
            }
        }
        result.violations = violations;
        result
    }

    /// True when there are no critical or high violations
    #[inline]
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.violations.iter().any(|v| v.severity.is_blocking())
    }
}

/// True if any result failed
#[must_use]
pub fn has_failures(results: &[PolicyResult]) -> bool {
    results.iter().any(|r| !r.passed())
}

/// Evaluates a set of policies against documents
#[derive(Debug, Default)]
pub struct PolicyEngine {
    policies: Vec<Policy>,
}

impl PolicyEngine {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_policy(&mut self, policy: Policy) {
        tracing::debug!(policy = %policy.name, rules = policy.rules.len(), "policy added");
        self.policies.push(policy);
    }

    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.add_policy(policy);
        self
    }

    #[inline]
    #[must_use]
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Evaluate all policies in insertion order
    #[must_use]
    pub fn evaluate_all(&self, doc: &Aibom) -> Vec<PolicyResult> {
        let results: Vec<PolicyResult> = self.policies.iter().map(|p| p.evaluate(doc)).collect();
        for result in &results {
            if result.passed() {
                tracing::debug!(
                    policy = %result.policy_name,
                    violations = result.violations.len(),
                    "policy passed"
                );
            } else {
                tracing::warn!(
                    policy = %result.policy_name,
                    critical = result.critical_count,
                    high = result.high_count,
                    "policy failed"
                );
            }
        }
        results
    }
}
