//! AIBOM Validator
//!
//! Certifies a finished document. Validation never fails: it always
//! returns a complete [`ValidationResult`].

use crate::rules::{FindingLevel, ValidationRule};
use aibom_model::{Aibom, ValidationResult};

/// Stateless document validator
///
/// Runs every [`ValidationRule`] in order. Errors and warnings are
/// reported in rule order, then component order within a rule. The
/// result is a pure function of the document's current content, so it may
/// change after components are appended to a built document.
#[derive(Debug, Clone, Copy, Default)]
pub struct AibomValidator;

impl AibomValidator {
    /// Create new validator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate a document
    #[must_use]
    pub fn validate(&self, doc: &Aibom) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for rule in ValidationRule::ALL {
            let findings = rule.check(doc);
            if !findings.is_empty() {
                tracing::debug!(rule = rule.name(), count = findings.len(), "rule findings");
            }
            match rule.level() {
                FindingLevel::Error => errors.extend(findings),
                FindingLevel::Warning => warnings.extend(findings),
            }
        }

        let result = ValidationResult::from_findings(errors, warnings);
        tracing::info!(
            id = %doc.id,
            valid = result.valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "validated aibom"
        );
        result
    }
}
