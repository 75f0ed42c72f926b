//! Validation verdict

use serde::{Deserialize, Serialize};

/// Result of validating one document
///
/// `valid` is true iff `errors` is empty. Warnings never affect the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Build a verdict from collected findings
    #[must_use]
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Valid and free of warnings
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.valid && self.warnings.is_empty()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::from_findings(Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_do_not_invalidate() {
        let result = ValidationResult::from_findings(vec![], vec!["minor".to_string()]);
        assert!(result.is_valid());
        assert!(result.has_warnings());
        assert!(!result.is_clean());
    }

    #[test]
    fn errors_invalidate() {
        let result = ValidationResult::from_findings(vec!["broken".to_string()], vec![]);
        assert!(!result.valid);
    }

    #[test]
    fn default_is_clean() {
        assert!(ValidationResult::default().is_clean());
    }
}
