//! Error types for policy loading

use std::path::PathBuf;

/// Errors building rules or loading policy files
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// No constructor registered for a rule type
    #[error("unknown rule type: {0}")]
    UnknownRuleType(String),

    /// Required rule parameter absent or empty
    #[error("build rule {rule}: {param} required")]
    MissingParam { rule: String, param: String },

    /// Rule parameter present but unusable
    #[error("build rule {rule}: invalid {param}: {reason}")]
    InvalidParam {
        rule: String,
        param: String,
        reason: String,
    },

    #[error("parse policy: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("parse policy: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// IO error reading a policy file
    #[error("read policy {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PolicyError {
    pub(crate) fn missing(rule: &str, param: &str) -> Self {
        Self::MissingParam {
            rule: rule.to_string(),
            param: param.to_string(),
        }
    }

    pub(crate) fn invalid(rule: &str, param: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            rule: rule.to_string(),
            param: param.to_string(),
            reason: reason.into(),
        }
    }
}
