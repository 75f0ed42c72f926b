//! Rule registry and policy file loading
//!
//! Provides [`RuleRegistry`], which maps rule type tags found in policy
//! files to rule constructors.

use crate::engine::Policy;
use crate::error::PolicyError;
use crate::rule::{PolicyRule, Severity};
use crate::rules::{
    AllowedProviders, CountedKind, DenyModel, DenyTool, MaxComponents, MaxRisk,
    RequireAllModelsVersioned, RequireModelVersion,
};
use aibom_model::RiskClassification;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// Rule parameters as written in a policy file
pub type Params = Map<String, Value>;

/// Function building a rule from its severity and parameters
pub type RuleConstructor = fn(Severity, &Params) -> Result<Box<dyn PolicyRule>, PolicyError>;

/// Serializable policy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyFile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

/// One rule entry in a policy file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDef {
    #[serde(rename = "type")]
    pub rule_type: String,
    /// Defaults to `high` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub params: Params,
}

/// Registry of rule constructors keyed by rule type
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    constructors: HashMap<String, RuleConstructor>,
}

impl RuleRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create registry with built-in rules
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("deny-model", build_deny_model);
        registry.register("require-model-version", build_require_model_version);
        registry.register("allowed-providers", build_allowed_providers);
        registry.register("deny-tool", build_deny_tool);
        registry.register("max-models", build_max_models);
        registry.register("max-tools", build_max_tools);
        registry.register("require-all-models-versioned", build_require_all_versioned);
        registry.register("max-risk", build_max_risk);
        registry
    }

    /// Register (or replace) a rule constructor
    pub fn register(&mut self, rule_type: &str, constructor: RuleConstructor) {
        self.constructors.insert(rule_type.to_string(), constructor);
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, rule_type: &str) -> bool {
        self.constructors.contains_key(rule_type)
    }

    /// Registered rule types, sorted
    #[must_use]
    pub fn rule_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Build one rule from its definition
    ///
    /// # Errors
    /// Returns error if the type is unknown or its parameters are unusable
    pub fn build_rule(&self, def: &RuleDef) -> Result<Box<dyn PolicyRule>, PolicyError> {
        let constructor = self
            .constructors
            .get(&def.rule_type)
            .ok_or_else(|| PolicyError::UnknownRuleType(def.rule_type.clone()))?;
        constructor(def.severity.unwrap_or_default(), &def.params)
    }

    /// Build a policy from a parsed policy file
    ///
    /// # Errors
    /// Returns the first rule construction error
    pub fn build_policy(&self, file: &PolicyFile) -> Result<Policy, PolicyError> {
        let rules = file
            .rules
            .iter()
            .map(|def| self.build_rule(def))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(policy = %file.name, rules = rules.len(), "loaded policy");
        Ok(Policy::new(file.name.clone(), rules))
    }

    /// Parse a policy from JSON
    ///
    /// # Errors
    /// Returns error if JSON is invalid or a rule cannot be built
    pub fn parse_json(&self, json: &str) -> Result<Policy, PolicyError> {
        let file: PolicyFile = serde_json::from_str(json)?;
        self.build_policy(&file)
    }

    /// Parse a policy from YAML
    ///
    /// # Errors
    /// Returns error if YAML is invalid or a rule cannot be built
    pub fn parse_yaml(&self, yaml: &str) -> Result<Policy, PolicyError> {
        let file: PolicyFile = serde_yaml::from_str(yaml)?;
        self.build_policy(&file)
    }

    /// Load a policy file, choosing YAML for `.yaml`/`.yml` and JSON otherwise
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or built
    pub fn load_file(&self, path: &Path) -> Result<Policy, PolicyError> {
        let text = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => self.parse_yaml(&text),
            _ => self.parse_json(&text),
        }
    }
}

fn required_str(params: &Params, rule: &str, key: &str) -> Result<String, PolicyError> {
    match params.get(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(PolicyError::missing(rule, key)),
    }
}

fn optional_str(params: &Params, key: &str) -> String {
    params
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// String entries of a list parameter; non-string entries are skipped
fn string_list(params: &Params, key: &str) -> Vec<String> {
    params
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Non-negative count parameter, 0 when absent
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(params: &Params, rule: &str, key: &str) -> Result<usize, PolicyError> {
    let Some(value) = params.get(key) else {
        return Ok(0);
    };
    let n = value
        .as_f64()
        .ok_or_else(|| PolicyError::invalid(rule, key, "expected a number"))?;
    if n < 0.0 {
        return Err(PolicyError::invalid(rule, key, "must not be negative"));
    }
    Ok(n as usize)
}

fn build_deny_model(
    severity: Severity,
    params: &Params,
) -> Result<Box<dyn PolicyRule>, PolicyError> {
    Ok(Box::new(DenyModel {
        model_name: required_str(params, "deny-model", "model_name")?,
        reason: optional_str(params, "reason"),
        severity,
    }))
}

fn build_require_model_version(
    severity: Severity,
    params: &Params,
) -> Result<Box<dyn PolicyRule>, PolicyError> {
    Ok(Box::new(RequireModelVersion {
        model_name: required_str(params, "require-model-version", "model_name")?,
        severity,
    }))
}

fn build_allowed_providers(
    severity: Severity,
    params: &Params,
) -> Result<Box<dyn PolicyRule>, PolicyError> {
    Ok(Box::new(AllowedProviders {
        providers: string_list(params, "providers"),
        severity,
    }))
}

fn build_deny_tool(
    severity: Severity,
    params: &Params,
) -> Result<Box<dyn PolicyRule>, PolicyError> {
    Ok(Box::new(DenyTool {
        tool_name: required_str(params, "deny-tool", "tool_name")?,
        reason: optional_str(params, "reason"),
        severity,
    }))
}

fn build_max_models(
    severity: Severity,
    params: &Params,
) -> Result<Box<dyn PolicyRule>, PolicyError> {
    Ok(Box::new(MaxComponents {
        kind: CountedKind::Models,
        max: count(params, "max-models", "max")?,
        severity,
    }))
}

fn build_max_tools(
    severity: Severity,
    params: &Params,
) -> Result<Box<dyn PolicyRule>, PolicyError> {
    Ok(Box::new(MaxComponents {
        kind: CountedKind::Tools,
        max: count(params, "max-tools", "max")?,
        severity,
    }))
}

fn build_require_all_versioned(
    severity: Severity,
    _params: &Params,
) -> Result<Box<dyn PolicyRule>, PolicyError> {
    Ok(Box::new(RequireAllModelsVersioned { severity }))
}

fn build_max_risk(
    severity: Severity,
    params: &Params,
) -> Result<Box<dyn PolicyRule>, PolicyError> {
    let level = match params.get("level").and_then(Value::as_str) {
        None => RiskClassification::Limited,
        Some(raw) => raw
            .parse()
            .map_err(|reason: String| PolicyError::invalid("max-risk", "level", reason))?,
    };
    Ok(Box::new(MaxRisk { level, severity }))
}
