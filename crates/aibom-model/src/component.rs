//! Component definitions
//!
//! A [`Component`] is a single inventoried AI asset. Its type and risk
//! classification are closed enumerations so every consumer that matches on
//! them is revisited when a variant is added.

use crate::metadata::Metadata;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of AI asset described by a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Machine learning model (LLM, classifier, embedding model, ...)
    Model,
    /// Tool callable by an agent
    Tool,
    /// Data source feeding a model or tool
    DataSource,
    /// Guardrail or governance policy
    Policy,
    /// Pre/post processing stage
    Processor,
    /// Orchestration or ML framework
    Framework,
}

impl ComponentType {
    /// Wire name (`model`, `data_source`, ...)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Tool => "tool",
            Self::DataSource => "data_source",
            Self::Policy => "policy",
            Self::Processor => "processor",
            Self::Framework => "framework",
        }
    }

    /// Prefix used for generated component ids of this type
    #[inline]
    #[must_use]
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Tool => "tool",
            Self::DataSource => "data",
            Self::Policy => "policy",
            Self::Processor => "processor",
            Self::Framework => "framework",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "model" => Ok(Self::Model),
            "tool" => Ok(Self::Tool),
            "data_source" | "data-source" => Ok(Self::DataSource),
            "policy" => Ok(Self::Policy),
            "processor" => Ok(Self::Processor),
            "framework" => Ok(Self::Framework),
            other => Err(format!("unknown component type: {other}")),
        }
    }
}

/// Risk classification levels, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskClassification {
    /// Minimal risk (default)
    #[default]
    Minimal,
    /// Limited risk, transparency obligations
    Limited,
    /// High risk
    High,
    /// Unacceptable risk
    Unacceptable,
}

impl RiskClassification {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Limited => "limited",
            Self::High => "high",
            Self::Unacceptable => "unacceptable",
        }
    }

    /// Whether this level belongs to the high-risk subset
    #[inline]
    #[must_use]
    pub fn is_high_risk(&self) -> bool {
        match self {
            Self::High | Self::Unacceptable => true,
            Self::Minimal | Self::Limited => false,
        }
    }
}

impl fmt::Display for RiskClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskClassification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "limited" => Ok(Self::Limited),
            "high" => Ok(Self::High),
            "unacceptable" => Ok(Self::Unacceptable),
            other => Err(format!("unknown risk classification: {other}")),
        }
    }
}

/// Individual AI component in an AIBOM
///
/// Optional text attributes are `None` when never set. An attribute set to
/// the empty string is treated as absent by the accessors below, which is
/// what the validation rules look at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Identifier, unique within a document (checked by validation only)
    #[serde(default)]
    pub id: String,
    /// Human-readable name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "type", alias = "component_type")]
    pub component_type: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, alias = "risk_classification")]
    pub risk: RiskClassification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Component {
    /// Create a component with minimal risk and no optional attributes
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: ComponentType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: None,
            component_type,
            provider: None,
            risk: RiskClassification::Minimal,
            description: None,
            license: None,
            capabilities: Vec::new(),
            limitations: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_risk(mut self, risk: RiskClassification) -> Self {
        self.risk = risk;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Add a capability
    #[must_use]
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    /// Add a known limitation
    #[must_use]
    pub fn with_limitation(mut self, limitation: impl Into<String>) -> Self {
        self.limitations.push(limitation.into());
        self
    }

    /// Version, if set and non-empty
    #[inline]
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        non_empty(self.version.as_deref())
    }

    /// Provider, if set and non-empty
    #[inline]
    #[must_use]
    pub fn provider(&self) -> Option<&str> {
        non_empty(self.provider.as_deref())
    }

    /// Description, if set and non-empty
    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// Check if component is a model
    #[inline]
    #[must_use]
    pub fn is_model(&self) -> bool {
        self.component_type == ComponentType::Model
    }

    /// Check if component is a tool
    #[inline]
    #[must_use]
    pub fn is_tool(&self) -> bool {
        self.component_type == ComponentType::Tool
    }

    /// Check if component is classified HIGH or UNACCEPTABLE
    #[inline]
    #[must_use]
    pub fn is_high_risk(&self) -> bool {
        self.risk.is_high_risk()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
